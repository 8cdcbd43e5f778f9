use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        notification::NotificationKind,
        order::{CreateOrderDto, CreatedOrderDto, OrderDto, OrderLineDto, OrderStatus},
        user::UserSummaryDto,
    },
    server::{
        data::{
            notification::{NewNotification, NotificationRepository},
            order::OrderRepository,
            product::ProductRepository,
            user::UserRepository,
        },
        error::Error,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for `buyer_id`
    ///
    /// Stock of every product is decremented in the same transaction that stores the order,
    /// then the buyer and each distinct seller are notified.
    ///
    /// # Returns
    /// - `Ok(CreatedOrderDto)` - ID and total of the pending order
    /// - `Err(Error::BadRequest)` - No lines, unknown product, quantity below 1 or not enough stock
    /// - `Err(Error::Forbidden)` - A line is for one of the buyer's own products
    pub async fn create(
        &self,
        buyer_id: i32,
        dto: CreateOrderDto,
    ) -> Result<CreatedOrderDto, Error> {
        let lines = dto.products.unwrap_or_default();
        if lines.is_empty() {
            return Err(Error::BadRequest("No products in the order".to_string()));
        }

        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        let mut total_amount = 0.0;
        let mut ordered = Vec::with_capacity(lines.len());
        for line in lines {
            let quantity = line.quantity.unwrap_or(1);
            let product = match product_repo.get(line.product).await? {
                Some((product, _)) if quantity >= 1 => product,
                _ => return Err(insufficient_stock()),
            };

            if product.seller_id == buyer_id {
                return Err(Error::Forbidden(
                    "You cannot purchase your own product".to_string(),
                ));
            }

            if !product_repo.reserve_stock(product.id, quantity).await? {
                return Err(insufficient_stock());
            }

            total_amount += product.price * f64::from(quantity);
            ordered.push((product, quantity));
        }

        let order_repo = OrderRepository::new(&txn);
        let order = order_repo
            .create(buyer_id, total_amount, OrderStatus::Pending.as_str())
            .await?;
        for (product, quantity) in &ordered {
            order_repo.create_item(order.id, product, *quantity).await?;
        }

        let notification_repo = NotificationRepository::new(&txn);
        notification_repo
            .create(
                NewNotification::new(
                    buyer_id,
                    NotificationKind::Order,
                    format!(
                        "Your order totaling ${:.2} was placed successfully.",
                        total_amount
                    ),
                )
                .order(order.id)
                .action("create"),
            )
            .await?;

        let products: Vec<_> = ordered.into_iter().map(|(product, _)| product).collect();
        for product in first_product_per_seller(&products) {
            notification_repo
                .create(
                    NewNotification::new(
                        product.seller_id,
                        NotificationKind::Order,
                        format!(
                            "A new order was placed that includes your product \"{}\".",
                            product.name
                        ),
                    )
                    .order(order.id)
                    .product(product.id)
                    .action("incoming"),
                )
                .await?;
        }

        txn.commit().await?;

        Ok(CreatedOrderDto {
            order_id: order.id,
            total_amount: order.total_amount,
        })
    }

    /// Orders placed by `buyer_id`, newest first
    pub async fn get_by_buyer(&self, buyer_id: i32) -> Result<Vec<OrderDto>, Error> {
        let orders = OrderRepository::new(self.db).get_by_buyer(buyer_id).await?;

        order_dtos(self.db, orders).await
    }

    /// Orders containing at least one product listed by `seller_id`, newest first
    pub async fn get_by_seller(&self, seller_id: i32) -> Result<Vec<OrderDto>, Error> {
        let product_ids: Vec<i32> = ProductRepository::new(self.db)
            .get_by_seller(seller_id)
            .await?
            .into_iter()
            .map(|product| product.id)
            .collect();

        let orders = OrderRepository::new(self.db)
            .get_by_products(&product_ids)
            .await?;

        order_dtos(self.db, orders).await
    }

    /// Every order, newest first
    pub async fn get_all(&self) -> Result<Vec<OrderDto>, Error> {
        let orders = OrderRepository::new(self.db).get_all().await?;

        order_dtos(self.db, orders).await
    }

    /// Cancels a pending order placed by `buyer_id` and restores the stock it reserved
    ///
    /// # Returns
    /// - `Ok(())` - Order cancelled, buyer and sellers notified
    /// - `Err(Error::NotFound)` - Order does not exist
    /// - `Err(Error::Forbidden)` - Order was placed by someone else
    /// - `Err(Error::BadRequest)` - Order is no longer pending
    pub async fn cancel(&self, buyer_id: i32, order_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        let Some(order) = order_repo.get(order_id).await? else {
            return Err(Error::NotFound("Order not found".to_string()));
        };

        if order.buyer_id != Some(buyer_id) {
            return Err(Error::Forbidden(
                "Not authorized to cancel this order".to_string(),
            ));
        }

        if order.status != OrderStatus::Pending.as_str() {
            return Err(Error::BadRequest(
                "Only pending orders can be cancelled".to_string(),
            ));
        }

        let order = order_repo
            .update_status(order, OrderStatus::Cancelled.as_str())
            .await?;

        let product_repo = ProductRepository::new(&txn);
        let mut products = Vec::new();
        for (item, product) in order_repo.get_items(&[order.id]).await? {
            let Some(product) = product else {
                continue;
            };

            product_repo.restock(product.id, item.quantity).await?;
            products.push(product);
        }

        let notification_repo = NotificationRepository::new(&txn);
        notification_repo
            .create(
                NewNotification::new(
                    buyer_id,
                    NotificationKind::Order,
                    format!("You have successfully cancelled your order ({}).", order.id),
                )
                .order(order.id)
                .action("cancel"),
            )
            .await?;

        for product in first_product_per_seller(&products) {
            notification_repo
                .create(
                    NewNotification::new(
                        product.seller_id,
                        NotificationKind::Order,
                        format!(
                            "An order involving your product \"{}\" was cancelled by the buyer.",
                            product.name
                        ),
                    )
                    .order(order.id)
                    .product(product.id)
                    .action("cancelled-by-buyer"),
                )
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Sets the status of an order and notifies its buyer
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - The updated order
    /// - `Err(Error::BadRequest)` - Status missing or not one of the order statuses
    /// - `Err(Error::NotFound)` - Order does not exist
    pub async fn update_status(
        &self,
        order_id: i32,
        status: Option<String>,
    ) -> Result<OrderDto, Error> {
        let status: OrderStatus = status.as_deref().unwrap_or_default().parse().map_err(|_| {
            Error::BadRequest(format!(
                "Invalid status. Choose from: {}",
                OrderStatus::choices()
            ))
        })?;

        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        let Some(order) = order_repo.get(order_id).await? else {
            return Err(Error::NotFound("Order not found".to_string()));
        };

        let order = order_repo.update_status(order, status.as_str()).await?;

        if let Some(buyer_id) = order.buyer_id {
            NotificationRepository::new(&txn)
                .create(
                    NewNotification::new(
                        buyer_id,
                        NotificationKind::Order,
                        format!(
                            "Your order ({}) status was updated to \"{}\".",
                            order.id, status
                        ),
                    )
                    .order(order.id)
                    .action("status-update")
                    .status(status.as_str()),
                )
                .await?;
        }

        let mut orders = order_dtos(&txn, vec![order]).await?;

        txn.commit().await?;

        orders
            .pop()
            .ok_or_else(|| Error::InternalError("Updated order was not converted".to_string()))
    }
}

/// The first product of each distinct seller, in the given order
pub(crate) fn first_product_per_seller(
    products: &[entity::luxe_product::Model],
) -> Vec<&entity::luxe_product::Model> {
    let mut seen = HashSet::new();

    products
        .iter()
        .filter(|product| seen.insert(product.seller_id))
        .collect()
}

fn insufficient_stock() -> Error {
    Error::BadRequest("Invalid product or insufficient stock".to_string())
}

/// Converts orders into DTOs, loading buyers and lines for all of them at once
///
/// Orders whose buyer deleted their account have no buyer. Lines whose product was removed
/// keep the name and price recorded at purchase.
pub(crate) async fn order_dtos<C: ConnectionTrait>(
    db: &C,
    orders: Vec<entity::luxe_order::Model>,
) -> Result<Vec<OrderDto>, Error> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
    let mut buyer_ids: Vec<i32> = orders.iter().filter_map(|order| order.buyer_id).collect();
    buyer_ids.sort_unstable();
    buyer_ids.dedup();

    let buyers: HashMap<i32, entity::luxe_user::Model> = UserRepository::new(db)
        .get_many(&buyer_ids)
        .await?
        .into_iter()
        .map(|buyer| (buyer.id, buyer))
        .collect();

    let mut lines: HashMap<i32, Vec<OrderLineDto>> = HashMap::new();
    for (item, product) in OrderRepository::new(db).get_items(&order_ids).await? {
        lines.entry(item.order_id).or_default().push(OrderLineDto {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            seller_id: product.map(|product| product.seller_id),
            quantity: item.quantity,
        });
    }

    orders
        .into_iter()
        .map(|order| -> Result<OrderDto, Error> {
            let buyer = order
                .buyer_id
                .and_then(|buyer_id| buyers.get(&buyer_id))
                .map(UserSummaryDto::from);

            Ok(OrderDto {
                id: order.id,
                buyer,
                items: lines.remove(&order.id).unwrap_or_default(),
                total_amount: order.total_amount,
                status: order.status.parse()?,
                created_at: order.created_at,
                updated_at: order.updated_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {

    mod create {
        use luxe_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::{
            model::order::{CreateOrderDto, OrderLineInputDto},
            server::{
                data::notification::NotificationRepository, error::Error,
                service::order::OrderService,
            },
        };

        fn order_of(product: i32, quantity: i32) -> CreateOrderDto {
            CreateOrderDto {
                products: Some(vec![OrderLineInputDto {
                    product,
                    quantity: Some(quantity),
                }]),
            }
        }

        /// Expect the total to be computed, stock decremented and both parties notified
        #[tokio::test]
        async fn places_order_and_decrements_stock() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 12.5, 5).await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service.create(buyer.id, order_of(lamp.id, 2)).await;

            let created = result.unwrap();
            assert_eq!(created.total_amount, 25.0);
            let stored = entity::prelude::LuxeProduct::find_by_id(lamp.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(stored.quantity, 3);

            let notification_repo = NotificationRepository::new(&test.state.db);
            let buyer_notifications = notification_repo.get_by_user(buyer.id).await?;
            assert_eq!(
                buyer_notifications[0].message,
                "Your order totaling $25.00 was placed successfully."
            );
            let seller_notifications = notification_repo.get_by_user(seller.id).await?;
            assert_eq!(seller_notifications.len(), 1);
            assert_eq!(seller_notifications[0].action.as_deref(), Some("incoming"));

            Ok(())
        }

        /// Expect one notification per seller even when several of their products are ordered
        #[tokio::test]
        async fn notifies_each_seller_once() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 5).await?;
            let desk = test.product().insert_product(seller.id, "Desk", 90.0, 5).await?;

            let order_service = OrderService::new(&test.state.db);
            order_service
                .create(
                    buyer.id,
                    CreateOrderDto {
                        products: Some(vec![
                            OrderLineInputDto {
                                product: lamp.id,
                                quantity: None,
                            },
                            OrderLineInputDto {
                                product: desk.id,
                                quantity: Some(1),
                            },
                        ]),
                    },
                )
                .await
                .unwrap();

            let seller_notifications = NotificationRepository::new(&test.state.db)
                .get_by_user(seller.id)
                .await?;
            assert_eq!(seller_notifications.len(), 1);
            assert_eq!(seller_notifications[0].product_id, Some(lamp.id));

            Ok(())
        }

        /// Expect BadRequest when no lines are given
        #[tokio::test]
        async fn fails_for_empty_order() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service
                .create(
                    buyer.id,
                    CreateOrderDto {
                        products: Some(Vec::new()),
                    },
                )
                .await;

            assert!(matches!(result, Err(Error::BadRequest(ref m)) if m == "No products in the order"));

            Ok(())
        }

        /// Expect BadRequest and untouched stock when ordering more than is available
        #[tokio::test]
        async fn fails_for_insufficient_stock() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 1).await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service.create(buyer.id, order_of(lamp.id, 2)).await;

            assert!(matches!(
                result,
                Err(Error::BadRequest(ref m)) if m == "Invalid product or insufficient stock"
            ));
            let stored = entity::prelude::LuxeProduct::find_by_id(lamp.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(stored.quantity, 1);

            Ok(())
        }

        /// Expect Forbidden when buying one's own product
        #[tokio::test]
        async fn fails_for_own_product() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 3).await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service.create(seller.id, order_of(lamp.id, 1)).await;

            assert!(matches!(
                result,
                Err(Error::Forbidden(ref m)) if m == "You cannot purchase your own product"
            ));

            Ok(())
        }
    }

    mod cancel {
        use luxe_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::{error::Error, service::order::OrderService};

        /// Expect the order to be cancelled and its stock restored
        #[tokio::test]
        async fn cancels_pending_order() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 3).await?;
            let (order, _) = test
                .order()
                .insert_order(buyer.id, "pending", &[(&lamp, 2)])
                .await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service.cancel(buyer.id, order.id).await;

            assert!(result.is_ok());
            let stored_order = entity::prelude::LuxeOrder::find_by_id(order.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(stored_order.status, "cancelled");
            let stored_product = entity::prelude::LuxeProduct::find_by_id(lamp.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(stored_product.quantity, 5);

            Ok(())
        }

        /// Expect BadRequest when the order is no longer pending
        #[tokio::test]
        async fn fails_for_non_pending_order() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 3).await?;
            let (order, _) = test
                .order()
                .insert_order(buyer.id, "paid", &[(&lamp, 1)])
                .await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service.cancel(buyer.id, order.id).await;

            assert!(matches!(
                result,
                Err(Error::BadRequest(ref m)) if m == "Only pending orders can be cancelled"
            ));

            Ok(())
        }

        /// Expect Forbidden when cancelling someone else's order
        #[tokio::test]
        async fn fails_for_other_buyers_order() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 3).await?;
            let (order, _) = test
                .order()
                .insert_order(buyer.id, "pending", &[(&lamp, 1)])
                .await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service.cancel(seller.id, order.id).await;

            assert!(matches!(result, Err(Error::Forbidden(_))));

            Ok(())
        }

        /// Expect NotFound for an order that does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_order() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service.cancel(buyer.id, 9).await;

            assert!(matches!(result, Err(Error::NotFound(ref m)) if m == "Order not found"));

            Ok(())
        }
    }

    mod listing {
        use luxe_test_utils::prelude::*;

        use crate::server::service::order::OrderService;

        /// Expect seller orders to carry buyer name and lines
        #[tokio::test]
        async fn lists_orders_for_seller() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let other_seller = test.user().insert_user("Other", "other@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 3).await?;
            let desk = test.product().insert_product(other_seller.id, "Desk", 90.0, 3).await?;
            test.order().insert_order(buyer.id, "pending", &[(&lamp, 1)]).await?;
            test.order().insert_order(buyer.id, "pending", &[(&desk, 1)]).await?;

            let order_service = OrderService::new(&test.state.db);
            let orders = order_service.get_by_seller(seller.id).await.unwrap();

            assert_eq!(orders.len(), 1);
            assert_eq!(orders[0].buyer.as_ref().map(|b| b.name.as_str()), Some("Buyer"));
            assert_eq!(orders[0].items[0].name, "Lamp");
            assert_eq!(order_service.get_all().await.unwrap().len(), 2);
            assert_eq!(order_service.get_by_buyer(buyer.id).await.unwrap().len(), 2);

            Ok(())
        }
    }

    mod update_status {
        use luxe_test_utils::prelude::*;

        use crate::{
            model::order::OrderStatus,
            server::{
                data::notification::NotificationRepository, error::Error,
                service::order::OrderService,
            },
        };

        /// Expect the new status and a notification for the buyer
        #[tokio::test]
        async fn updates_and_notifies_buyer() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let seller = test.user().insert_user("Seller", "seller@example.com").await?;
            let buyer = test.user().insert_user("Buyer", "buyer@example.com").await?;
            let lamp = test.product().insert_product(seller.id, "Lamp", 10.0, 3).await?;
            let (order, _) = test
                .order()
                .insert_order(buyer.id, "paid", &[(&lamp, 1)])
                .await?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service
                .update_status(order.id, Some("shipped".to_string()))
                .await;

            let updated = result.unwrap();
            assert_eq!(updated.status, OrderStatus::Shipped);
            let notifications = NotificationRepository::new(&test.state.db)
                .get_by_user(buyer.id)
                .await?;
            assert_eq!(
                notifications[0].message,
                format!("Your order ({}) status was updated to \"shipped\".", order.id)
            );
            assert_eq!(notifications[0].status.as_deref(), Some("shipped"));

            Ok(())
        }

        /// Expect BadRequest for a status outside the known values
        #[tokio::test]
        async fn fails_for_unknown_status() -> Result<(), TestError> {
            let test = test_setup_with_luxe_tables!()?;

            let order_service = OrderService::new(&test.state.db);
            let result = order_service
                .update_status(1, Some("lost".to_string()))
                .await;

            assert!(matches!(result, Err(Error::BadRequest(_))));

            Ok(())
        }
    }
}
