//! Checkout through the payment gateway.
//!
//! Initiation hands the buyer off to the gateway's hosted payment page with the order ID in the
//! transaction metadata. Verification reads that ID back, marks the order paid and notifies the
//! buyer and every seller involved.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        notification::NotificationKind,
        order::{OrderDto, OrderStatus},
        payment::{InitiatePaymentDto, PaymentInitializationDto},
    },
    server::{
        data::{
            notification::{NewNotification, NotificationRepository},
            order::OrderRepository,
            user::UserRepository,
        },
        error::{payment::PaymentError, Error},
        gateway::{PaystackClient, TransactionMetadata},
        service::order::{first_product_per_seller, order_dtos},
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a PaystackClient,
}

impl<'a> PaymentService<'a> {
    /// Creates a new instance of [`PaymentService`]
    pub fn new(db: &'a DatabaseConnection, gateway: &'a PaystackClient) -> Self {
        Self { db, gateway }
    }

    /// Starts a gateway transaction for an order placed by `buyer_id`
    ///
    /// The receipt goes to the account email unless another address is given.
    ///
    /// # Returns
    /// - `Ok(PaymentInitializationDto)` - Checkout page and transaction reference
    /// - `Err(Error::BadRequest)` - No order ID given
    /// - `Err(Error::NotFound)` - Order does not exist
    /// - `Err(Error::Forbidden)` - Order was placed by someone else
    /// - `Err(Error::BadRequest)` - Order is no longer pending
    /// - `Err(Error::PaymentError)` - Gateway unreachable or rejected the request
    pub async fn initiate(
        &self,
        buyer_id: i32,
        dto: InitiatePaymentDto,
    ) -> Result<PaymentInitializationDto, Error> {
        let Some(order_id) = dto.order_id else {
            return Err(Error::BadRequest("Order ID is required".to_string()));
        };

        let Some(order) = OrderRepository::new(self.db).get(order_id).await? else {
            return Err(Error::NotFound("Order not found".to_string()));
        };

        if order.buyer_id != Some(buyer_id) {
            return Err(Error::Forbidden(
                "Not authorized to pay for this order".to_string(),
            ));
        }

        if order.status != OrderStatus::Pending.as_str() {
            return Err(not_awaiting_payment());
        }

        let email = match dto.email.filter(|email| !email.trim().is_empty()) {
            Some(email) => email,
            None => {
                UserRepository::new(self.db)
                    .get(buyer_id)
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError(format!("Buyer ID {} of order not found", buyer_id))
                    })?
                    .email
            }
        };

        let metadata = TransactionMetadata {
            order_id: order.id,
            buyer: buyer_id,
        };

        let checkout = self
            .gateway
            .initialize_transaction(&email, to_minor_units(order.total_amount), &metadata)
            .await?;

        tracing::debug!(
            order_id = order.id,
            reference = %checkout.reference,
            "Initialized payment"
        );

        Ok(checkout)
    }

    /// Confirms a transaction with the gateway and marks its order as paid
    ///
    /// Verifying an order that is already paid returns it without notifying anyone again. Only
    /// pending orders can become paid, and the charged amount must equal the order total.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - The paid order
    /// - `Err(Error::PaymentError)` - Gateway failure, unsuccessful payment, no order reference
    ///   or an amount other than the order total
    /// - `Err(Error::NotFound)` - Referenced order does not exist
    /// - `Err(Error::BadRequest)` - Order was cancelled, shipped or delivered
    pub async fn verify(&self, reference: &str) -> Result<OrderDto, Error> {
        let transaction = self.gateway.verify_transaction(reference).await?;

        if !transaction.is_successful() {
            return Err(PaymentError::NotSuccessful {
                reference: transaction.reference,
                status: transaction.status,
            }
            .into());
        }

        let Some(order_id) = transaction.order_id() else {
            return Err(PaymentError::MissingOrderReference(transaction.reference).into());
        };

        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        let Some(order) = order_repo.get(order_id).await? else {
            return Err(Error::NotFound("Order not found".to_string()));
        };

        if order.status == OrderStatus::Paid.as_str() {
            let mut orders = order_dtos(&txn, vec![order]).await?;
            txn.commit().await?;

            return orders
                .pop()
                .ok_or_else(|| Error::InternalError("Paid order was not converted".to_string()));
        }

        if order.status != OrderStatus::Pending.as_str() {
            return Err(not_awaiting_payment());
        }

        let expected = to_minor_units(order.total_amount);
        if transaction.amount != expected {
            return Err(PaymentError::AmountMismatch {
                reference: transaction.reference,
                paid: transaction.amount,
                expected,
            }
            .into());
        }

        let order = order_repo
            .update_status(order, OrderStatus::Paid.as_str())
            .await?;

        let notification_repo = NotificationRepository::new(&txn);
        if let Some(buyer_id) = order.buyer_id {
            notification_repo
                .create(
                    NewNotification::new(
                        buyer_id,
                        NotificationKind::Payment,
                        format!(
                            "Payment for your order of ${:.2} was successful.",
                            order.total_amount
                        ),
                    )
                    .order(order.id)
                    .action("payment-success"),
                )
                .await?;
        }

        let products: Vec<_> = order_repo
            .get_items(&[order.id])
            .await?
            .into_iter()
            .filter_map(|(_, product)| product)
            .collect();
        for product in first_product_per_seller(&products) {
            notification_repo
                .create(
                    NewNotification::new(
                        product.seller_id,
                        NotificationKind::Payment,
                        format!(
                            "An order containing your product \"{}\" has been paid.",
                            product.name
                        ),
                    )
                    .order(order.id)
                    .product(product.id)
                    .action("payment-received"),
                )
                .await?;
        }

        let mut orders = order_dtos(&txn, vec![order]).await?;

        txn.commit().await?;

        tracing::info!(order_id, reference, "Payment verified");

        orders
            .pop()
            .ok_or_else(|| Error::InternalError("Paid order was not converted".to_string()))
    }
}

fn not_awaiting_payment() -> Error {
    Error::BadRequest("Order is not awaiting payment".to_string())
}

/// Converts an amount to the currency's minor unit, rounding to the nearest unit
fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
