use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, UpdateResult,
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an order without lines, add them with [`Self::create_item`]
    pub async fn create(
        &self,
        buyer_id: i32,
        total_amount: f64,
        status: &str,
    ) -> Result<entity::luxe_order::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let order = entity::luxe_order::ActiveModel {
            buyer_id: ActiveValue::Set(Some(buyer_id)),
            total_amount: ActiveValue::Set(total_amount),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    /// Adds a line to an order, keeping the product's current name and price
    pub async fn create_item(
        &self,
        order_id: i32,
        product: &entity::luxe_product::Model,
        quantity: i32,
    ) -> Result<entity::luxe_order_item::Model, DbErr> {
        let item = entity::luxe_order_item::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            product_id: ActiveValue::Set(Some(product.id)),
            name: ActiveValue::Set(product.name.clone()),
            price: ActiveValue::Set(product.price),
            quantity: ActiveValue::Set(quantity),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn get(&self, order_id: i32) -> Result<Option<entity::luxe_order::Model>, DbErr> {
        entity::prelude::LuxeOrder::find_by_id(order_id)
            .one(self.db)
            .await
    }

    /// Gets every order, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::luxe_order::Model>, DbErr> {
        entity::prelude::LuxeOrder::find()
            .order_by_desc(entity::luxe_order::Column::CreatedAt)
            .order_by_desc(entity::luxe_order::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the orders placed by a buyer, newest first
    pub async fn get_by_buyer(
        &self,
        buyer_id: i32,
    ) -> Result<Vec<entity::luxe_order::Model>, DbErr> {
        entity::prelude::LuxeOrder::find()
            .filter(entity::luxe_order::Column::BuyerId.eq(buyer_id))
            .order_by_desc(entity::luxe_order::Column::CreatedAt)
            .order_by_desc(entity::luxe_order::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the orders containing at least one of the products, newest first
    pub async fn get_by_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<entity::luxe_order::Model>, DbErr> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = entity::prelude::LuxeOrderItem::find()
            .filter(entity::luxe_order_item::Column::ProductId.is_in(product_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|item| item.order_id)
            .collect();

        entity::prelude::LuxeOrder::find()
            .filter(entity::luxe_order::Column::Id.is_in(order_ids))
            .order_by_desc(entity::luxe_order::Column::CreatedAt)
            .order_by_desc(entity::luxe_order::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the lines of the given orders along with their products
    pub async fn get_items(
        &self,
        order_ids: &[i32],
    ) -> Result<
        Vec<(
            entity::luxe_order_item::Model,
            Option<entity::luxe_product::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::LuxeOrderItem::find()
            .filter(entity::luxe_order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::luxe_order_item::Column::Id)
            .find_also_related(entity::luxe_product::Entity)
            .all(self.db)
            .await
    }

    /// Unlinks a buyer from the orders they placed, leaving the orders in place
    pub async fn detach_buyer(&self, buyer_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::LuxeOrder::update_many()
            .col_expr(
                entity::luxe_order::Column::BuyerId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::luxe_order::Column::BuyerId.eq(buyer_id))
            .exec(self.db)
            .await
    }

    /// Unlinks order lines from the products, lines keep their name and price
    pub async fn detach_products(&self, product_ids: &[i32]) -> Result<UpdateResult, DbErr> {
        entity::prelude::LuxeOrderItem::update_many()
            .col_expr(
                entity::luxe_order_item::Column::ProductId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::luxe_order_item::Column::ProductId.is_in(product_ids.iter().copied()))
            .exec(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        order: entity::luxe_order::Model,
        status: &str,
    ) -> Result<entity::luxe_order::Model, DbErr> {
        let mut order_am = order.into_active_model();
        order_am.status = ActiveValue::Set(status.to_string());
        order_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        order_am.update(self.db).await
    }
}
