use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    /// Creates a new instance of [`CartRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a product to a user's cart
    pub async fn add(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<entity::luxe_cart_item::Model, DbErr> {
        let cart_item = entity::luxe_cart_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(product_id),
            quantity: ActiveValue::Set(quantity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        cart_item.insert(self.db).await
    }

    /// Gets the cart line for a product in a user's cart
    pub async fn get(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<entity::luxe_cart_item::Model>, DbErr> {
        entity::prelude::LuxeCartItem::find()
            .filter(entity::luxe_cart_item::Column::UserId.eq(user_id))
            .filter(entity::luxe_cart_item::Column::ProductId.eq(product_id))
            .one(self.db)
            .await
    }

    /// Gets a user's cart lines in the order they were added, along with their products
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::luxe_cart_item::Model,
            Option<entity::luxe_product::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::LuxeCartItem::find()
            .filter(entity::luxe_cart_item::Column::UserId.eq(user_id))
            .order_by_asc(entity::luxe_cart_item::Column::CreatedAt)
            .order_by_asc(entity::luxe_cart_item::Column::Id)
            .find_also_related(entity::luxe_product::Entity)
            .all(self.db)
            .await
    }

    pub async fn remove(&self, cart_item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeCartItem::delete_by_id(cart_item_id)
            .exec(self.db)
            .await
    }

    /// Empties a user's cart
    pub async fn delete_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeCartItem::delete_many()
            .filter(entity::luxe_cart_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Removes the listed products from every cart
    pub async fn delete_by_products(&self, product_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeCartItem::delete_many()
            .filter(entity::luxe_cart_item::Column::ProductId.is_in(product_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
