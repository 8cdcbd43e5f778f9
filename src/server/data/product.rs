use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Fields of a product being listed
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub category: String,
    pub image: String,
}

/// Changes to a listed product, `None` keeps the stored value
#[derive(Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        seller_id: i32,
        product: NewProduct,
    ) -> Result<entity::luxe_product::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let product = entity::luxe_product::ActiveModel {
            seller_id: ActiveValue::Set(seller_id),
            name: ActiveValue::Set(product.name),
            price: ActiveValue::Set(product.price),
            quantity: ActiveValue::Set(product.quantity),
            description: ActiveValue::Set(product.description),
            category: ActiveValue::Set(product.category),
            image: ActiveValue::Set(product.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    /// Gets a product along with its seller
    pub async fn get(
        &self,
        product_id: i32,
    ) -> Result<
        Option<(
            entity::luxe_product::Model,
            Option<entity::luxe_user::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::LuxeProduct::find_by_id(product_id)
            .find_also_related(entity::luxe_user::Entity)
            .one(self.db)
            .await
    }

    /// Gets every product with its seller, newest first
    pub async fn get_all(
        &self,
    ) -> Result<
        Vec<(
            entity::luxe_product::Model,
            Option<entity::luxe_user::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::LuxeProduct::find()
            .order_by_desc(entity::luxe_product::Column::CreatedAt)
            .order_by_desc(entity::luxe_product::Column::Id)
            .find_also_related(entity::luxe_user::Entity)
            .all(self.db)
            .await
    }

    /// Gets every product listed by a seller, newest first
    pub async fn get_by_seller(
        &self,
        seller_id: i32,
    ) -> Result<Vec<entity::luxe_product::Model>, DbErr> {
        entity::prelude::LuxeProduct::find()
            .filter(entity::luxe_product::Column::SellerId.eq(seller_id))
            .order_by_desc(entity::luxe_product::Column::CreatedAt)
            .order_by_desc(entity::luxe_product::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every product whose ID is in `product_ids`
    pub async fn get_many(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<entity::luxe_product::Model>, DbErr> {
        entity::prelude::LuxeProduct::find()
            .filter(entity::luxe_product::Column::Id.is_in(product_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Applies `changes` to a product
    ///
    /// Returns `None` if the product does not exist.
    pub async fn update(
        &self,
        product_id: i32,
        changes: ProductChanges,
    ) -> Result<Option<entity::luxe_product::Model>, DbErr> {
        let Some(product) = entity::prelude::LuxeProduct::find_by_id(product_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut product_am = product.into_active_model();
        if let Some(name) = changes.name {
            product_am.name = ActiveValue::Set(name);
        }
        if let Some(price) = changes.price {
            product_am.price = ActiveValue::Set(price);
        }
        if let Some(quantity) = changes.quantity {
            product_am.quantity = ActiveValue::Set(quantity);
        }
        if let Some(description) = changes.description {
            product_am.description = ActiveValue::Set(Some(description));
        }
        if let Some(category) = changes.category {
            product_am.category = ActiveValue::Set(category);
        }
        if let Some(image) = changes.image {
            product_am.image = ActiveValue::Set(image);
        }
        product_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    /// Takes `quantity` units out of stock in a single conditional update
    ///
    /// Returns `false` without changing anything when the product does not exist or holds
    /// fewer than `quantity` units.
    pub async fn reserve_stock(&self, product_id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LuxeProduct::update_many()
            .col_expr(
                entity::luxe_product::Column::Quantity,
                Expr::col(entity::luxe_product::Column::Quantity).sub(quantity),
            )
            .col_expr(
                entity::luxe_product::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::luxe_product::Column::Id.eq(product_id))
            .filter(entity::luxe_product::Column::Quantity.gte(quantity))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Puts `quantity` units back into stock
    pub async fn restock(&self, product_id: i32, quantity: i32) -> Result<(), DbErr> {
        entity::prelude::LuxeProduct::update_many()
            .col_expr(
                entity::luxe_product::Column::Quantity,
                Expr::col(entity::luxe_product::Column::Quantity).add(quantity),
            )
            .col_expr(
                entity::luxe_product::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::luxe_product::Column::Id.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Whether any order line references one of the products
    pub async fn has_orders(&self, product_ids: &[i32]) -> Result<bool, DbErr> {
        if product_ids.is_empty() {
            return Ok(false);
        }

        let count = entity::prelude::LuxeOrderItem::find()
            .filter(entity::luxe_order_item::Column::ProductId.is_in(product_ids.iter().copied()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a product
    ///
    /// Returns OK regardless of product existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeProduct::delete_by_id(product_id)
            .exec(self.db)
            .await
    }

    /// Deletes every product listed by a seller
    pub async fn delete_by_seller(&self, seller_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeProduct::delete_many()
            .filter(entity::luxe_product::Column::SellerId.eq(seller_id))
            .exec(self.db)
            .await
    }
}
