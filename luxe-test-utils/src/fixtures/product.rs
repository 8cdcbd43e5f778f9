use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ProductModel, TestSetup};

impl TestSetup {
    pub fn product<'a>(&'a mut self) -> ProductFixtures<'a> {
        ProductFixtures { setup: self }
    }
}

pub struct ProductFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ProductFixtures<'a> {
    /// Insert an `Electronics` product listed by `seller_id`
    pub async fn insert_product(
        &self,
        seller_id: i32,
        name: &str,
        price: f64,
        quantity: i32,
    ) -> Result<ProductModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::LuxeProduct::insert(entity::luxe_product::ActiveModel {
                seller_id: ActiveValue::Set(seller_id),
                name: ActiveValue::Set(name.to_string()),
                price: ActiveValue::Set(price),
                quantity: ActiveValue::Set(quantity),
                description: ActiveValue::Set(Some(format!("{} description", name))),
                category: ActiveValue::Set("Electronics".to_string()),
                image: ActiveValue::Set(format!("https://cdn.example.com/{}.png", seller_id)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
