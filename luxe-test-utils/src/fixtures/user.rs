use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD},
    error::TestError,
    model::{CartItemModel, UserModel},
    TestSetup,
};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`]
    pub async fn insert_user(&self, name: &str, email: &str) -> Result<UserModel, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::LuxeUser::insert(entity::luxe_user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                image: ActiveValue::Set(
                    "https://placehold.co/150x150/1F9F5A/FFBF00?text=TU&font=inter".to_string(),
                ),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a cart line for `user_id`
    pub async fn insert_cart_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItemModel, TestError> {
        Ok(
            entity::prelude::LuxeCartItem::insert(entity::luxe_cart_item::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                product_id: ActiveValue::Set(product_id),
                quantity: ActiveValue::Set(quantity),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
