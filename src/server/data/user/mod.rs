pub mod cart;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// # Arguments
    /// - `password_hash` - Bcrypt hash of the user's password, never the plain text
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        image: String,
    ) -> Result<entity::luxe_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::luxe_user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            image: ActiveValue::Set(image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::luxe_user::Model>, DbErr> {
        entity::prelude::LuxeUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets a user by email, matching is exact
    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::luxe_user::Model>, DbErr> {
        entity::prelude::LuxeUser::find()
            .filter(entity::luxe_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets every user whose ID is in `user_ids`
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<entity::luxe_user::Model>, DbErr> {
        entity::prelude::LuxeUser::find()
            .filter(entity::luxe_user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Replaces the name and image of a user
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update_profile(
        &self,
        user_id: i32,
        name: String,
        image: String,
    ) -> Result<Option<entity::luxe_user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.name = ActiveValue::Set(name);
        user_am.image = ActiveValue::Set(image);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Replaces the profile image of a user
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update_image(
        &self,
        user_id: i32,
        image: String,
    ) -> Result<Option<entity::luxe_user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.image = ActiveValue::Set(image);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
