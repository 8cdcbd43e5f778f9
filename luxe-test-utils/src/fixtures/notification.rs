use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::NotificationModel, TestSetup};

impl TestSetup {
    pub fn notification<'a>(&'a mut self) -> NotificationFixtures<'a> {
        NotificationFixtures { setup: self }
    }
}

pub struct NotificationFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> NotificationFixtures<'a> {
    /// Insert a notification without metadata
    pub async fn insert_notification(
        &self,
        user_id: i32,
        kind: &str,
        message: &str,
    ) -> Result<NotificationModel, TestError> {
        Ok(
            entity::prelude::LuxeNotification::insert(entity::luxe_notification::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                kind: ActiveValue::Set(kind.to_string()),
                message: ActiveValue::Set(message.to_string()),
                order_id: ActiveValue::Set(None),
                product_id: ActiveValue::Set(None),
                expense_id: ActiveValue::Set(None),
                action: ActiveValue::Set(None),
                status: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
