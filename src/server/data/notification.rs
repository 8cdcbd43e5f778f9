use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::notification::NotificationKind;

/// A notification about to be stored for a user
///
/// # Example
/// ```ignore
/// let notification = NewNotification::new(user_id, NotificationKind::Order, message)
///     .order(order.id)
///     .action("create");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NewNotification {
    pub user_id: i32,
    pub kind: NotificationKind,
    pub message: String,
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub expense_id: Option<i32>,
    pub action: Option<String>,
    pub status: Option<String>,
}

impl NewNotification {
    pub fn new(user_id: i32, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            user_id,
            kind,
            message: message.into(),
            order_id: None,
            product_id: None,
            expense_id: None,
            action: None,
            status: None,
        }
    }

    pub fn order(mut self, order_id: i32) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn product(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn expense(mut self, expense_id: i32) -> Self {
        self.expense_id = Some(expense_id);
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<entity::luxe_notification::Model, DbErr> {
        let notification = entity::luxe_notification::ActiveModel {
            user_id: ActiveValue::Set(notification.user_id),
            kind: ActiveValue::Set(notification.kind.as_str().to_string()),
            message: ActiveValue::Set(notification.message),
            order_id: ActiveValue::Set(notification.order_id),
            product_id: ActiveValue::Set(notification.product_id),
            expense_id: ActiveValue::Set(notification.expense_id),
            action: ActiveValue::Set(notification.action),
            status: ActiveValue::Set(notification.status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    /// Gets a user's notifications, newest first
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::luxe_notification::Model>, DbErr> {
        entity::prelude::LuxeNotification::find()
            .filter(entity::luxe_notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::luxe_notification::Column::CreatedAt)
            .order_by_desc(entity::luxe_notification::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a notification owned by `user_id`
    ///
    /// Notifications of other users are left untouched and report zero rows affected.
    pub async fn delete(&self, user_id: i32, notification_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeNotification::delete_many()
            .filter(entity::luxe_notification::Column::Id.eq(notification_id))
            .filter(entity::luxe_notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeNotification::delete_many()
            .filter(entity::luxe_notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
