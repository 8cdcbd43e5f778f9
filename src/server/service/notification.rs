use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NotificationDto,
    server::{data::notification::NotificationRepository, error::Error},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's notifications, newest first
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<NotificationDto>, Error> {
        let notifications = NotificationRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(notifications
            .into_iter()
            .map(NotificationDto::try_from)
            .collect::<Result<_, _>>()?)
    }

    /// Deletes a notification owned by `user_id`
    ///
    /// # Returns
    /// - `Ok(())` - Notification deleted
    /// - `Err(Error::NotFound)` - Notification does not exist or belongs to someone else
    pub async fn delete(&self, user_id: i32, notification_id: i32) -> Result<(), Error> {
        let result = NotificationRepository::new(self.db)
            .delete(user_id, notification_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    /// Deletes every notification of the user, returns how many were removed
    pub async fn delete_all(&self, user_id: i32) -> Result<u64, Error> {
        let result = NotificationRepository::new(self.db)
            .delete_by_user(user_id)
            .await?;

        Ok(result.rows_affected)
    }
}
