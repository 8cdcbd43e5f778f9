use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::InvalidVariant;

string_enum! {
    pub enum NotificationKind {
        Expense => "expense",
        Product => "product",
        Order => "order",
        Payment => "payment",
    }
}

/// References to the records a notification is about
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadataDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub metadata: NotificationMetadataDto,
    pub created_at: NaiveDateTime,
}

impl TryFrom<entity::luxe_notification::Model> for NotificationDto {
    type Error = InvalidVariant;

    fn try_from(notification: entity::luxe_notification::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: notification.id,
            kind: notification.kind.parse()?,
            message: notification.message,
            metadata: NotificationMetadataDto {
                order_id: notification.order_id,
                product_id: notification.product_id,
                expense_id: notification.expense_id,
                action: notification.action,
                status: notification.status,
            },
            created_at: notification.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use luxe_test_utils::prelude::*;

    use super::*;

    /// Expect unset references to be left out of the serialized metadata
    #[test]
    fn omits_empty_metadata_fields() {
        let dto = NotificationDto::try_from(factory::mock_notification_model(1, 2, "order")).unwrap();

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["type"], "order");
        assert_eq!(value["metadata"]["orderId"], 1);
        assert_eq!(value["metadata"]["action"], "create");
        assert!(value["metadata"].get("productId").is_none());
    }

    #[test]
    fn fails_for_unknown_kind() {
        let result = NotificationDto::try_from(factory::mock_notification_model(1, 2, "chat"));

        assert!(result.is_err());
    }
}
