//! Database model type aliases for test utilities.
//!
//! These aliases match the ones the luxe crate uses so fixtures and assertions read the same
//! on both sides.

pub type UserModel = entity::luxe_user::Model;

pub type ProductModel = entity::luxe_product::Model;

pub type CartItemModel = entity::luxe_cart_item::Model;

pub type OrderModel = entity::luxe_order::Model;

pub type OrderItemModel = entity::luxe_order_item::Model;

pub type ExpenseModel = entity::luxe_expense::Model;

pub type NotificationModel = entity::luxe_notification::Model;
