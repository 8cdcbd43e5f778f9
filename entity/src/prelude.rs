pub use super::luxe_cart_item::Entity as LuxeCartItem;
pub use super::luxe_expense::Entity as LuxeExpense;
pub use super::luxe_notification::Entity as LuxeNotification;
pub use super::luxe_order::Entity as LuxeOrder;
pub use super::luxe_order_item::Entity as LuxeOrderItem;
pub use super::luxe_product::Entity as LuxeProduct;
pub use super::luxe_user::Entity as LuxeUser;
