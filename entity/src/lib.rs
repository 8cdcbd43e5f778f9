pub mod prelude;

pub mod luxe_cart_item;
pub mod luxe_expense;
pub mod luxe_notification;
pub mod luxe_order;
pub mod luxe_order_item;
pub mod luxe_product;
pub mod luxe_user;
