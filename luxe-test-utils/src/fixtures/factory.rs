//! Factory functions for in-memory database models.
//!
//! Nothing here touches the database. Use these for unit tests of conversions and pure logic.

use chrono::{NaiveDate, Utc};

use crate::model::{ExpenseModel, NotificationModel, ProductModel, UserModel};

/// Create a user model with the given ID and name
pub fn mock_user_model(id: i32, name: &str) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id,
        name: name.to_string(),
        email: format!("user{}@example.com", id),
        password_hash: "hash".to_string(),
        image: "https://placehold.co/150x150/1F9F5A/FFBF00?text=TU&font=inter".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a product model listed by `seller_id`
pub fn mock_product_model(id: i32, seller_id: i32, category: &str) -> ProductModel {
    let now = Utc::now().naive_utc();
    ProductModel {
        id,
        seller_id,
        name: "Test Product".to_string(),
        price: 19.99,
        quantity: 5,
        description: None,
        category: category.to_string(),
        image: "https://cdn.example.com/product.png".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create an expense model
///
/// # Arguments
/// - `kind` - Stored entry type, `"Income"` or `"Expense"`
/// - `amount` - Amount of the entry
pub fn mock_expense_model(id: i32, user_id: i32, kind: &str, amount: f64) -> ExpenseModel {
    let now = Utc::now().naive_utc();
    ExpenseModel {
        id,
        user_id,
        title: "Groceries".to_string(),
        kind: kind.to_string(),
        amount,
        category: "Food".to_string(),
        payment_method: "UPI".to_string(),
        note: None,
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap_or_default(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a notification model with an order reference
pub fn mock_notification_model(id: i32, user_id: i32, kind: &str) -> NotificationModel {
    NotificationModel {
        id,
        user_id,
        kind: kind.to_string(),
        message: "Your order totaling $10.00 was placed successfully.".to_string(),
        order_id: Some(1),
        product_id: None,
        expense_id: None,
        action: Some("create".to_string()),
        status: None,
        created_at: Utc::now().naive_utc(),
    }
}
