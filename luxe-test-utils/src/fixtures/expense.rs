use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ExpenseModel, TestSetup};

impl TestSetup {
    pub fn expense<'a>(&'a mut self) -> ExpenseFixtures<'a> {
        ExpenseFixtures { setup: self }
    }
}

pub struct ExpenseFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ExpenseFixtures<'a> {
    /// Insert a cash-paid entry
    ///
    /// # Arguments
    /// - `kind` - `"Income"` or `"Expense"`
    /// - `category` - One of the expense categories, e.g. `"Food"`
    pub async fn insert_expense(
        &self,
        user_id: i32,
        title: &str,
        kind: &str,
        amount: f64,
        category: &str,
        date: NaiveDate,
    ) -> Result<ExpenseModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::LuxeExpense::insert(entity::luxe_expense::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                title: ActiveValue::Set(title.to_string()),
                kind: ActiveValue::Set(kind.to_string()),
                amount: ActiveValue::Set(amount),
                category: ActiveValue::Set(category.to_string()),
                payment_method: ActiveValue::Set("Cash".to_string()),
                note: ActiveValue::Set(None),
                date: ActiveValue::Set(date),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
