use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// A validated expense or income entry
///
/// Enumerated fields hold their stored string form.
pub struct ExpenseFields {
    pub title: String,
    pub kind: String,
    pub amount: f64,
    pub category: String,
    pub payment_method: String,
    pub note: Option<String>,
    pub date: NaiveDate,
}

pub struct ExpenseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExpenseRepository<'a, C> {
    /// Creates a new instance of [`ExpenseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        fields: ExpenseFields,
    ) -> Result<entity::luxe_expense::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let expense = entity::luxe_expense::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(fields.title),
            kind: ActiveValue::Set(fields.kind),
            amount: ActiveValue::Set(fields.amount),
            category: ActiveValue::Set(fields.category),
            payment_method: ActiveValue::Set(fields.payment_method),
            note: ActiveValue::Set(fields.note),
            date: ActiveValue::Set(fields.date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        expense.insert(self.db).await
    }

    /// Gets an entry owned by `user_id`
    ///
    /// Entries owned by someone else are reported as missing.
    pub async fn get(
        &self,
        user_id: i32,
        expense_id: i32,
    ) -> Result<Option<entity::luxe_expense::Model>, DbErr> {
        entity::prelude::LuxeExpense::find_by_id(expense_id)
            .filter(entity::luxe_expense::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a user's entries, newest first
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::luxe_expense::Model>, DbErr> {
        entity::prelude::LuxeExpense::find()
            .filter(entity::luxe_expense::Column::UserId.eq(user_id))
            .order_by_desc(entity::luxe_expense::Column::CreatedAt)
            .order_by_desc(entity::luxe_expense::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every field of an entry
    pub async fn update(
        &self,
        expense: entity::luxe_expense::Model,
        fields: ExpenseFields,
    ) -> Result<entity::luxe_expense::Model, DbErr> {
        let mut expense_am = expense.into_active_model();
        expense_am.title = ActiveValue::Set(fields.title);
        expense_am.kind = ActiveValue::Set(fields.kind);
        expense_am.amount = ActiveValue::Set(fields.amount);
        expense_am.category = ActiveValue::Set(fields.category);
        expense_am.payment_method = ActiveValue::Set(fields.payment_method);
        expense_am.note = ActiveValue::Set(fields.note);
        expense_am.date = ActiveValue::Set(fields.date);
        expense_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        expense_am.update(self.db).await
    }

    pub async fn delete(&self, expense_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeExpense::delete_by_id(expense_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LuxeExpense::delete_many()
            .filter(entity::luxe_expense::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get {
        use chrono::NaiveDate;
        use luxe_test_utils::prelude::*;

        use crate::server::data::expense::ExpenseRepository;

        /// Expect Some for the owner's entry
        #[tokio::test]
        async fn finds_owned_expense() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let user = test.user().insert_user("Ada", "ada@example.com").await?;
            let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
            let expense = test
                .expense()
                .insert_expense(user.id, "Rent", "Expense", 900.0, "Bills", date)
                .await?;

            let expense_repo = ExpenseRepository::new(&test.state.db);
            let result = expense_repo.get(user.id, expense.id).await?;

            assert_eq!(result.map(|e| e.title), Some("Rent".to_string()));

            Ok(())
        }

        /// Expect None when the entry belongs to another user
        #[tokio::test]
        async fn returns_none_for_other_users_expense() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let owner = test.user().insert_user("Ada", "ada@example.com").await?;
            let other = test.user().insert_user("Grace", "grace@example.com").await?;
            let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
            let expense = test
                .expense()
                .insert_expense(owner.id, "Rent", "Expense", 900.0, "Bills", date)
                .await?;

            let expense_repo = ExpenseRepository::new(&test.state.db);
            let result = expense_repo.get(other.id, expense.id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_by_user {
        use chrono::NaiveDate;
        use luxe_test_utils::prelude::*;

        use crate::server::data::expense::ExpenseRepository;

        /// Expect the most recently recorded entry first, regardless of its date
        #[tokio::test]
        async fn orders_newest_first() -> Result<(), TestError> {
            let mut test = test_setup_with_luxe_tables!()?;
            let user = test.user().insert_user("Ada", "ada@example.com").await?;
            let april = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
            let march = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
            test.expense()
                .insert_expense(user.id, "Rent", "Expense", 900.0, "Bills", april)
                .await?;
            test.expense()
                .insert_expense(user.id, "Salary", "Income", 3000.0, "Other", march)
                .await?;

            let expense_repo = ExpenseRepository::new(&test.state.db);
            let expenses = expense_repo.get_by_user(user.id).await?;

            let titles: Vec<_> = expenses.iter().map(|e| e.title.as_str()).collect();
            assert_eq!(titles, vec!["Salary", "Rent"]);

            Ok(())
        }
    }
}
