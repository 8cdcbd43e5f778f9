//! Personal income and expense tracking.
//!
//! Entries are private to the user who recorded them, lookups by ID for another user's entry
//! behave as if the entry did not exist. Every change is echoed as an expense notification.

use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        expense::{
            CategoryTotalDto, ExpenseCategory, ExpenseDto, ExpenseInputDto, ExpenseKind,
            ExpenseSummaryDto, MonthTotalDto, PaymentMethod,
        },
        notification::NotificationKind,
    },
    server::{
        data::{
            expense::{ExpenseFields, ExpenseRepository},
            notification::{NewNotification, NotificationRepository},
        },
        error::Error,
    },
};

pub struct ExpenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseService<'a> {
    /// Creates a new instance of [`ExpenseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an entry for `user_id`
    ///
    /// Payment method defaults to `Other` when not provided.
    ///
    /// # Returns
    /// - `Ok(ExpenseDto)` - The recorded entry
    /// - `Err(Error::BadRequest)` - A required field is missing, an enumerated field holds an
    ///   unknown value or the amount is not positive
    pub async fn create(&self, user_id: i32, dto: ExpenseInputDto) -> Result<ExpenseDto, Error> {
        let (Some(title), Some(amount), Some(category), Some(date), Some(kind)) = (
            non_empty(dto.title),
            dto.amount,
            dto.category,
            dto.date,
            dto.kind,
        ) else {
            return Err(Error::BadRequest(
                "Please provide all required fields including type".to_string(),
            ));
        };

        let fields = ExpenseFields {
            title,
            kind: parse_kind(&kind)?.as_str().to_string(),
            amount: validate_amount(amount)?,
            category: parse_category(&category)?.as_str().to_string(),
            payment_method: match dto.payment_method.as_deref() {
                Some(method) => parse_payment_method(method)?,
                None => PaymentMethod::Other,
            }
            .as_str()
            .to_string(),
            note: non_empty(dto.note),
            date,
        };

        let txn = self.db.begin().await?;

        let expense = ExpenseRepository::new(&txn).create(user_id, fields).await?;

        NotificationRepository::new(&txn)
            .create(
                NewNotification::new(
                    user_id,
                    NotificationKind::Expense,
                    format!("You created a new expense: {}", expense.title),
                )
                .expense(expense.id),
            )
            .await?;

        txn.commit().await?;

        Ok(ExpenseDto::try_from(expense)?)
    }

    /// Gets the user's entries, most recently recorded first
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<ExpenseDto>, Error> {
        let expenses = ExpenseRepository::new(self.db).get_by_user(user_id).await?;

        Ok(expenses
            .into_iter()
            .map(ExpenseDto::try_from)
            .collect::<Result<_, _>>()?)
    }

    pub async fn get(&self, user_id: i32, expense_id: i32) -> Result<ExpenseDto, Error> {
        let expense = ExpenseRepository::new(self.db)
            .get(user_id, expense_id)
            .await?
            .ok_or_else(not_found)?;

        Ok(ExpenseDto::try_from(expense)?)
    }

    /// Updates the provided fields of an entry, validated as on creation
    ///
    /// The notification names the entry by its title before the update.
    pub async fn update(
        &self,
        user_id: i32,
        expense_id: i32,
        dto: ExpenseInputDto,
    ) -> Result<ExpenseDto, Error> {
        let txn = self.db.begin().await?;
        let expense_repo = ExpenseRepository::new(&txn);

        let expense = expense_repo
            .get(user_id, expense_id)
            .await?
            .ok_or_else(not_found)?;

        let title = match dto.title {
            Some(title) => non_empty(Some(title)).ok_or_else(|| {
                Error::BadRequest("Title cannot be empty".to_string())
            })?,
            None => expense.title.clone(),
        };
        let fields = ExpenseFields {
            title,
            kind: match dto.kind.as_deref() {
                Some(kind) => parse_kind(kind)?.as_str().to_string(),
                None => expense.kind.clone(),
            },
            amount: match dto.amount {
                Some(amount) => validate_amount(amount)?,
                None => expense.amount,
            },
            category: match dto.category.as_deref() {
                Some(category) => parse_category(category)?.as_str().to_string(),
                None => expense.category.clone(),
            },
            payment_method: match dto.payment_method.as_deref() {
                Some(method) => parse_payment_method(method)?.as_str().to_string(),
                None => expense.payment_method.clone(),
            },
            note: match dto.note {
                Some(note) => non_empty(Some(note)),
                None => expense.note.clone(),
            },
            date: dto.date.unwrap_or(expense.date),
        };

        let old_title = expense.title.clone();
        let updated = expense_repo.update(expense, fields).await?;

        NotificationRepository::new(&txn)
            .create(
                NewNotification::new(
                    user_id,
                    NotificationKind::Expense,
                    format!("You updated an expense: {}", old_title),
                )
                .expense(updated.id),
            )
            .await?;

        txn.commit().await?;

        Ok(ExpenseDto::try_from(updated)?)
    }

    /// Deletes an entry owned by `user_id` and notifies them
    pub async fn delete(&self, user_id: i32, expense_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let expense_repo = ExpenseRepository::new(&txn);

        let expense = expense_repo
            .get(user_id, expense_id)
            .await?
            .ok_or_else(not_found)?;

        NotificationRepository::new(&txn)
            .create(
                NewNotification::new(
                    user_id,
                    NotificationKind::Expense,
                    format!("You deleted an expense: {}", expense.title),
                )
                .expense(expense.id),
            )
            .await?;

        expense_repo.delete(expense.id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Totals across all of the user's entries
    ///
    /// Category totals only count expenses, months are keyed by the entry date.
    pub async fn summary(&self, user_id: i32) -> Result<ExpenseSummaryDto, Error> {
        let expenses = self.get_all(user_id).await?;

        Ok(summarize(&expenses))
    }
}

fn summarize(expenses: &[ExpenseDto]) -> ExpenseSummaryDto {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    let mut by_category: Vec<CategoryTotalDto> = Vec::new();
    let mut by_month: BTreeMap<String, MonthTotalDto> = BTreeMap::new();

    for expense in expenses {
        let month_key = expense.date.format("%Y-%m").to_string();
        let month = by_month
            .entry(month_key.clone())
            .or_insert_with(|| MonthTotalDto {
                month: month_key,
                income: 0.0,
                expense: 0.0,
            });

        match expense.kind {
            ExpenseKind::Income => {
                total_income += expense.amount;
                month.income += expense.amount;
            }
            ExpenseKind::Expense => {
                total_expense += expense.amount;
                month.expense += expense.amount;

                match by_category
                    .iter_mut()
                    .find(|total| total.category == expense.category)
                {
                    Some(total) => total.total += expense.amount,
                    None => by_category.push(CategoryTotalDto {
                        category: expense.category,
                        total: expense.amount,
                    }),
                }
            }
        }
    }

    // Category order follows declaration order rather than first appearance
    by_category.sort_by_key(|total| {
        ExpenseCategory::ALL
            .iter()
            .position(|category| *category == total.category)
    });

    ExpenseSummaryDto {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        by_category,
        by_month: by_month.into_values().collect(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn not_found() -> Error {
    Error::NotFound("Expense not found".to_string())
}

fn parse_kind(kind: &str) -> Result<ExpenseKind, Error> {
    kind.parse().map_err(|_| {
        Error::BadRequest(format!(
            "Invalid type. Choose from: {}",
            ExpenseKind::choices()
        ))
    })
}

fn parse_category(category: &str) -> Result<ExpenseCategory, Error> {
    category.parse().map_err(|_| {
        Error::BadRequest(format!(
            "Invalid category. Choose from: {}",
            ExpenseCategory::choices()
        ))
    })
}

fn parse_payment_method(method: &str) -> Result<PaymentMethod, Error> {
    method.parse().map_err(|_| {
        Error::BadRequest(format!(
            "Invalid payment method. Choose from: {}",
            PaymentMethod::choices()
        ))
    })
}

fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(Error::BadRequest(
            "Amount must be greater than 0".to_string(),
        ))
    }
}
