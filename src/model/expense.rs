use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::InvalidVariant;

string_enum! {
    pub enum ExpenseKind {
        Income => "Income",
        Expense => "Expense",
    }
}

string_enum! {
    pub enum ExpenseCategory {
        Food => "Food",
        Transport => "Transport",
        Shopping => "Shopping",
        Bills => "Bills",
        Entertainment => "Entertainment",
        Other => "Other",
    }
}

string_enum! {
    pub enum PaymentMethod {
        Cash => "Cash",
        Card => "Card",
        Upi => "UPI",
        BankTransfer => "Bank Transfer",
        Other => "Other",
    }
}

/// Body of `POST /expense/create-expense` and `PUT /expense/update-expense/{id}`
///
/// On update every absent field keeps its stored value.
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInputDto {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    #[serde(alias = "payment_method")]
    pub payment_method: Option<String>,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<entity::luxe_expense::Model> for ExpenseDto {
    type Error = InvalidVariant;

    fn try_from(expense: entity::luxe_expense::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: expense.id,
            user_id: expense.user_id,
            title: expense.title,
            kind: expense.kind.parse()?,
            amount: expense.amount,
            category: expense.category.parse()?,
            payment_method: expense.payment_method.parse()?,
            note: expense.note,
            date: expense.date,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotalDto {
    pub category: ExpenseCategory,
    pub total: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotalDto {
    /// Formatted as `YYYY-MM`
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// Aggregated figures backing the dashboard charts
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummaryDto {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    /// Spending per category, only categories with at least one expense
    pub by_category: Vec<CategoryTotalDto>,
    /// Oldest month first
    pub by_month: Vec<MonthTotalDto>,
}
