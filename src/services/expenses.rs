//! Expense heads and the expense ledger

use super::{keyed_payload, to_payload};
use crate::api::endpoints::expenses;
use crate::api::{ApiClient, ApiResponse, Payload};
use crate::error::AppError;
use crate::models::{Expense, ExpenseFilter, ExpenseHead};

pub async fn get_expense_heads(client: &ApiClient) -> Result<ApiResponse, AppError> {
    client.get(expenses::GET_EXPENSE_HEADS, &Payload::new()).await
}

pub async fn add_expense_head(
    client: &ApiClient,
    head: &ExpenseHead,
) -> Result<ApiResponse, AppError> {
    client
        .post(expenses::ADD_EXPENSE_HEAD, &to_payload(head)?)
        .await
}

/// Ledger entries in a date range, optionally for one head.
pub async fn get_expenses(
    client: &ApiClient,
    filter: &ExpenseFilter,
) -> Result<ApiResponse, AppError> {
    client
        .post(expenses::GET_EXPENSES, &to_payload(filter)?)
        .await
}

pub async fn add_expense(client: &ApiClient, expense: &Expense) -> Result<ApiResponse, AppError> {
    client
        .post(expenses::ADD_EXPENSE, &to_payload(expense)?)
        .await
}

pub async fn delete_expense(client: &ApiClient, id: i64) -> Result<ApiResponse, AppError> {
    client
        .post(expenses::DELETE_EXPENSE, &keyed_payload("expenseId", id))
        .await
}
