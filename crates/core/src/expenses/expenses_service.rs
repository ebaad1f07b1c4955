//! Expense ingestion service.

use std::sync::Arc;

use chrono::NaiveDateTime;
use log::debug;
use uuid::Uuid;

use super::expenses_model::{Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;

pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(expense_repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { expense_repository }
    }
}

impl ExpenseServiceTrait for ExpenseService {
    fn add_expense(&self, new_expense: NewExpense, now: NaiveDateTime) -> Result<Expense> {
        let amount = new_expense.validate()?;
        let timestamp = new_expense.parsed_timestamp()?.unwrap_or(now);

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            amount,
            timestamp,
            description: new_expense
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        };

        debug!(
            "Recording expense {} of {} at {}",
            expense.id, expense.amount, expense.timestamp
        );
        self.expense_repository.insert(expense)
    }

    fn get_expenses(&self) -> Result<Vec<Expense>> {
        self.expense_repository.list()
    }
}
