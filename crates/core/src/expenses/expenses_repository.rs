//! In-memory expense repository.
//!
//! Persistence is out of scope for the engine, so the only repository is a
//! process-local one: a `RwLock`-guarded vector that new expenses are
//! prepended to.

use std::sync::RwLock;

use super::expenses_model::{Expense, ExpenseError};
use super::expenses_traits::ExpenseRepositoryTrait;
use crate::errors::{Error, Result};

#[derive(Default)]
pub struct InMemoryExpenseRepository {
    expenses: RwLock<Vec<Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-seeded with expenses, newest first.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RwLock::new(expenses),
        }
    }
}

impl ExpenseRepositoryTrait for InMemoryExpenseRepository {
    fn insert(&self, expense: Expense) -> Result<Expense> {
        let mut guard = self
            .expenses
            .write()
            .map_err(|e| Error::Repository(format!("expense store lock poisoned: {}", e)))?;
        guard.insert(0, expense.clone());
        Ok(expense)
    }

    fn list(&self) -> Result<Vec<Expense>> {
        let guard = self
            .expenses
            .read()
            .map_err(|e| Error::Repository(format!("expense store lock poisoned: {}", e)))?;
        Ok(guard.clone())
    }

    fn get_by_id(&self, expense_id: &str) -> Result<Expense> {
        let guard = self
            .expenses
            .read()
            .map_err(|e| Error::Repository(format!("expense store lock poisoned: {}", e)))?;
        guard
            .iter()
            .find(|e| e.id == expense_id)
            .cloned()
            .ok_or_else(|| Error::Expense(ExpenseError::NotFound(expense_id.to_string())))
    }

    fn count(&self) -> Result<usize> {
        let guard = self
            .expenses
            .read()
            .map_err(|e| Error::Repository(format!("expense store lock poisoned: {}", e)))?;
        Ok(guard.len())
    }
}
