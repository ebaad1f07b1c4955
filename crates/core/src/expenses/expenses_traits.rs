//! Trait definitions for expense repository and service interfaces.
//!
//! The whole engine is synchronous: every operation runs to completion on
//! the caller's thread, so the seams are plain (non-async) traits.

use chrono::NaiveDateTime;

use super::expenses_model::{Expense, NewExpense};
use crate::errors::Result;

/// Storage interface for the expense collection.
///
/// Implementations own the append-only collection. Insertion prepends, so
/// `list()` comes back most-recent-first; callers must not rely on that
/// ordering for correctness.
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Appends a validated expense to the collection.
    fn insert(&self, expense: Expense) -> Result<Expense>;

    /// Returns a snapshot of every recorded expense.
    fn list(&self) -> Result<Vec<Expense>>;

    /// Looks up a single expense by id.
    fn get_by_id(&self, expense_id: &str) -> Result<Expense>;

    /// Number of recorded expenses.
    fn count(&self) -> Result<usize>;
}

/// Service interface for expense ingestion.
pub trait ExpenseServiceTrait: Send + Sync {
    /// Validates and records a new expense.
    ///
    /// Invalid input (unparseable or non-positive amount, malformed
    /// timestamp) is rejected with a validation error and never reaches
    /// the collection. `now` is used when the input carries no explicit
    /// timestamp.
    fn add_expense(&self, new_expense: NewExpense, now: NaiveDateTime) -> Result<Expense>;

    /// Returns a snapshot of every recorded expense, most recent first.
    fn get_expenses(&self) -> Result<Vec<Expense>>;
}
