//! Expenses module - domain models, services, and traits.

mod expenses_model;
mod expenses_repository;
mod expenses_service;
mod expenses_traits;

#[cfg(test)]
mod expenses_model_tests;


// Re-export the public interface
pub use expenses_model::{parse_amount_input, Expense, ExpenseError, NewExpense};
pub use expenses_repository::InMemoryExpenseRepository;
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
