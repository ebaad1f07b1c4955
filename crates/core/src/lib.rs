//! Day2Day Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Day2Day, a
//! single-currency daily expense tracker. It is UI-agnostic: the
//! presentation layer owns rendering, input masking, and pickers,
//! and calls into the services defined here.

pub mod constants;
pub mod errors;
pub mod expenses;
pub mod stats;
pub mod utils;

// Re-export common types from the expenses and stats modules
pub use expenses::*;
pub use stats::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
