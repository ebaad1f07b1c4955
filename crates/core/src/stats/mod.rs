//! Stats module - derived spending statistics over the expense snapshot.

mod stats_model;
mod stats_service;
mod stats_traits;


// Re-export the public interface
pub use stats_model::MonthlyStats;
pub use stats_service::{monthly_stats, today_total, StatsService};
pub use stats_traits::StatsServiceTrait;
