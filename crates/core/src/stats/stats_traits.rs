//! Trait definitions for the statistics service interface.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::stats_model::MonthlyStats;
use crate::errors::Result;

/// Service interface for derived spending statistics.
///
/// Both operations recompute from the full expense snapshot and round
/// monetary values to display precision. Repository access is the only
/// fallible step; the arithmetic itself never fails.
pub trait StatsServiceTrait: Send + Sync {
    /// Total spent on the calendar day of `reference_date`.
    fn get_today_total(&self, reference_date: NaiveDate) -> Result<Decimal>;

    /// Monthly statistics for the month of `reference_date`, projected
    /// against `now`.
    fn get_monthly_stats(&self, reference_date: NaiveDate, now: NaiveDate)
        -> Result<MonthlyStats>;
}
