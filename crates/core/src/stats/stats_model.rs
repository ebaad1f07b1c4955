//! Derived spending statistics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Monthly spending statistics for one reference month.
///
/// Derived data: recomputed from scratch from the expense snapshot on every
/// call, never updated incrementally, and carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// Calendar days in the reference month (leap-aware).
    pub days_in_month: u32,
    /// Days left in the month relative to `now`; zero unless the reference
    /// month is the current month.
    pub remaining_days: u32,
    /// Distinct calendar days in the reference month with at least one
    /// expense.
    pub days_with_expenses: u32,
    /// Total spent in month divided by `days_with_expenses`; zero when no
    /// day had an expense.
    pub real_daily_average: Decimal,
    /// Mean spend over the most recent (by day-of-month) active days, used
    /// to forecast remaining-month spend.
    pub projected_daily_average: Decimal,
    /// Sum of all expense amounts within the reference month.
    pub total_spent: Decimal,
    /// `total_spent + projected_daily_average * remaining_days` for the
    /// current month; exactly `total_spent` for any other month.
    pub projected_month_total: Decimal,
}

impl MonthlyStats {
    /// Zero-filled stats for a month with no expenses.
    pub fn empty(days_in_month: u32, remaining_days: u32) -> Self {
        MonthlyStats {
            days_in_month,
            remaining_days,
            days_with_expenses: 0,
            real_daily_average: Decimal::ZERO,
            projected_daily_average: Decimal::ZERO,
            total_spent: Decimal::ZERO,
            projected_month_total: Decimal::ZERO,
        }
    }

    /// Rounds every monetary field to display precision.
    pub fn rounded(mut self) -> Self {
        self.real_daily_average = self.real_daily_average.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.projected_daily_average = self
            .projected_daily_average
            .round_dp(DISPLAY_DECIMAL_PRECISION);
        self.total_spent = self.total_spent.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.projected_month_total = self
            .projected_month_total
            .round_dp(DISPLAY_DECIMAL_PRECISION);
        self
    }
}
