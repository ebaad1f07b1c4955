//! Spending statistics calculator.
//!
//! The calculators are pure functions over an immutable expense snapshot;
//! they have no failure path and no side effects. [`StatsService`] is the
//! thin seam that fetches the snapshot from the repository, delegates to
//! the pure functions, and rounds the results for display.
//!
//! Every call is O(n) over the full expense history. That is fine for the
//! bounded personal-finance workload this engine targets (a few thousand
//! records); revisit only if the collection stops being bounded.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::stats_model::MonthlyStats;
use super::stats_traits::StatsServiceTrait;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, PROJECTION_WINDOW_DAYS};
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::utils::time_utils::{days_in_month, is_same_day, is_same_month};

/// Sums the expenses attributed to the same calendar day as
/// `reference_date`.
///
/// An empty match set yields zero, not an error. Order of the input is
/// irrelevant. No time-zone normalization happens here; callers supply
/// timestamps and the reference date in one consistent zone.
pub fn today_total(expenses: &[Expense], reference_date: NaiveDate) -> Decimal {
    expenses
        .iter()
        .filter(|e| is_same_day(e.timestamp, reference_date))
        .map(|e| e.amount)
        .sum()
}

/// Computes the monthly statistics for the month containing
/// `reference_date`, with `now` deciding how much of that month is left.
///
/// The projected daily average is a recency proxy, not a trend model: the
/// mean over the most recent [`PROJECTION_WINDOW_DAYS`] active days picked
/// by descending day-of-month number. With sparse mid-month gaps that set
/// can differ from the last days in wall-clock time; that is the intended
/// behavior.
pub fn monthly_stats(
    expenses: &[Expense],
    reference_date: NaiveDate,
    now: NaiveDate,
) -> MonthlyStats {
    let days_in_ref_month = days_in_month(reference_date.year(), reference_date.month());
    let is_current_month =
        reference_date.year() == now.year() && reference_date.month() == now.month();
    let remaining_days = if is_current_month {
        days_in_ref_month.saturating_sub(now.day())
    } else {
        0
    };

    // Bucket the reference month's expenses by day-of-month
    let mut total_spent = Decimal::zero();
    let mut by_day: HashMap<u32, Decimal> = HashMap::new();
    for expense in expenses
        .iter()
        .filter(|e| is_same_month(e.timestamp, reference_date))
    {
        total_spent += expense.amount;
        *by_day
            .entry(expense.timestamp.day())
            .or_insert_with(Decimal::zero) += expense.amount;
    }

    if by_day.is_empty() {
        return MonthlyStats::empty(days_in_ref_month, remaining_days);
    }

    let days_with_expenses = by_day.len() as u32;
    let real_daily_average = total_spent / Decimal::from(days_with_expenses);

    let mut window_days: Vec<u32> = by_day.keys().copied().collect();
    window_days.sort_unstable_by(|a, b| b.cmp(a));
    window_days.truncate(PROJECTION_WINDOW_DAYS);
    let window_total: Decimal = window_days
        .iter()
        .filter_map(|day| by_day.get(day))
        .copied()
        .sum();
    let projected_daily_average = window_total / Decimal::from(window_days.len() as u32);

    // No projection for past or future months
    let projected_month_total = if is_current_month {
        total_spent + projected_daily_average * Decimal::from(remaining_days)
    } else {
        total_spent
    };

    MonthlyStats {
        days_in_month: days_in_ref_month,
        remaining_days,
        days_with_expenses,
        real_daily_average,
        projected_daily_average,
        total_spent,
        projected_month_total,
    }
}

pub struct StatsService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl StatsService {
    pub fn new(expense_repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        StatsService { expense_repository }
    }
}

impl StatsServiceTrait for StatsService {
    fn get_today_total(&self, reference_date: NaiveDate) -> Result<Decimal> {
        let expenses = self.expense_repository.list()?;
        let total = today_total(&expenses, reference_date);
        Ok(total.round_dp(DISPLAY_DECIMAL_PRECISION))
    }

    fn get_monthly_stats(&self, reference_date: NaiveDate, now: NaiveDate) -> Result<MonthlyStats> {
        debug!(
            "Computing monthly stats for {}-{:02} as of {}",
            reference_date.year(),
            reference_date.month(),
            now
        );
        let expenses = self.expense_repository.list()?;
        Ok(monthly_stats(&expenses, reference_date, now).rounded())
    }
}
