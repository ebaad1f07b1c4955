use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};

/// Returns the number of calendar days in the given (year, month).
///
/// Computed from chrono's calendar arithmetic, so leap years are handled
/// without a lookup table. `month` outside 1..=12 yields 31 as a defensive
/// fallback; valid dates can never produce it.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(f), Some(n)) => n.signed_duration_since(f).num_days() as u32,
        _ => 31,
    }
}

/// True when `ts` falls on the same calendar day as `date`.
pub fn is_same_day(ts: NaiveDateTime, date: NaiveDate) -> bool {
    ts.date() == date
}

/// True when `ts` falls inside the (year, month) of `date`.
pub fn is_same_month(ts: NaiveDateTime, date: NaiveDate) -> bool {
    ts.year() == date.year() && ts.month() == date.month()
}

/// Today's date in UTC.
///
/// The engine does no time-zone normalization; callers that need a local
/// business date derive their own `now` and pass it in explicitly.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
