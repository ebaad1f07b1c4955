/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of most recent expense days (by day-of-month) used for the
/// month-end spending projection
pub const PROJECTION_WINDOW_DAYS: usize = 5;

/// Maximum accepted length for raw amount input
pub const MAX_AMOUNT_INPUT_LEN: usize = 10;

/// Placeholder shown for expenses recorded without a description
pub const DEFAULT_DESCRIPTION: &str = "Expense";
