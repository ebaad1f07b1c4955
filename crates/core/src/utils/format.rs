//! Currency display formatting.
//!
//! The engine exchanges plain decimals; this helper renders them in the
//! pt-BR style used by the app (`R$ 1.234,56`). Locale support beyond this
//! single format is out of scope.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats a monetary amount as `R$ 1.234,56`.
///
/// The value is rounded to [`DISPLAY_DECIMAL_PRECISION`] first, the integer
/// part is grouped with `.` every three digits, and the decimal separator
/// is `,`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!("{}R$ {},{}", sign, int_grouped, frac_part)
}
