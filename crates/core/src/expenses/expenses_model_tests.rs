//! Tests for expense domain models and amount input normalization.

#[cfg(test)]
mod tests {
    use crate::errors::ValidationError;
    use crate::expenses::{parse_amount_input, Expense, NewExpense};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn ts(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    // ==================== parse_amount_input Tests ====================

    #[test]
    fn test_parse_amount_comma_separator() {
        assert_eq!(parse_amount_input("12,34").unwrap(), dec!(12.34));
        assert_eq!(parse_amount_input("0,01").unwrap(), dec!(0.01));
    }

    #[test]
    fn test_parse_amount_dot_separator() {
        assert_eq!(parse_amount_input("12.34").unwrap(), dec!(12.34));
    }

    #[test]
    fn test_parse_amount_integer() {
        assert_eq!(parse_amount_input("7").unwrap(), dec!(7));
    }

    #[test]
    fn test_parse_amount_strips_masked_symbols() {
        // The UI mask removes currency symbols and spaces before parsing
        assert_eq!(parse_amount_input("R$ 5,00").unwrap(), dec!(5.00));
        assert_eq!(parse_amount_input(" 42 ").unwrap(), dec!(42));
    }

    #[test]
    fn test_parse_amount_rejects_empty() {
        assert!(matches!(
            parse_amount_input(""),
            Err(ValidationError::MissingField(_))
        ));
        assert!(matches!(
            parse_amount_input("   "),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_zero() {
        assert!(matches!(
            parse_amount_input("0"),
            Err(ValidationError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            parse_amount_input("0,00"),
            Err(ValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_multiple_separators() {
        assert!(matches!(
            parse_amount_input("1,2,3"),
            Err(ValidationError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_amount_input("1.2,3"),
            Err(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_excess_decimals() {
        assert!(matches!(
            parse_amount_input("1,234"),
            Err(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_oversized_input() {
        assert!(matches!(
            parse_amount_input("12345678901"),
            Err(ValidationError::InvalidInput(_))
        ));
        // Exactly at the cap still parses
        assert_eq!(parse_amount_input("1234567,89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn test_parse_amount_rejects_no_digits() {
        assert!(matches!(
            parse_amount_input("abc"),
            Err(ValidationError::InvalidInput(_))
        ));
    }

    // ==================== NewExpense Tests ====================

    #[test]
    fn test_new_expense_validate_returns_normalized_amount() {
        let input = NewExpense {
            amount: "19,90".to_string(),
            timestamp: None,
            description: None,
        };
        assert_eq!(input.validate().unwrap(), dec!(19.90));
    }

    #[test]
    fn test_new_expense_validate_rejects_bad_timestamp() {
        let input = NewExpense {
            amount: "10".to_string(),
            timestamp: Some("not-a-date".to_string()),
            description: None,
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::DateTimeParse(_))
        ));
    }

    #[test]
    fn test_new_expense_parsed_timestamp_date_only() {
        let input = NewExpense {
            amount: "10".to_string(),
            timestamp: Some("2025-03-10".to_string()),
            description: None,
        };
        let parsed = input.parsed_timestamp().unwrap().unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_new_expense_parsed_timestamp_date_time() {
        let input = NewExpense {
            amount: "10".to_string(),
            timestamp: Some("2025-03-10T14:30:00".to_string()),
            description: None,
        };
        let parsed = input.parsed_timestamp().unwrap().unwrap();
        assert_eq!(parsed, ts(2025, 3, 10).date().and_hms_opt(14, 30, 0).unwrap());
    }

    // ==================== Expense Tests ====================

    #[test]
    fn test_description_or_default() {
        let with = Expense {
            id: "1".to_string(),
            amount: dec!(10),
            timestamp: ts(2025, 1, 1),
            description: Some("Groceries".to_string()),
        };
        let without = Expense {
            id: "2".to_string(),
            amount: dec!(10),
            timestamp: ts(2025, 1, 1),
            description: None,
        };
        assert_eq!(with.description_or_default(), "Groceries");
        assert_eq!(without.description_or_default(), "Expense");
    }

    #[test]
    fn test_expense_serializes_camel_case() {
        let expense = Expense {
            id: "abc".to_string(),
            amount: dec!(12.34),
            timestamp: ts(2025, 1, 1),
            description: None,
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert!(json.get("timestamp").is_some());
        assert!(json.get("description").is_none());
        assert_eq!(json.get("id").unwrap(), "abc");
    }
}
