//! Field normalization: raw form or spreadsheet text into storage-ready values,
//! and stored values back into display labels.
//!
//! Normalization never fails. Malformed input degrades to `None`, except for
//! dates, where unparsable text is passed through for the store to reject.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::field::{format_decimal, truncate_to_i64};
use crate::domain::{ColumnSpec, FieldKind, FieldValue, NumericType, RecordKind, Row};

const TRUE_TOKENS: [&str; 4] = ["1", "yes", "true", "y"];
const FALSE_TOKENS: [&str; 4] = ["0", "no", "false", "n"];
const NULL_TOKENS: [&str; 2] = ["nan", "None"];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Normalize one raw cell for the given kind
pub fn normalize(kind: FieldKind, raw: Option<&str>) -> Option<FieldValue> {
    let raw = raw?;
    match kind {
        FieldKind::Boolean | FieldKind::Status => normalize_flag(raw).map(FieldValue::Integer),
        FieldKind::Date => normalize_date(raw).map(FieldValue::Date),
        FieldKind::Numeric(numeric) => normalize_numeric(raw, numeric),
        FieldKind::Text => normalize_text(raw).map(FieldValue::Text),
    }
}

/// `1/yes/true/y` → 1, `0/no/false/n` → 0, case-insensitive; anything else is null
pub fn normalize_flag(raw: &str) -> Option<i64> {
    let token = raw.trim().to_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        Some(1)
    } else if FALSE_TOKENS.contains(&token.as_str()) {
        Some(0)
    } else {
        None
    }
}

/// Canonical `YYYY-MM-DD` when parsable, otherwise the trimmed raw text
pub fn normalize_date(raw: &str) -> Option<String> {
    let text = normalize_text(raw)?;
    Some(match parse_date(&text) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => text,
    })
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parsed through `f64`; integer columns truncate toward zero and go null
/// when the value does not fit
pub fn normalize_numeric(raw: &str, numeric: NumericType) -> Option<FieldValue> {
    let number: f64 = raw.trim().parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    match numeric {
        NumericType::Integer => truncate_to_i64(number).map(FieldValue::Integer),
        NumericType::Decimal => Some(FieldValue::Decimal(number)),
    }
}

/// Trimmed text; empty, `nan` and `None` are null
pub fn normalize_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() || NULL_TOKENS.contains(&text) {
        None
    } else {
        Some(text.to_string())
    }
}

/// Normalize every column of `kind`, pulling raw text from `cell`
pub fn normalize_row<'a, F>(kind: RecordKind, mut cell: F) -> Row
where
    F: FnMut(&'static ColumnSpec) -> Option<&'a str>,
{
    let mut row = Row::empty(kind);
    for column in kind.columns() {
        row.set(column.name, normalize(column.kind, cell(column)));
    }
    row
}

/// Label shown in list views and pre-filled into edit forms
pub fn display(kind: FieldKind, value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if kind.is_flag() {
        match value.as_i64() {
            Some(1) => return "Yes".to_string(),
            Some(0) => return "No".to_string(),
            _ => {}
        }
    }
    match value {
        FieldValue::Decimal(f) => format_decimal(*f),
        other => other.to_text(),
    }
}

/// Display labels for a whole row, in column order
pub fn display_row(row: &Row) -> Vec<String> {
    row.iter()
        .map(|(column, value)| display(column.kind, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_flag_true_tokens_any_case() {
        for raw in ["1", "yes", "YES", "True", "y", "Y", " yes "] {
            assert_eq!(normalize_flag(raw), Some(1), "{:?}", raw);
        }
    }

    #[test]
    fn test_flag_false_tokens_any_case() {
        for raw in ["0", "no", "No", "FALSE", "n", "N"] {
            assert_eq!(normalize_flag(raw), Some(0), "{:?}", raw);
        }
    }

    #[test]
    fn test_flag_other_tokens_are_null() {
        for raw in ["", "2", "maybe", "1.0", "nan", "on"] {
            assert_eq!(normalize_flag(raw), None, "{:?}", raw);
        }
        assert_eq!(normalize(FieldKind::Status, None), None);
    }

    #[test]
    fn test_canonical_date_is_idempotent() {
        assert_eq!(normalize_date("2025-01-01").as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn test_date_formats_are_canonicalized() {
        assert_eq!(normalize_date("2025-01-31 00:00:00").as_deref(), Some("2025-01-31"));
        assert_eq!(normalize_date("2025-01-31T08:30:00").as_deref(), Some("2025-01-31"));
        assert_eq!(normalize_date("2025/01/31").as_deref(), Some("2025-01-31"));
        assert_eq!(normalize_date("01/31/2025").as_deref(), Some("2025-01-31"));
        assert_eq!(normalize_date("31.01.2025").as_deref(), Some("2025-01-31"));
    }

    #[test]
    fn test_unparsable_date_passes_through() {
        assert_eq!(normalize_date(" next week ").as_deref(), Some("next week"));
        assert_eq!(normalize_date("2025-02-30").as_deref(), Some("2025-02-30"));
    }

    #[test]
    fn test_empty_date_is_null() {
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("nan"), None);
    }

    #[test]
    fn test_numeric_goes_through_float() {
        assert_eq!(
            normalize_numeric("12.0", NumericType::Integer),
            Some(FieldValue::Integer(12))
        );
        assert_eq!(
            normalize_numeric("7.9", NumericType::Integer),
            Some(FieldValue::Integer(7))
        );
        assert_eq!(
            normalize_numeric(" 2.5 ", NumericType::Decimal),
            Some(FieldValue::Decimal(2.5))
        );
    }

    #[test]
    fn test_bad_numeric_is_null() {
        assert_eq!(normalize_numeric("abc", NumericType::Integer), None);
        assert_eq!(normalize_numeric("", NumericType::Decimal), None);
        assert_eq!(normalize_numeric("nan", NumericType::Decimal), None);
        assert_eq!(normalize_numeric("inf", NumericType::Integer), None);
    }

    #[test]
    fn test_integer_out_of_range_is_null() {
        assert_eq!(normalize_numeric("1e30", NumericType::Integer), None);
        assert_eq!(normalize_numeric("-1e30", NumericType::Integer), None);
        assert_eq!(normalize_numeric("9223372036854775808", NumericType::Integer), None);
        assert_eq!(
            normalize_numeric("-9223372036854775808", NumericType::Integer),
            Some(FieldValue::Integer(i64::MIN))
        );
        assert_eq!(
            normalize_numeric("1e30", NumericType::Decimal),
            Some(FieldValue::Decimal(1e30))
        );
        assert_eq!(FieldValue::Decimal(1e30).as_i64(), None);
        assert_eq!(FieldValue::Decimal(-7.9).as_i64(), Some(-7));
    }

    #[test]
    fn test_text_null_tokens() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text("nan"), None);
        assert_eq!(normalize_text("None"), None);
        assert_eq!(normalize_text("  Spring Promo "), Some("Spring Promo".to_string()));
    }

    #[test]
    fn test_display_direction() {
        assert_eq!(display(FieldKind::Boolean, Some(&FieldValue::Integer(1))), "Yes");
        assert_eq!(display(FieldKind::Status, Some(&FieldValue::Integer(0))), "No");
        assert_eq!(display(FieldKind::Boolean, None), "");
        assert_eq!(
            display(FieldKind::Numeric(NumericType::Decimal), Some(&FieldValue::Decimal(3.0))),
            "3"
        );
        assert_eq!(
            display(FieldKind::Text, Some(&FieldValue::Text("RECHARGER".into()))),
            "RECHARGER"
        );
    }

    #[test]
    fn test_display_round_trips_through_normalize() {
        let shown = display(FieldKind::Boolean, Some(&FieldValue::Integer(1)));
        assert_eq!(normalize(FieldKind::Boolean, Some(&shown)), Some(FieldValue::Integer(1)));
    }

    #[test]
    fn test_normalize_row_from_form() {
        let form: HashMap<&str, &str> = [
            ("CAMPAIGNID", "5"),
            ("RETAILERID", " RET1 "),
            ("PRODUCTID", "P1"),
            ("TARGET", "abc"),
            ("COMMISSION", "1.25"),
        ]
        .into_iter()
        .collect();

        let row = normalize_row(RecordKind::Lookup, |c| form.get(c.name).copied());

        assert_eq!(row.get("CAMPAIGNID"), Some(&FieldValue::Integer(5)));
        assert_eq!(row.text("RETAILERID"), Some("RET1"));
        assert!(row.is_null("TARGET"));
        assert_eq!(row.get("COMMISSION"), Some(&FieldValue::Decimal(1.25)));
        assert!(row.is_null("STARTDATE"));
    }
}
