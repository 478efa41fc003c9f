// ============================================================================
// FCA Core - Field Types
// File: crates/fca-core/src/domain/field.rs
// Description: Column kinds, typed cell values and column specs
// ============================================================================

use serde::Serialize;

/// Storage type of a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    Integer,
    Decimal,
}

/// Semantic kind of a column, drives normalization and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 1/0 feature flag
    Boolean,
    /// 1/0 flag that bulk import requires
    Status,
    /// Calendar date, canonical `YYYY-MM-DD`
    Date,
    Numeric(NumericType),
    Text,
}

impl FieldKind {
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldKind::Boolean | FieldKind::Status)
    }
}

/// A normalized, storage-ready cell value. Absent values are `None` at the call site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
    /// Canonical date text, or the raw text when it could not be parsed
    Date(String),
    Text(String),
}

impl FieldValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Decimal(f) => truncate_to_i64(*f),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Decimal(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Date(s) | FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text form used when binding to text and date columns
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Decimal(f) => format_decimal(*f),
            FieldValue::Date(s) | FieldValue::Text(s) => s.clone(),
        }
    }
}

/// Truncate toward zero; `None` for NaN, infinities and values outside `i64`
pub(crate) fn truncate_to_i64(value: f64) -> Option<i64> {
    // 2^63 is exact in f64, i64::MAX is not
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    let truncated = value.trunc();
    if truncated.is_finite() && (-BOUND..BOUND).contains(&truncated) {
        Some(truncated as i64)
    } else {
        None
    }
}

pub(crate) fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// One column of a record kind's fixed column list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}
