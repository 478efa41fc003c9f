//! Row policies applied after normalization.
//!
//! Both paths clear the recharge-dependent campaign fields, and both reject a
//! recharger campaign without its recharge values. Only bulk import enforces
//! the required columns; interactive forms leave that to the store.

use fca_shared::constants::RECHARGER_SENTINEL;
use tracing::debug;

use crate::domain::campaign::RECHARGE_DEPENDENT;
use crate::domain::{RecordKind, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Spreadsheet import: dependent-field rule plus required columns
    Bulk,
    /// Single-row add/edit forms: dependent-field rule only
    Interactive,
}

#[derive(Debug, Clone, Copy)]
pub struct RowValidator {
    mode: ValidationMode,
}

impl RowValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn bulk() -> Self {
        Self::new(ValidationMode::Bulk)
    }

    pub fn interactive() -> Self {
        Self::new(ValidationMode::Interactive)
    }

    /// Accept the (possibly corrected) row, or return the reasons it was rejected
    pub fn validate(&self, mut row: Row) -> Result<Row, Vec<String>> {
        apply_dependent_fields(&mut row);

        let bulk = self.mode == ValidationMode::Bulk;
        let recharger = is_recharger(&row);
        let required = row.kind().required_columns();
        let reasons: Vec<String> = row
            .iter()
            .filter(|(column, value)| {
                value.is_none()
                    && ((bulk && required.contains(&column.name))
                        || (recharger && RECHARGE_DEPENDENT.contains(&column.name)))
            })
            .map(|(column, _)| format!("{} is required", column.name))
            .collect();

        if reasons.is_empty() {
            Ok(row)
        } else {
            Err(reasons)
        }
    }
}

fn is_recharger(row: &Row) -> bool {
    row.kind() == RecordKind::Campaign && row.text("RECHARGETYPE") == Some(RECHARGER_SENTINEL)
}

/// Recharge fields only survive when `RECHARGETYPE` is the sentinel
pub fn apply_dependent_fields(row: &mut Row) {
    if row.kind() != RecordKind::Campaign || is_recharger(row) {
        return;
    }
    for column in RECHARGE_DEPENDENT {
        if !row.is_null(column) {
            debug!("Clearing {} because RECHARGETYPE is not {}", column, RECHARGER_SENTINEL);
            row.set(column, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    fn text(s: &str) -> Option<FieldValue> {
        Some(FieldValue::Text(s.to_string()))
    }

    fn valid_campaign() -> Row {
        let mut row = Row::empty(RecordKind::Campaign);
        row.set("CAMPAIGNNAME", text("Spring"));
        row.set("STARTDATE", Some(FieldValue::Date("2025-03-01".into())));
        row.set("ENDDATE", Some(FieldValue::Date("2025-05-31".into())));
        row.set("STATUS", Some(FieldValue::Integer(1)));
        row
    }

    #[test]
    fn test_recharge_fields_cleared_for_other_types() {
        let mut row = valid_campaign();
        row.set("RECHARGETYPE", text("STANDARD"));
        row.set("RECHARGERNR", Some(FieldValue::Decimal(10.0)));
        row.set("RECHARGERBR", Some(FieldValue::Decimal(2.0)));

        let row = RowValidator::bulk().validate(row).unwrap();
        assert!(row.is_null("RECHARGERNR"));
        assert!(row.is_null("RECHARGERBR"));
    }

    #[test]
    fn test_recharge_fields_cleared_when_type_missing() {
        let mut row = valid_campaign();
        row.set("RECHARGERNR", Some(FieldValue::Decimal(10.0)));

        let row = RowValidator::interactive().validate(row).unwrap();
        assert!(row.is_null("RECHARGERNR"));
    }

    #[test]
    fn test_recharge_fields_kept_for_recharger() {
        let mut row = valid_campaign();
        row.set("RECHARGETYPE", text("RECHARGER"));
        row.set("RECHARGERNR", Some(FieldValue::Decimal(10.0)));
        row.set("RECHARGERBR", Some(FieldValue::Decimal(2.0)));

        let row = RowValidator::bulk().validate(row).unwrap();
        assert_eq!(row.get("RECHARGERNR"), Some(&FieldValue::Decimal(10.0)));
        assert_eq!(row.get("RECHARGERBR"), Some(&FieldValue::Decimal(2.0)));
    }

    #[test]
    fn test_recharger_without_values_rejected_in_both_modes() {
        let mut row = valid_campaign();
        row.set("RECHARGETYPE", text("RECHARGER"));
        row.set("RECHARGERBR", Some(FieldValue::Decimal(2.0)));

        let reasons = RowValidator::bulk().validate(row.clone()).unwrap_err();
        assert_eq!(reasons, vec!["RECHARGERNR is required".to_string()]);

        let reasons = RowValidator::interactive().validate(row).unwrap_err();
        assert_eq!(reasons, vec!["RECHARGERNR is required".to_string()]);
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        let mut row = valid_campaign();
        row.set("RECHARGETYPE", text("recharger"));
        row.set("RECHARGERNR", Some(FieldValue::Decimal(10.0)));

        let row = RowValidator::bulk().validate(row).unwrap();
        assert!(row.is_null("RECHARGERNR"));
    }

    #[test]
    fn test_bulk_rejects_null_status() {
        let mut row = valid_campaign();
        row.set("STATUS", None);

        let reasons = RowValidator::bulk().validate(row).unwrap_err();
        assert_eq!(reasons, vec!["STATUS is required".to_string()]);
    }

    #[test]
    fn test_bulk_reports_all_missing_in_column_order() {
        let row = Row::empty(RecordKind::Campaign);
        let reasons = RowValidator::bulk().validate(row).unwrap_err();
        assert_eq!(
            reasons,
            vec![
                "CAMPAIGNNAME is required",
                "STARTDATE is required",
                "ENDDATE is required",
                "STATUS is required",
            ]
        );
    }

    #[test]
    fn test_interactive_skips_required_checks() {
        let row = Row::empty(RecordKind::Campaign);
        assert!(RowValidator::interactive().validate(row).is_ok());
    }

    #[test]
    fn test_lookup_requires_composite_key_only() {
        let mut row = Row::empty(RecordKind::Lookup);
        row.set("CAMPAIGNID", Some(FieldValue::Integer(1)));
        row.set("RETAILERID", text("RET1"));

        let reasons = RowValidator::bulk().validate(row.clone()).unwrap_err();
        assert_eq!(reasons, vec!["PRODUCTID is required".to_string()]);

        row.set("PRODUCTID", text("P1"));
        assert!(RowValidator::bulk().validate(row).is_ok());
    }
}
