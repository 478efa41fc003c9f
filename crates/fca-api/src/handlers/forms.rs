//! Shared form plumbing for the add/edit pages

use std::collections::HashMap;

use serde::Serialize;

use fca_core::domain::campaign::{BUNDLE_TYPES, RECHARGE_TYPES};
use fca_core::domain::{ColumnSpec, FieldKind, RecordKind, Row};
use fca_core::normalizer::{display, normalize_row};
use fca_core::validator::RowValidator;

use crate::error::ApiError;

const FLAG_OPTIONS: [&str; 2] = ["Yes", "No"];

#[derive(Debug, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
    pub input: &'static str,
    pub options: Vec<FormOption>,
    pub readonly: bool,
}

#[derive(Debug, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Build the inputs for `columns`, pre-filled from `row`.
/// Columns outside `editable` are rendered read-only.
pub fn form_fields(row: &Row, columns: &[&str], editable: &[&str]) -> Vec<FormField> {
    row.iter()
        .filter(|(column, _)| columns.contains(&column.name))
        .map(|(column, value)| {
            let value = display(column.kind, value);
            let options = choices(column)
                .iter()
                .map(|choice| FormOption {
                    value: *choice,
                    selected: *choice == value,
                })
                .collect();
            FormField {
                name: column.name,
                input: if column.kind == FieldKind::Date { "date" } else { "text" },
                options,
                readonly: !editable.contains(&column.name),
                value,
            }
        })
        .collect()
}

fn choices(column: &ColumnSpec) -> &'static [&'static str] {
    match column.name {
        "RECHARGETYPE" => &RECHARGE_TYPES,
        "BUNDLETYPE" => &BUNDLE_TYPES,
        _ if column.kind.is_flag() => &FLAG_OPTIONS,
        _ => &[],
    }
}

/// Normalize a submitted form the same way spreadsheet cells are
pub fn parse_form(kind: RecordKind, form: &HashMap<String, String>) -> Result<Row, ApiError> {
    let row = normalize_row(kind, |column| form.get(column.name).map(String::as_str));
    RowValidator::interactive()
        .validate(row)
        .map_err(|reasons| ApiError::BadRequest(reasons.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fca_core::domain::FieldValue;

    #[test]
    fn test_flags_render_as_selects() {
        let mut row = Row::empty(RecordKind::Campaign);
        row.set("STATUS", Some(FieldValue::Integer(1)));

        let fields = form_fields(&row, &["CAMPAIGNNAME", "STATUS"], &["STATUS"]);

        assert_eq!(fields.len(), 2);
        assert!(fields[0].readonly);
        let status = &fields[1];
        assert_eq!(status.value, "Yes");
        assert!(status.options.iter().any(|o| o.value == "Yes" && o.selected));
    }

    #[test]
    fn test_parse_form_clears_recharge_fields() {
        let form: HashMap<String, String> = [
            ("CAMPAIGNNAME", "Spring"),
            ("STATUS", "Yes"),
            ("RECHARGETYPE", "STANDARD"),
            ("RECHARGERNR", "5"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let row = parse_form(RecordKind::Campaign, &form).unwrap();

        assert_eq!(row.get("STATUS"), Some(&FieldValue::Integer(1)));
        assert!(row.is_null("RECHARGERNR"));
        assert!(row.is_null("STARTDATE"));
    }
}
