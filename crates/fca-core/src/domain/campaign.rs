// ============================================================================
// FCA Core - Campaign Entity
// File: crates/fca-core/src/domain/campaign.rs
// Description: Promotional campaign record and its column list
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime};
use fca_shared::constants::RECHARGER_SENTINEL;
use serde::Serialize;

use super::field::{ColumnSpec, FieldKind, FieldValue, NumericType};
use super::record::{RecordKind, Row};

const INT: FieldKind = FieldKind::Numeric(NumericType::Integer);
const DEC: FieldKind = FieldKind::Numeric(NumericType::Decimal);

pub const CAMPAIGN_COLUMNS: [ColumnSpec; 19] = [
    ColumnSpec::new("TENANTID", INT),
    ColumnSpec::new("CAMPAIGNNAME", FieldKind::Text),
    ColumnSpec::new("STARTDATE", FieldKind::Date),
    ColumnSpec::new("ENDDATE", FieldKind::Date),
    ColumnSpec::new("STATUS", FieldKind::Status),
    ColumnSpec::new("FCA", FieldKind::Boolean),
    ColumnSpec::new("IFCA", FieldKind::Boolean),
    ColumnSpec::new("BVSHITS", FieldKind::Boolean),
    ColumnSpec::new("BUNDLE", FieldKind::Boolean),
    ColumnSpec::new("BUNDLETYPE", FieldKind::Text),
    ColumnSpec::new("FCABUNDLERANGE", INT),
    ColumnSpec::new("BVSHITS_TO_FCA_RANGE", INT),
    ColumnSpec::new("IFCADATERANGE", INT),
    ColumnSpec::new("RECHARGETYPE", FieldKind::Text),
    ColumnSpec::new("RECHARGERNR", DEC),
    ColumnSpec::new("RECHARGERBR", DEC),
    ColumnSpec::new("DESCRIPTION", FieldKind::Text),
    ColumnSpec::new("PRIORITY", INT),
    ColumnSpec::new("CREATEDBY", FieldKind::Text),
];

pub const CAMPAIGN_REQUIRED: [&str; 4] = ["CAMPAIGNNAME", "STARTDATE", "ENDDATE", "STATUS"];

/// Columns the edit form may change; everything else is fixed after creation
pub const CAMPAIGN_EDITABLE: [&str; 10] = [
    "CAMPAIGNNAME",
    "STARTDATE",
    "ENDDATE",
    "STATUS",
    "FCABUNDLERANGE",
    "BVSHITS_TO_FCA_RANGE",
    "IFCADATERANGE",
    "RECHARGETYPE",
    "RECHARGERNR",
    "RECHARGERBR",
];

/// Only meaningful while `RECHARGETYPE` is the recharger sentinel
pub const RECHARGE_DEPENDENT: [&str; 2] = ["RECHARGERNR", "RECHARGERBR"];

pub const RECHARGE_TYPES: [&str; 2] = [RECHARGER_SENTINEL, "STANDARD"];
pub const BUNDLE_TYPES: [&str; 3] = ["DATA", "VOICE", "COMBO"];

/// Campaign as stored in `ACH_FCA_CAMPAIGN`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub campaign_id: i64,
    pub tenant_id: Option<i64>,
    pub campaign_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<i64>,
    pub fca: Option<i64>,
    pub ifca: Option<i64>,
    pub bvshits: Option<i64>,
    pub bundle: Option<i64>,
    pub bundle_type: Option<String>,
    pub fca_bundle_range: Option<i64>,
    pub bvshits_to_fca_range: Option<i64>,
    pub ifca_date_range: Option<i64>,
    pub recharge_type: Option<String>,
    pub recharger_nr: Option<f64>,
    pub recharger_br: Option<f64>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub created_by: Option<String>,
    pub create_date: Option<NaiveDateTime>,
}

impl Campaign {
    pub fn is_recharger(&self) -> bool {
        self.recharge_type.as_deref() == Some(RECHARGER_SENTINEL)
    }

    /// Column-aligned view of the stored values
    pub fn to_row(&self) -> Row {
        let int = |v: Option<i64>| v.map(FieldValue::Integer);
        let dec = |v: Option<f64>| v.map(FieldValue::Decimal);
        let text = |v: &Option<String>| v.clone().map(FieldValue::Text);
        let date = |v: Option<NaiveDate>| v.map(|d| FieldValue::Date(d.format("%Y-%m-%d").to_string()));

        let mut row = Row::empty(RecordKind::Campaign);
        row.set("TENANTID", int(self.tenant_id));
        row.set("CAMPAIGNNAME", text(&self.campaign_name));
        row.set("STARTDATE", date(self.start_date));
        row.set("ENDDATE", date(self.end_date));
        row.set("STATUS", int(self.status));
        row.set("FCA", int(self.fca));
        row.set("IFCA", int(self.ifca));
        row.set("BVSHITS", int(self.bvshits));
        row.set("BUNDLE", int(self.bundle));
        row.set("BUNDLETYPE", text(&self.bundle_type));
        row.set("FCABUNDLERANGE", int(self.fca_bundle_range));
        row.set("BVSHITS_TO_FCA_RANGE", int(self.bvshits_to_fca_range));
        row.set("IFCADATERANGE", int(self.ifca_date_range));
        row.set("RECHARGETYPE", text(&self.recharge_type));
        row.set("RECHARGERNR", dec(self.recharger_nr));
        row.set("RECHARGERBR", dec(self.recharger_br));
        row.set("DESCRIPTION", text(&self.description));
        row.set("PRIORITY", int(self.priority));
        row.set("CREATEDBY", text(&self.created_by));
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> Campaign {
        Campaign {
            campaign_id: 7,
            tenant_id: Some(1),
            campaign_name: Some("Spring".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 31),
            status: Some(1),
            fca: Some(0),
            ifca: None,
            bvshits: None,
            bundle: None,
            bundle_type: None,
            fca_bundle_range: None,
            bvshits_to_fca_range: None,
            ifca_date_range: None,
            recharge_type: Some("RECHARGER".to_string()),
            recharger_nr: Some(10.0),
            recharger_br: Some(2.5),
            description: None,
            priority: None,
            created_by: None,
            create_date: None,
        }
    }

    #[test]
    fn test_to_row_keeps_stored_values() {
        let row = campaign().to_row();
        assert_eq!(row.text("STARTDATE"), Some("2025-03-01"));
        assert_eq!(row.get("STATUS"), Some(&FieldValue::Integer(1)));
        assert_eq!(row.get("RECHARGERBR"), Some(&FieldValue::Decimal(2.5)));
        assert!(row.is_null("IFCA"));
    }

    #[test]
    fn test_is_recharger() {
        let mut c = campaign();
        assert!(c.is_recharger());
        c.recharge_type = Some("STANDARD".to_string());
        assert!(!c.is_recharger());
    }

    #[test]
    fn test_editable_columns_are_campaign_columns() {
        for name in CAMPAIGN_EDITABLE {
            assert!(RecordKind::Campaign.column_index(name).is_some(), "{}", name);
        }
    }
}
