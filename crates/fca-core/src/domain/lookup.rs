// ============================================================================
// FCA Core - Lookup Entity
// File: crates/fca-core/src/domain/lookup.rs
// Description: Per campaign/retailer/product commission rule
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::field::{ColumnSpec, FieldKind, FieldValue, NumericType};
use super::record::{RecordKind, Row};

pub const LOOKUP_COLUMNS: [ColumnSpec; 10] = [
    ColumnSpec::new("CAMPAIGNID", FieldKind::Numeric(NumericType::Integer)),
    ColumnSpec::new("RETAILERID", FieldKind::Text),
    ColumnSpec::new("PRODUCTID", FieldKind::Text),
    ColumnSpec::new("STARTDATE", FieldKind::Date),
    ColumnSpec::new("ENDDATE", FieldKind::Date),
    ColumnSpec::new("TARGET", FieldKind::Numeric(NumericType::Integer)),
    ColumnSpec::new("COMMISSION", FieldKind::Numeric(NumericType::Decimal)),
    ColumnSpec::new("MIN", FieldKind::Numeric(NumericType::Decimal)),
    ColumnSpec::new("MAX", FieldKind::Numeric(NumericType::Decimal)),
    ColumnSpec::new("CAP", FieldKind::Numeric(NumericType::Integer)),
];

/// The composite key; bulk import requires all three
pub const LOOKUP_REQUIRED: [&str; 3] = ["CAMPAIGNID", "RETAILERID", "PRODUCTID"];

/// Columns the edit form may change. `RETAILERID` and `PRODUCTID` are fixed.
pub const LOOKUP_EDITABLE: [&str; 8] = [
    "CAMPAIGNID",
    "STARTDATE",
    "ENDDATE",
    "TARGET",
    "COMMISSION",
    "MIN",
    "MAX",
    "CAP",
];

/// Identity of a lookup rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupKey {
    pub campaign_id: i64,
    pub retailer_id: String,
    pub product_id: String,
}

/// Lookup rule as stored in `ACH_FCA_LOOKUP`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lookup {
    pub campaign_id: i64,
    pub retailer_id: String,
    pub product_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub target: Option<i64>,
    pub commission: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub cap: Option<i64>,
    pub modification_date: Option<NaiveDateTime>,
}

impl Lookup {
    pub fn key(&self) -> LookupKey {
        LookupKey {
            campaign_id: self.campaign_id,
            retailer_id: self.retailer_id.clone(),
            product_id: self.product_id.clone(),
        }
    }

    pub fn to_row(&self) -> Row {
        let date = |v: Option<NaiveDate>| v.map(|d| FieldValue::Date(d.format("%Y-%m-%d").to_string()));

        let mut row = Row::empty(RecordKind::Lookup);
        row.set("CAMPAIGNID", Some(FieldValue::Integer(self.campaign_id)));
        row.set("RETAILERID", Some(FieldValue::Text(self.retailer_id.clone())));
        row.set("PRODUCTID", Some(FieldValue::Text(self.product_id.clone())));
        row.set("STARTDATE", date(self.start_date));
        row.set("ENDDATE", date(self.end_date));
        row.set("TARGET", self.target.map(FieldValue::Integer));
        row.set("COMMISSION", self.commission.map(FieldValue::Decimal));
        row.set("MIN", self.min.map(FieldValue::Decimal));
        row.set("MAX", self.max.map(FieldValue::Decimal));
        row.set("CAP", self.cap.map(FieldValue::Integer));
        row
    }
}
