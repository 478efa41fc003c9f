// ============================================================================
// FCA Core - Record Kinds and Rows
// File: crates/fca-core/src/domain/record.rs
// Description: Record kind dispatch and the column-aligned row representation
// ============================================================================

use fca_shared::constants::{
    CAMPAIGN_TABLE, CAMPAIGN_TEMPLATE_FILENAME, LOOKUP_TABLE, LOOKUP_TEMPLATE_FILENAME,
};
use tracing::warn;

use super::campaign::{CAMPAIGN_COLUMNS, CAMPAIGN_REQUIRED};
use super::field::{ColumnSpec, FieldValue};
use super::lookup::{LOOKUP_COLUMNS, LOOKUP_REQUIRED};

/// Which table a row belongs to; selects the column list and validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Campaign,
    Lookup,
}

impl RecordKind {
    /// Fixed, ordered column list used by forms, templates and import
    pub fn columns(&self) -> &'static [ColumnSpec] {
        match self {
            RecordKind::Campaign => &CAMPAIGN_COLUMNS,
            RecordKind::Lookup => &LOOKUP_COLUMNS,
        }
    }

    /// Columns bulk import refuses to leave empty
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Campaign => &CAMPAIGN_REQUIRED,
            RecordKind::Lookup => &LOOKUP_REQUIRED,
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::Campaign => CAMPAIGN_TABLE,
            RecordKind::Lookup => LOOKUP_TABLE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Campaign => "campaign",
            RecordKind::Lookup => "lookup",
        }
    }

    pub fn template_filename(&self) -> &'static str {
        match self {
            RecordKind::Campaign => CAMPAIGN_TEMPLATE_FILENAME,
            RecordKind::Lookup => LOOKUP_TEMPLATE_FILENAME,
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns().iter().position(|c| c.name == name)
    }
}

/// A normalized row: one optional value per column of its kind, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    kind: RecordKind,
    values: Vec<Option<FieldValue>>,
}

impl Row {
    pub fn empty(kind: RecordKind) -> Self {
        Self {
            kind,
            values: vec![None; kind.columns().len()],
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.kind
            .column_index(column)
            .and_then(|idx| self.values.get(idx))
            .and_then(Option::as_ref)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FieldValue::as_str)
    }

    pub fn is_null(&self, column: &str) -> bool {
        self.get(column).is_none()
    }

    pub fn set(&mut self, column: &str, value: Option<FieldValue>) {
        match self.kind.column_index(column) {
            Some(idx) => {
                if let Some(slot) = self.values.get_mut(idx) {
                    *slot = value;
                }
            }
            None => warn!("Ignoring unknown {} column: {}", self.kind.label(), column),
        }
    }

    /// Columns paired with their values, in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'static ColumnSpec, Option<&FieldValue>)> + '_ {
        self.kind
            .columns()
            .iter()
            .zip(self.values.iter().map(Option::as_ref))
    }
}
