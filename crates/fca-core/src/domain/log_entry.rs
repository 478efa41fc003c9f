// ============================================================================
// FCA Core - Log Entry
// File: crates/fca-core/src/domain/log_entry.rs
// Description: Read-only audit row with store-defined columns
// ============================================================================

use serde_json::{Map, Value};

/// One `ACH_FCA_LOGS` row. Columns come from the store, in table order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogEntry {
    pub fields: Map<String, Value>,
}

impl LogEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Display text for a column; nulls and missing columns are empty
    pub fn display(&self, column: &str) -> String {
        match self.fields.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
