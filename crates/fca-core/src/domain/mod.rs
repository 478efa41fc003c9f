//! # FCA Core - Domain Module
//!
//! Records of the three console tables and the column model shared by
//! forms, spreadsheets and the store.

pub mod field;
pub mod record;
pub mod campaign;
pub mod lookup;
pub mod log_entry;

pub use field::{ColumnSpec, FieldKind, FieldValue, NumericType};
pub use record::{RecordKind, Row};
pub use campaign::Campaign;
pub use lookup::{Lookup, LookupKey};
pub use log_entry::LogEntry;
