//! # Bulk Import
//!
//! Runs decoded spreadsheet rows through normalization and validation, then
//! inserts the survivors through one store session.
//!
//! Two failure granularities:
//! - a row failing validation is reported and skipped, the batch continues
//! - a store error while inserting rolls back the whole batch

use std::fmt;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::RecordKind;
use crate::error::StoreError;
use crate::normalizer::normalize_row;
use crate::repositories::RecordStore;
use crate::spreadsheet::RawRow;
use crate::validator::RowValidator;

/// Validation failure of one sheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row_number: u32,
    pub reasons: Vec<String>,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row_number, self.reasons.join("; "))
    }
}

/// Outcome of a committed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn summary(&self) -> String {
        format!("Imported: {}, Errors: {}", self.imported, self.error_count())
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Batch-level failure; nothing from the upload was saved
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import failed at row {row_number}, no rows were saved: {source}")]
    Insert {
        row_number: u32,
        #[source]
        source: StoreError,
    },

    #[error("Import could not be committed, no rows were saved: {0}")]
    Commit(#[source] StoreError),
}

/// Import `rows` of `kind` through `store`, committing once at the end.
pub async fn import_rows<S, I>(
    store: &mut S,
    kind: RecordKind,
    rows: I,
) -> Result<ImportReport, ImportError>
where
    S: RecordStore + ?Sized,
    I: IntoIterator<Item = RawRow>,
{
    let validator = RowValidator::bulk();
    let mut report = ImportReport::default();

    for raw in rows {
        let row = normalize_row(kind, |column| raw.get(column.name));

        let row = match validator.validate(row) {
            Ok(row) => row,
            Err(reasons) => {
                let row_error = RowError {
                    row_number: raw.row_number,
                    reasons,
                };
                warn!("Skipping {} {}", kind.label(), row_error);
                report.errors.push(row_error);
                continue;
            }
        };

        if let Err(source) = store.insert(&row).await {
            error!(
                "Insert failed for {} row {}, rolling back: {}",
                kind.label(),
                raw.row_number,
                source
            );
            if let Err(e) = store.rollback().await {
                error!("Rollback failed: {}", e);
            }
            return Err(ImportError::Insert {
                row_number: raw.row_number,
                source,
            });
        }
        report.imported += 1;
    }

    if let Err(e) = store.commit().await {
        error!("Commit failed for {} import: {}", kind.label(), e);
        if let Err(e) = store.rollback().await {
            error!("Rollback failed: {}", e);
        }
        return Err(ImportError::Commit(e));
    }

    info!("{} import finished: {}", kind.label(), report.summary());
    Ok(report)
}
