use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use super::SpreadsheetError;
use crate::domain::RecordKind;

/// One data row projected onto a record kind's column list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based sheet row, as the operator sees it
    pub row_number: u32,
    kind: RecordKind,
    cells: Vec<String>,
}

impl RawRow {
    /// `cells` must follow `kind.columns()` order; missing trailing cells read as empty
    pub fn new(row_number: u32, kind: RecordKind, cells: Vec<String>) -> Self {
        Self {
            row_number,
            kind,
            cells,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.kind
            .column_index(column)
            .and_then(|idx| self.cells.get(idx))
            .map(String::as_str)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

/// Lazily projected data rows, after the header and sample rows
#[derive(Debug)]
pub struct RawRows {
    kind: RecordKind,
    /// Sheet column of each allowed column, `None` when the header lacks it
    positions: Vec<Option<usize>>,
    rows: std::vec::IntoIter<(u32, Vec<Data>)>,
}

impl Iterator for RawRows {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        for (row_number, cells) in self.rows.by_ref() {
            let projected = self
                .positions
                .iter()
                .map(|pos| pos.and_then(|i| cells.get(i)).map(cell_text).unwrap_or_default())
                .collect();
            let raw = RawRow::new(row_number, self.kind, projected);
            if raw.is_blank() {
                continue;
            }
            return Some(raw);
        }
        None
    }
}

/// Read the first worksheet of an `.xlsx`/`.xls` upload.
///
/// Columns are matched by header name, so order does not matter; unknown
/// columns (template instructions included) are dropped and absent ones read
/// as empty. The first data row is the template sample and is always skipped.
pub fn decode(kind: RecordKind, bytes: Vec<u8>) -> Result<RawRows, SpreadsheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SpreadsheetError::NoWorksheet)??;

    let first_row = range.start().map(|(row, _)| row).unwrap_or(0);
    let mut rows = range.rows();

    let header: Vec<String> = rows
        .next()
        .ok_or(SpreadsheetError::MissingHeader)?
        .iter()
        .map(|c| cell_text(c).trim().to_string())
        .collect();
    if header.iter().all(String::is_empty) {
        return Err(SpreadsheetError::MissingHeader);
    }

    let positions: Vec<Option<usize>> = kind
        .columns()
        .iter()
        .map(|column| header.iter().position(|h| h == column.name))
        .collect();

    let ignored: Vec<&str> = header
        .iter()
        .filter(|h| !h.is_empty() && kind.column_index(h).is_none())
        .map(String::as_str)
        .collect();
    if !ignored.is_empty() {
        debug!("Ignoring {} columns not in the {} list: {:?}", ignored.len(), kind.label(), ignored);
    }

    // Header is sheet row first_row + 1, the sample row first_row + 2.
    let data: Vec<(u32, Vec<Data>)> = rows
        .skip(1)
        .enumerate()
        .map(|(i, cells)| (first_row + i as u32 + 3, cells.to_vec()))
        .collect();

    Ok(RawRows {
        kind,
        positions,
        rows: data.into_iter(),
    })
}

/// Text form of a cell, close to what the operator typed
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) if value.time() == chrono::NaiveTime::MIN => {
                value.format("%Y-%m-%d").to_string()
            }
            Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
