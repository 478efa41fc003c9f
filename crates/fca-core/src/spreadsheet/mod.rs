//! Spreadsheet codec: uploaded workbooks in, downloadable templates out.
//!
//! Both directions share the record kind's fixed column list. Template rows 1
//! and 2 are the header and a sample row; decode skips both.

pub mod reader;
pub mod template;

use thiserror::Error;

pub use reader::{decode, RawRow, RawRows};
pub use template::encode_template;

/// Gap, in empty columns, between the data columns and the instruction block
pub const INSTRUCTION_GAP: u16 = 2;

#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("Failed to open workbook: {0}")]
    Open(#[from] calamine::Error),

    #[error("Workbook has no worksheets")]
    NoWorksheet,

    #[error("Worksheet has no header row")]
    MissingHeader,

    #[error("Failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
