use rust_xlsxwriter::{Color, Format, Workbook};

use super::{SpreadsheetError, INSTRUCTION_GAP};
use crate::domain::campaign::{BUNDLE_TYPES, RECHARGE_DEPENDENT, RECHARGE_TYPES};
use crate::domain::{ColumnSpec, FieldKind, NumericType, RecordKind};
use fca_shared::constants::RECHARGER_SENTINEL;

const DATA_COLUMN_WIDTH: f64 = 18.0;
const INSTRUCTION_COLUMN_WIDTH: f64 = 90.0;

/// Build the blank upload template for `kind`.
///
/// Row 1 holds the headers, row 2 a greyed sample that import always skips,
/// and an instruction block sits to the right of the data columns.
pub fn encode_template(kind: RecordKind) -> Result<Vec<u8>, SpreadsheetError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name(kind))?;

    let header = Format::new().set_bold();
    let sample = Format::new().set_font_color(Color::RGB(0x808080)).set_italic();
    let text_column = Format::new().set_num_format("@");

    let columns = kind.columns();
    for (idx, column) in columns.iter().enumerate() {
        let col = idx as u16;
        sheet.set_column_width(col, DATA_COLUMN_WIDTH)?;
        if column.kind == FieldKind::Date {
            // Keep Excel from turning typed dates into serial numbers.
            sheet.set_column_format(col, &text_column)?;
        }
        sheet.write_string_with_format(0, col, column.name, &header)?;
        sheet.write_string_with_format(1, col, sample_value(column), &sample)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    let notes_col = columns.len() as u16 + INSTRUCTION_GAP;
    sheet.set_column_width(notes_col, INSTRUCTION_COLUMN_WIDTH)?;
    sheet.write_string_with_format(0, notes_col, "INSTRUCTIONS", &header)?;
    for (idx, line) in instructions(kind).iter().enumerate() {
        let text = format!("{}. {}", idx + 1, line);
        sheet.write_string(idx as u32 + 1, notes_col, &text)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn sheet_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Campaign => "Campaigns",
        RecordKind::Lookup => "Lookups",
    }
}

fn sample_value(column: &ColumnSpec) -> &'static str {
    match (column.name, column.kind) {
        ("RECHARGETYPE", _) => RECHARGER_SENTINEL,
        ("BUNDLETYPE", _) => BUNDLE_TYPES[0],
        ("CAMPAIGNNAME", _) => "Sample Campaign",
        (_, FieldKind::Date) => "2025-01-01",
        (_, FieldKind::Boolean) | (_, FieldKind::Status) => "1",
        (_, FieldKind::Numeric(NumericType::Integer)) => "1",
        (_, FieldKind::Numeric(NumericType::Decimal)) => "0.5",
        (_, FieldKind::Text) => "SAMPLE",
    }
}

fn instructions(kind: RecordKind) -> Vec<String> {
    let mut lines = vec![
        "Row 2 is a sample and is always skipped. Enter data from row 3 onward.".to_string(),
        format!("Required: {}.", kind.required_columns().join(", ")),
        "Dates use YYYY-MM-DD, for example 2025-01-31.".to_string(),
        "Numbers that cannot be read are left empty instead of failing the row.".to_string(),
    ];

    match kind {
        RecordKind::Campaign => {
            lines.push(
                "STATUS, FCA, IFCA, BVSHITS and BUNDLE accept 1/0, yes/no, true/false or y/n."
                    .to_string(),
            );
            lines.push(format!("RECHARGETYPE is one of: {}.", RECHARGE_TYPES.join(", ")));
            lines.push(format!(
                "{} are kept only when RECHARGETYPE is exactly {}.",
                RECHARGE_DEPENDENT.join(" and "),
                RECHARGER_SENTINEL
            ));
            lines.push(format!("BUNDLETYPE is one of: {}.", BUNDLE_TYPES.join(", ")));
            lines.push("CAMPAIGNID is assigned automatically and is not a template column.".to_string());
        }
        RecordKind::Lookup => {
            lines.push("CAMPAIGNID must refer to an existing campaign.".to_string());
            lines.push(
                "CAMPAIGNID, RETAILERID and PRODUCTID together must be unique. A duplicate fails the whole upload."
                    .to_string(),
            );
        }
    }

    lines.push("Columns not in the header row are ignored, including this block.".to_string());
    lines
}
