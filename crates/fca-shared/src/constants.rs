//! Application-wide constants

pub const CAMPAIGN_TABLE: &str = "ACH_FCA_CAMPAIGN";
pub const LOOKUP_TABLE: &str = "ACH_FCA_LOOKUP";
pub const LOGS_TABLE: &str = "ACH_FCA_LOGS";

/// Recharge type that activates `RECHARGERNR` / `RECHARGERBR`.
pub const RECHARGER_SENTINEL: &str = "RECHARGER";

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CAMPAIGN_TEMPLATE_FILENAME: &str = "campaign_template.xlsx";
pub const LOOKUP_TEMPLATE_FILENAME: &str = "lookup_template.xlsx";
pub const ALLOWED_UPLOAD_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
