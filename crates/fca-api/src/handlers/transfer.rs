// ============================================================================
// FCA API - Spreadsheet Transfer Handlers
// File: crates/fca-api/src/handlers/transfer.rs
// ============================================================================
//! Template download and bulk import for campaigns and lookups

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info};

use fca_core::domain::RecordKind;
use fca_core::import::{import_rows, ImportReport};
use fca_core::spreadsheet::{decode, encode_template};
use fca_shared::constants::XLSX_MIME;

use crate::error::ApiError;
use crate::state::AppState;
use crate::upload::read_upload;

fn base_path(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Campaign => "/campaigns",
        RecordKind::Lookup => "/lookup",
    }
}

#[derive(Debug, Serialize)]
struct ImportPage {
    title: String,
    action: String,
    template_url: String,
    summary: Option<String>,
    messages: Vec<String>,
    failure: Option<String>,
}

impl ImportPage {
    fn new(kind: RecordKind) -> Self {
        let title = match kind {
            RecordKind::Campaign => "Import Campaigns",
            RecordKind::Lookup => "Import Lookups",
        };
        Self {
            title: title.to_string(),
            action: format!("{}/import", base_path(kind)),
            template_url: format!("{}/template", base_path(kind)),
            summary: None,
            messages: Vec::new(),
            failure: None,
        }
    }

    fn with_report(mut self, report: &ImportReport) -> Self {
        self.summary = Some(report.summary());
        self.messages = report.messages();
        self
    }

    fn with_failure(mut self, message: String) -> Self {
        self.failure = Some(message);
        self
    }
}

async fn import_page(state: &AppState, kind: RecordKind) -> Result<Html<String>, ApiError> {
    state.views.render("import", &ImportPage::new(kind))
}

async fn run_import(
    state: &AppState,
    kind: RecordKind,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let upload = read_upload(multipart).await?;
    info!("Importing {} rows from {}", kind.label(), upload.filename);

    let bytes = upload.bytes;
    let rows = tokio::task::spawn_blocking(move || decode(kind, bytes))
        .await
        .map_err(|e| ApiError::InternalError(format!("Decode task failed: {}", e)))??;

    let mut session = state.import_sessions.begin().await?;
    let page = match import_rows(&mut *session, kind, rows).await {
        Ok(report) => ImportPage::new(kind).with_report(&report),
        Err(e) => {
            error!("{} import aborted: {}", kind.label(), e);
            ImportPage::new(kind).with_failure(e.to_string())
        }
    };

    state.views.render("import", &page)
}

async fn template_download(kind: RecordKind) -> Result<Response, ApiError> {
    let bytes = tokio::task::spawn_blocking(move || encode_template(kind))
        .await
        .map_err(|e| ApiError::InternalError(format!("Template task failed: {}", e)))??;

    info!("Serving {} ({} bytes)", kind.template_filename(), bytes.len());
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", kind.template_filename()),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// GET /campaigns/import
pub async fn campaign_import_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    import_page(&state, RecordKind::Campaign).await
}

/// POST /campaigns/import
pub async fn import_campaigns(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    run_import(&state, RecordKind::Campaign, multipart).await
}

/// GET /campaigns/template
pub async fn campaign_template() -> Result<Response, ApiError> {
    template_download(RecordKind::Campaign).await
}

/// GET /lookup/import
pub async fn lookup_import_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    import_page(&state, RecordKind::Lookup).await
}

/// POST /lookup/import
pub async fn import_lookups(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    run_import(&state, RecordKind::Lookup, multipart).await
}

/// GET /lookup/template
pub async fn lookup_template() -> Result<Response, ApiError> {
    template_download(RecordKind::Lookup).await
}
