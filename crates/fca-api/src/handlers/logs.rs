use axum::{extract::State, response::Html};

use fca_core::domain::LogEntry;

use super::table::{TablePage, TableRow};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /logs, read-only
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let entries = state.logs.list().await?;
    state.views.render("logs", &log_table(&entries))
}

/// Columns follow the first row; the table has a fixed shape
pub(crate) fn log_table(entries: &[LogEntry]) -> TablePage {
    let columns: Vec<String> = entries
        .first()
        .map(|entry| entry.columns().map(String::from).collect())
        .unwrap_or_default();

    let rows = entries
        .iter()
        .map(|entry| TableRow {
            cells: columns.iter().map(|c| entry.display(c)).collect(),
            edit_url: None,
            delete_url: None,
        })
        .collect();

    TablePage {
        title: "Logs".to_string(),
        columns,
        rows,
        actions: false,
    }
}
