// ============================================================================
// FCA API - Lookup Handlers
// File: crates/fca-api/src/handlers/lookups.rs
// ============================================================================
//! Lookup rule list, add, edit and delete pages.
//! Rules are addressed by their composite key in the URL.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde_json::json;
use tracing::info;

use fca_core::domain::lookup::{LOOKUP_COLUMNS, LOOKUP_EDITABLE};
use fca_core::domain::{LookupKey, RecordKind, Row};
use fca_core::error::DomainError;
use fca_core::normalizer::display_row;

use super::forms::{form_fields, parse_form};
use super::table::{TablePage, TableRow};
use crate::error::ApiError;
use crate::state::AppState;

/// `{campaignid}/{retailerid}/{productid}` with each segment percent-encoded
pub(crate) fn key_path(key: &LookupKey) -> String {
    format!(
        "{}/{}/{}",
        key.campaign_id,
        urlencoding::encode(&key.retailer_id),
        urlencoding::encode(&key.product_id)
    )
}

fn all_columns() -> Vec<&'static str> {
    LOOKUP_COLUMNS.iter().map(|c| c.name).collect()
}

/// GET /lookup
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let lookups = state.lookups.list().await?;

    let rows = lookups
        .iter()
        .map(|lookup| {
            let mut cells = display_row(&lookup.to_row());
            cells.push(
                lookup
                    .modification_date
                    .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
            );
            let path = key_path(&lookup.key());
            TableRow {
                cells,
                edit_url: Some(format!("/lookup/edit/{}", path)),
                delete_url: Some(format!("/lookup/delete/{}", path)),
            }
        })
        .collect();

    let mut columns: Vec<String> = all_columns().into_iter().map(String::from).collect();
    columns.push("MODIFICATIONDATE".to_string());

    state.views.render(
        "lookups",
        &TablePage {
            title: "Lookup".to_string(),
            columns,
            rows,
            actions: true,
        },
    )
}

/// GET /lookup/add
pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let columns = all_columns();
    state.views.render(
        "lookup_form",
        &json!({
            "title": "Add Lookup",
            "action": "/lookup/add",
            "fields": form_fields(&Row::empty(RecordKind::Lookup), &columns, &columns),
        }),
    )
}

/// POST /lookup/add
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, ApiError> {
    let row = parse_form(RecordKind::Lookup, &form)?;
    state.lookups.create(&row).await?;
    info!("Lookup added from console");
    Ok(Redirect::to("/lookup"))
}

/// GET /lookup/edit/{campaignid}/{retailerid}/{productid}
pub async fn edit_form(
    State(state): State<AppState>,
    Path((campaign_id, retailer_id, product_id)): Path<(i64, String, String)>,
) -> Result<Html<String>, ApiError> {
    let key = LookupKey {
        campaign_id,
        retailer_id,
        product_id,
    };
    let lookup = state
        .lookups
        .find(&key)
        .await?
        .ok_or_else(|| DomainError::LookupNotFound(key.clone()))?;

    state.views.render(
        "lookup_form",
        &json!({
            "title": "Edit Lookup",
            "action": format!("/lookup/edit/{}", key_path(&key)),
            "fields": form_fields(&lookup.to_row(), &all_columns(), &LOOKUP_EDITABLE),
        }),
    )
}

/// POST /lookup/edit/{campaignid}/{retailerid}/{productid}
pub async fn update(
    State(state): State<AppState>,
    Path((campaign_id, retailer_id, product_id)): Path<(i64, String, String)>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, ApiError> {
    let key = LookupKey {
        campaign_id,
        retailer_id,
        product_id,
    };
    let row = parse_form(RecordKind::Lookup, &form)?;
    state.lookups.update(&key, &row).await?;
    Ok(Redirect::to("/lookup"))
}

/// GET /lookup/delete/{campaignid}/{retailerid}/{productid}
pub async fn delete(
    State(state): State<AppState>,
    Path((campaign_id, retailer_id, product_id)): Path<(i64, String, String)>,
) -> Result<Redirect, ApiError> {
    let key = LookupKey {
        campaign_id,
        retailer_id,
        product_id,
    };
    state.lookups.delete(&key).await?;
    Ok(Redirect::to("/lookup"))
}
