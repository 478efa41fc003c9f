// ============================================================================
// FCA API - Campaign Handlers
// File: crates/fca-api/src/handlers/campaigns.rs
// ============================================================================
//! Campaign list, add, edit and delete pages

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde_json::json;
use tracing::info;

use fca_core::domain::campaign::{CAMPAIGN_EDITABLE, RECHARGE_DEPENDENT};
use fca_core::domain::{Campaign, ColumnSpec, RecordKind, Row};
use fca_core::normalizer::display;

use super::forms::{form_fields, parse_form};
use super::table::{TablePage, TableRow};
use crate::error::ApiError;
use crate::state::AppState;

/// Everything except `TENANTID`, which the console never sets by hand
const ADD_COLUMNS: [&str; 18] = [
    "CAMPAIGNNAME",
    "STARTDATE",
    "ENDDATE",
    "STATUS",
    "FCA",
    "IFCA",
    "BVSHITS",
    "BUNDLE",
    "BUNDLETYPE",
    "FCABUNDLERANGE",
    "BVSHITS_TO_FCA_RANGE",
    "IFCADATERANGE",
    "RECHARGETYPE",
    "RECHARGERNR",
    "RECHARGERBR",
    "DESCRIPTION",
    "PRIORITY",
    "CREATEDBY",
];

/// Recharge columns only appear when some listed campaign uses them
pub(crate) fn visible_columns(campaigns: &[Campaign]) -> Vec<&'static ColumnSpec> {
    let show_recharge = campaigns.iter().any(Campaign::is_recharger);
    RecordKind::Campaign
        .columns()
        .iter()
        .filter(|c| show_recharge || !RECHARGE_DEPENDENT.contains(&c.name))
        .collect()
}

/// GET /campaigns
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let campaigns = state.campaigns.list().await?;
    let columns = visible_columns(&campaigns);

    let rows = campaigns
        .iter()
        .map(|campaign| {
            let row = campaign.to_row();
            let mut cells = vec![campaign.campaign_id.to_string()];
            cells.extend(columns.iter().map(|c| display(c.kind, row.get(c.name))));
            cells.push(
                campaign
                    .create_date
                    .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
            );
            TableRow {
                cells,
                edit_url: Some(format!("/campaigns/edit/{}", campaign.campaign_id)),
                delete_url: Some(format!("/campaigns/delete/{}", campaign.campaign_id)),
            }
        })
        .collect();

    let mut headers = vec!["CAMPAIGNID".to_string()];
    headers.extend(columns.iter().map(|c| c.name.to_string()));
    headers.push("CREATEDATE".to_string());

    state.views.render(
        "campaigns",
        &TablePage {
            title: "Campaigns".to_string(),
            columns: headers,
            rows,
            actions: true,
        },
    )
}

/// GET /campaigns/add
pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let row = Row::empty(RecordKind::Campaign);
    state.views.render(
        "campaign_form",
        &json!({
            "title": "Add Campaign",
            "action": "/campaigns/add",
            "fields": form_fields(&row, &ADD_COLUMNS, &ADD_COLUMNS),
        }),
    )
}

/// POST /campaigns/add
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, ApiError> {
    let mut row = parse_form(RecordKind::Campaign, &form)?;
    row.set("TENANTID", None);

    let id = state.campaigns.create(&row).await?;
    info!("Campaign {} added from console", id);
    Ok(Redirect::to("/campaigns"))
}

/// GET /campaigns/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let campaign = state
        .campaigns
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Campaign {} not found", id)))?;

    state.views.render(
        "campaign_form",
        &json!({
            "title": format!("Edit Campaign {}", id),
            "action": format!("/campaigns/edit/{}", id),
            "fields": form_fields(&campaign.to_row(), &ADD_COLUMNS, &CAMPAIGN_EDITABLE),
        }),
    )
}

/// POST /campaigns/edit/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, ApiError> {
    let row = parse_form(RecordKind::Campaign, &form)?;
    state.campaigns.update(id, &row).await?;
    Ok(Redirect::to("/campaigns"))
}

/// GET /campaigns/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    state.campaigns.delete(id).await?;
    Ok(Redirect::to("/campaigns"))
}
