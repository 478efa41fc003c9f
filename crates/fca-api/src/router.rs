//! Route table for the console

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{campaigns, health, home, logs, lookups, transfer};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.app.max_upload_bytes;

    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        // Campaigns
        .route("/campaigns", get(campaigns::list))
        .route("/campaigns/add", get(campaigns::add_form).post(campaigns::create))
        .route("/campaigns/edit/{id}", get(campaigns::edit_form).post(campaigns::update))
        .route("/campaigns/delete/{id}", get(campaigns::delete))
        .route(
            "/campaigns/import",
            get(transfer::campaign_import_page).post(transfer::import_campaigns),
        )
        .route("/campaigns/template", get(transfer::campaign_template))
        // Lookup rules
        .route("/lookup", get(lookups::list))
        .route("/lookup/add", get(lookups::add_form).post(lookups::create))
        .route(
            "/lookup/edit/{campaignid}/{retailerid}/{productid}",
            get(lookups::edit_form).post(lookups::update),
        )
        .route(
            "/lookup/delete/{campaignid}/{retailerid}/{productid}",
            get(lookups::delete),
        )
        .route(
            "/lookup/import",
            get(transfer::lookup_import_page).post(transfer::import_lookups),
        )
        .route("/lookup/template", get(transfer::lookup_template))
        // Logs
        .route("/logs", get(logs::list))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
