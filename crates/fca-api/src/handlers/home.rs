use axum::{extract::State, response::Html};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.views.render("home", &json!({ "title": state.config.app.name }))
}
