//! Axum handlers for `/api/*` routes.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::AppState;

/// GET /api/cards — descriptors in carousel order.
pub(super) async fn cards(State(state): State<AppState>) -> Response {
    Json(&*state.cards).into_response()
}

/// GET /api/health
pub(super) async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "cards": state.cards.len() }))
}
