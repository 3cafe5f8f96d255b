use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use log::*;

/// GET whether the server is up and responding to requests
pub async fn health_check(State(app_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check with {} active stream(s)", app_state.active_streams());
    (StatusCode::OK, "healthy")
}
