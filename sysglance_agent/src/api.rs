//! HTTP routes. One read-only endpoint.

use axum::{extract::State, routing::get, Json, Router};

use crate::metrics::collect_system_info;
use crate::state::AppState;
use crate::types::SystemInfo;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/system-info", get(system_info))
        .with_state(state)
}

async fn system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    Json(collect_system_info(&state).await)
}
