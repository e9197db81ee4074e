use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Router};

async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the ticker directory has loaded.
async fn readyz(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    if state.ticker_directory.is_some() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "ticker directory unavailable")
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
