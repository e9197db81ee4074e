mod analyze;
mod health;
mod tickers;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{HeaderValue, StatusCode},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, error::ApiError, main_lib::AppState};

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new().allow_origin(origins)
    };

    // Analysis waits on the upstream service with only the transport's own
    // limits, so it stays outside the request timeout.
    let local = Router::new()
        .merge(health::router())
        .merge(tickers::router())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            config.request_timeout,
        ));

    let api = Router::new()
        .merge(local)
        .merge(analyze::router())
        .fallback(api_not_found);

    Ok(Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}

/// Unknown paths under `/api` get a JSON 404 instead of the frontend.
async fn api_not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
