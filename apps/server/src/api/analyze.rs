use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use stockpulse_core::errors::ValidationError;

/// Validates `symbol` and relays the analysis service's response as-is.
async fn analyze_symbol(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let service = state
        .analysis_service
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("Ticker directory unavailable".to_string()))?;

    let upstream = service.analyze(&symbol).await?;
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((
        status,
        [(header::CONTENT_TYPE, upstream.content_type())],
        upstream.body,
    )
        .into_response())
}

/// `/analyze` and `/analyze/` carry no symbol at all.
async fn analyze_missing_symbol() -> ApiError {
    ApiError::Core(ValidationError::EmptySymbol.into())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", get(analyze_missing_symbol))
        .route("/analyze/", get(analyze_missing_symbol))
        .route("/analyze/{symbol}", get(analyze_symbol))
}
