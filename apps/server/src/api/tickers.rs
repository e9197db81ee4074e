use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockpulse_core::tickers::{
    filter_tickers, TickerDirectory, TickerRecord, DEFAULT_SUGGESTION_LIMIT,
};

const MAX_SUGGESTION_LIMIT: usize = 50;

fn directory(state: &AppState) -> ApiResult<&TickerDirectory> {
    state
        .ticker_directory
        .as_deref()
        .ok_or_else(|| ApiError::NotFound("Ticker data unavailable".to_string()))
}

/// Full ticker table in its tabular form.
async fn list_tickers(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let csv = directory(&state)?.to_csv()?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv))
}

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
    limit: Option<usize>,
}

/// Search-as-you-type suggestions.
async fn search_tickers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<TickerRecord>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .min(MAX_SUGGESTION_LIMIT);
    let records = directory(&state)?.list_all();
    let matches = filter_tickers(query.q.as_deref().unwrap_or_default(), records, limit);
    Ok(Json(matches.into_iter().cloned().collect()))
}

async fn get_ticker(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TickerRecord>> {
    directory(&state)?
        .lookup(&symbol)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown ticker symbol '{}'", symbol.trim())))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tickers", get(list_tickers))
        .route("/tickers/search", get(search_tickers))
        .route("/tickers/{symbol}", get(get_ticker))
}
