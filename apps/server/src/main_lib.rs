use std::sync::Arc;

use crate::config::Config;
use stockpulse_core::{
    analysis::{AnalysisClientTrait, AnalysisService, AnalysisServiceTrait, HttpAnalysisClient},
    tickers::TickerDirectory,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    /// `None` when the ticker source failed to load at startup. Ticker data
    /// and analysis are then refused rather than served from a partial table.
    pub ticker_directory: Option<Arc<TickerDirectory>>,
    pub analysis_service: Option<Arc<dyn AnalysisServiceTrait + Send + Sync>>,
}

impl AppState {
    pub fn new(
        ticker_directory: Option<Arc<TickerDirectory>>,
        analysis_client: Arc<dyn AnalysisClientTrait>,
    ) -> Self {
        let analysis_service = ticker_directory.as_ref().map(|directory| {
            Arc::new(AnalysisService::new(directory.clone(), analysis_client))
                as Arc<dyn AnalysisServiceTrait + Send + Sync>
        });
        Self {
            ticker_directory,
            analysis_service,
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("SP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let analysis_client =
        HttpAnalysisClient::new(&config.nlp_base_url, config.nlp_token.clone())?;
    tracing::info!("Analysis service at {}", analysis_client.base_url());

    let ticker_directory = match TickerDirectory::load(&config.tickers_path) {
        Ok(directory) => {
            tracing::info!(
                "Ticker directory ready: {} symbols from {}",
                directory.len(),
                config.tickers_path.display()
            );
            Some(Arc::new(directory))
        }
        Err(e) => {
            tracing::error!("Ticker directory unavailable: {}", e);
            None
        }
    };

    Ok(Arc::new(AppState::new(
        ticker_directory,
        Arc::new(analysis_client),
    )))
}
