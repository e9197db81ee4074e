use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::analysis::{AnalysisClientTrait, AnalysisServiceTrait, UpstreamResponse};
use crate::errors::{Result, ValidationError};
use crate::tickers::{normalize_symbol, TickerDirectory};

/// Validates a symbol against the ticker directory and forwards the request
/// for its company name.
pub struct AnalysisService {
    directory: Arc<TickerDirectory>,
    client: Arc<dyn AnalysisClientTrait>,
}

impl AnalysisService {
    pub fn new(directory: Arc<TickerDirectory>, client: Arc<dyn AnalysisClientTrait>) -> Self {
        Self { directory, client }
    }

    /// Resolves `raw_symbol` to the company name sent upstream.
    pub fn resolve(&self, raw_symbol: &str) -> std::result::Result<&str, ValidationError> {
        let symbol = normalize_symbol(raw_symbol);
        if symbol.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        self.directory
            .company_name(&symbol)
            .ok_or(ValidationError::UnknownSymbol(symbol))
    }
}

#[async_trait]
impl AnalysisServiceTrait for AnalysisService {
    async fn analyze(&self, raw_symbol: &str) -> Result<UpstreamResponse> {
        let company_name = self.resolve(raw_symbol).inspect_err(|e| {
            debug!("Rejected analysis request for {:?}: {:?}", raw_symbol, e);
        })?;

        let response = self
            .client
            .analyze_company(company_name)
            .await
            .inspect_err(|e| warn!("Analysis request for '{}' failed: {}", company_name, e))?;

        if !response.is_success() {
            warn!(
                "Analysis service returned {} for '{}'",
                response.status, company_name
            );
        }
        Ok(response)
    }
}
