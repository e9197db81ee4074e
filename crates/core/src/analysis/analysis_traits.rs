use async_trait::async_trait;

use crate::analysis::UpstreamResponse;
use crate::errors::{Result, UpstreamError};

/// Transport to the external analysis service.
#[async_trait]
pub trait AnalysisClientTrait: Send + Sync {
    /// Issues one request for `company_name`. Any HTTP status is a success at
    /// this level; only transport faults are errors.
    async fn analyze_company(
        &self,
        company_name: &str,
    ) -> std::result::Result<UpstreamResponse, UpstreamError>;
}

/// Trait for analysis gateway operations
#[async_trait]
pub trait AnalysisServiceTrait: Send + Sync {
    async fn analyze(&self, raw_symbol: &str) -> Result<UpstreamResponse>;
}
