//! HTTP client for the external analysis service.
//!
//! The service matches on company names rather than ticker symbols, so the
//! query carries the resolved name: `GET {base}/analyze?company=Apple+Inc.`

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use crate::analysis::{AnalysisClientTrait, UpstreamResponse};
use crate::errors::UpstreamError;

/// Header carrying the shared secret for service-to-service calls.
pub const INTERNAL_TOKEN_HEADER: &str = "X-INTERNAL-TOKEN";

const ANALYZE_PATH: &str = "/analyze";
const COMPANY_PARAM: &str = "company";

/// Builds the analysis URL for `company_name`, form-encoding the name.
pub fn build_analyze_url(base_url: &str, company_name: &str) -> Result<String, UpstreamError> {
    let query = serde_urlencoded::to_string([(COMPANY_PARAM, company_name)])
        .map_err(|e| UpstreamError::InvalidBaseUrl(format!("cannot encode query: {}", e)))?;
    Ok(format!(
        "{}{}?{}",
        base_url.trim_end_matches('/'),
        ANALYZE_PATH,
        query
    ))
}

/// reqwest-backed [`AnalysisClientTrait`].
///
/// One attempt per call; no retries and no timeout beyond reqwest's defaults.
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
    internal_token: Option<String>,
}

impl HttpAnalysisClient {
    /// Creates a client for the service at `base_url` (scheme and host, with an
    /// optional path prefix).
    pub fn new(base_url: &str, internal_token: Option<String>) -> Result<Self, UpstreamError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| UpstreamError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(UpstreamError::InvalidBaseUrl(format!(
                "{}: unsupported scheme '{}'",
                base_url,
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("stockpulse/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            internal_token: internal_token.filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnalysisClientTrait for HttpAnalysisClient {
    async fn analyze_company(&self, company_name: &str) -> Result<UpstreamResponse, UpstreamError> {
        let url = build_analyze_url(&self.base_url, company_name)?;

        let mut request = self.client.get(&url);
        if let Some(token) = &self.internal_token {
            request = request.header(INTERNAL_TOKEN_HEADER, token);
        }

        debug!("Analysis request: {}", url);

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!("Analysis response: {} ({} bytes)", status, body.len());

        Ok(UpstreamResponse::new(status, body))
    }
}
