//! Analysis module - validates ticker symbols and forwards sentiment analysis
//! requests to the external analysis service.
//!
//! ```text
//! AnalysisService ──lookup──▶ TickerDirectory
//!        │
//!        └──company name──▶ AnalysisClientTrait ──HTTP──▶ analysis service
//! ```

mod analysis_client;
mod analysis_model;
mod analysis_service;
mod analysis_traits;

#[cfg(test)]
mod analysis_service_tests;

pub use analysis_client::{build_analyze_url, HttpAnalysisClient, INTERNAL_TOKEN_HEADER};
pub use analysis_model::{UpstreamResponse, JSON_CONTENT_TYPE};
pub use analysis_service::AnalysisService;
pub use analysis_traits::{AnalysisClientTrait, AnalysisServiceTrait};
