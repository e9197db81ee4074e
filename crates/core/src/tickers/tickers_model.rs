//! Ticker domain models.

use serde::{Deserialize, Serialize};

/// One row of the ticker directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickerRecord {
    /// Uppercased, trimmed exchange symbol.
    pub symbol: String,
    /// Company name the analysis service matches on.
    pub name: String,
    /// Free-text classification, only surfaced to the frontend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl TickerRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            sector: None,
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }
}
