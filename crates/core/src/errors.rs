//! Core error types for the StockPulse gateway.
//!
//! The root [`Error`] doubles as the tagged outcome of an analysis request:
//! a caller can tell a rejected symbol ([`Error::Validation`]) apart from an
//! unreachable analysis service ([`Error::Upstream`]) without inspecting
//! messages. Upstream HTTP errors are not represented here at all; they are
//! relayed as ordinary responses.

use std::path::PathBuf;

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to callers for any symbol the directory does not know.
pub const INVALID_TICKER_MESSAGE: &str = "Invalid ticker symbol";

/// Root error type for the gateway.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ticker source error: {0}")]
    TickerSource(#[from] TickerSourceError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Upstream(#[from] UpstreamError),
}

/// Failures while loading the ticker data source.
///
/// These are startup errors: the directory is either fully loaded or absent.
#[derive(Error, Debug)]
pub enum TickerSourceError {
    /// The source file is missing or could not be read.
    #[error("Failed to read ticker source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row does not name a required column.
    #[error("Ticker source is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The CSV itself is malformed.
    #[error("Malformed ticker source: {0}")]
    Csv(#[from] csv::Error),
}

/// Rejections of user-supplied symbols. Never reaches the upstream service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty or whitespace-only input.
    #[error("{}", INVALID_TICKER_MESSAGE)]
    EmptySymbol,

    /// Symbol not present in the ticker directory.
    #[error("{}", INVALID_TICKER_MESSAGE)]
    UnknownSymbol(String),
}

/// The analysis service could not be reached or its response not read.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Analysis service unreachable: {0}")]
    Transport(String),

    #[error("Invalid analysis service address: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.to_string())
    }
}
