//! StockPulse Core - ticker directory and analysis gateway.
//!
//! This crate holds everything the HTTP layer delegates to: loading the
//! ticker universe, validating symbols, and relaying analysis requests to
//! the external sentiment service. It has no knowledge of the web framework.

pub mod analysis;
pub mod errors;
pub mod tickers;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
