//! Tickers module - the symbol to company-name directory and its search helpers.

mod ticker_directory;
mod tickers_model;
mod tickers_search;


pub use ticker_directory::{normalize_symbol, TickerDirectory};
pub use tickers_model::TickerRecord;
pub use tickers_search::{filter_tickers, DEFAULT_SUGGESTION_LIMIT};
