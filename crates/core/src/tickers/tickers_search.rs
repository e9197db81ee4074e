//! Incremental ticker filtering for search-as-you-type suggestions.

use crate::tickers::TickerRecord;

/// Number of suggestions returned when the caller does not ask for a limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Returns up to `limit` records whose symbol starts with `query` or whose
/// name contains it, both compared in uppercase. Input order is preserved.
///
/// An empty or whitespace-only query yields no suggestions.
pub fn filter_tickers<'a>(
    query: &str,
    records: &'a [TickerRecord],
    limit: usize,
) -> Vec<&'a TickerRecord> {
    let needle = query.trim().to_uppercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| {
            record.symbol.starts_with(&needle) || record.name.to_uppercase().contains(&needle)
        })
        .take(limit)
        .collect()
}
