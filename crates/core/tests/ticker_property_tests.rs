//! Property-based integration tests for the ticker directory.
//!
//! These tests verify that lookup and listing hold across arbitrary ticker
//! tables, using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use std::collections::BTreeMap;
use stockpulse_core::tickers::TickerDirectory;

// =============================================================================
// Generators
// =============================================================================

/// Generates a ticker table with unique uppercase symbols.
fn arb_table() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map("[A-Z]{1,5}", "[A-Za-z][A-Za-z .&]{0,24}", 1..40)
}

fn to_csv(table: &BTreeMap<String, String>) -> String {
    let mut csv = String::from("Symbol,Name\n");
    for (symbol, name) in table {
        csv.push_str(&format!("{},{}\n", symbol, name));
    }
    csv
}

/// Alternates letter case so lookups never see the stored form.
fn scramble_case(symbol: &str) -> String {
    symbol
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn present_symbols_resolve_regardless_of_case_and_padding(
        table in arb_table(),
        pad in "[ \t]{0,3}",
    ) {
        let directory = TickerDirectory::from_csv_str(&to_csv(&table)).unwrap();
        for (symbol, name) in &table {
            let input = format!("{}{}{}", pad, scramble_case(symbol), pad);
            prop_assert_eq!(directory.company_name(&input), Some(name.trim()));
        }
    }

    #[test]
    fn absent_symbols_are_not_found(
        table in arb_table(),
        unseen in "[A-Z]{6,8}",
    ) {
        let directory = TickerDirectory::from_csv_str(&to_csv(&table)).unwrap();
        prop_assert!(directory.lookup(&unseen).is_none());
        prop_assert!(directory.lookup(&unseen.to_lowercase()).is_none());
    }

    #[test]
    fn list_all_returns_each_row_exactly_once(table in arb_table()) {
        let directory = TickerDirectory::from_csv_str(&to_csv(&table)).unwrap();

        // Interleave reads; listing must not depend on them.
        if let Some(first) = table.keys().next() {
            let _ = directory.lookup(first);
        }

        let listed: Vec<_> = directory
            .list_all()
            .iter()
            .map(|r| (r.symbol.clone(), r.name.clone()))
            .collect();
        let expected: Vec<_> = table
            .iter()
            .map(|(s, n)| (s.clone(), n.trim().to_string()))
            .collect();
        prop_assert_eq!(listed, expected);
    }
}
