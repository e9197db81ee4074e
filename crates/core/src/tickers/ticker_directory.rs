//! In-memory ticker directory loaded once from a CSV source.
//!
//! The directory is immutable after construction and is shared read-only
//! (`Arc<TickerDirectory>`) by every request handler, so lookups need no
//! locking.

use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{debug, info, warn};

use crate::errors::{Result, TickerSourceError};
use crate::tickers::TickerRecord;

const SYMBOL_COLUMN: &str = "Symbol";
const NAME_COLUMN: &str = "Name";
const SECTOR_COLUMN: &str = "Sector";

/// Trims and uppercases a user-supplied symbol.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Symbol to company-name mapping with stable listing order.
#[derive(Debug, Clone, Default)]
pub struct TickerDirectory {
    records: Vec<TickerRecord>,
    index: HashMap<String, usize>,
    /// Original tabular text when the directory was read from a source.
    source_text: Option<String>,
}

impl TickerDirectory {
    /// Reads and parses the CSV file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TickerSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_csv_str(&text)?;
        info!(
            "Loaded {} tickers from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// Parses CSV text with a header row naming at least `Symbol` and `Name`.
    ///
    /// Rows missing a required value are skipped. A repeated symbol keeps its
    /// first occurrence.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let text = text.trim_start_matches('\u{feff}');
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(TickerSourceError::from)?.clone();
        let symbol_idx = column_index(&headers, SYMBOL_COLUMN)
            .ok_or(TickerSourceError::MissingColumn(SYMBOL_COLUMN))?;
        let name_idx = column_index(&headers, NAME_COLUMN)
            .ok_or(TickerSourceError::MissingColumn(NAME_COLUMN))?;
        let sector_idx = column_index(&headers, SECTOR_COLUMN);

        let mut directory = Self::default();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(TickerSourceError::from)?;
            let (Some(symbol), Some(name)) = (record.get(symbol_idx), record.get(name_idx)) else {
                debug!("Skipping ticker row {}: missing required columns", row + 1);
                continue;
            };
            let sector = sector_idx.and_then(|idx| record.get(idx)).map(str::to_string);
            directory.insert(symbol, name, sector);
        }

        directory.source_text = Some(text.to_string());
        Ok(directory)
    }

    /// Builds a directory from in-memory records using the same normalization
    /// rules as [`TickerDirectory::from_csv_str`].
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TickerRecord>,
    {
        let mut directory = Self::default();
        for record in records {
            directory.insert(&record.symbol, &record.name, record.sector);
        }
        directory
    }

    fn insert(&mut self, symbol: &str, name: &str, sector: Option<String>) {
        let symbol = normalize_symbol(symbol);
        let name = name.trim();
        let sector = sector
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if symbol.is_empty() || name.is_empty() {
            return;
        }
        if self.index.contains_key(&symbol) {
            warn!("Duplicate ticker symbol '{}' ignored", symbol);
            return;
        }
        self.index.insert(symbol.clone(), self.records.len());
        self.records.push(TickerRecord {
            symbol,
            name: name.to_string(),
            sector,
        });
    }

    /// Finds the record for `symbol`, ignoring case and surrounding whitespace.
    pub fn lookup(&self, symbol: &str) -> Option<&TickerRecord> {
        self.index
            .get(&normalize_symbol(symbol))
            .map(|&idx| &self.records[idx])
    }

    /// Company name for `symbol`, if known.
    pub fn company_name(&self, symbol: &str) -> Option<&str> {
        self.lookup(symbol).map(|record| record.name.as_str())
    }

    /// Every accepted record, once each, in source order.
    pub fn list_all(&self) -> &[TickerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tabular form of the directory.
    ///
    /// Returns the source text verbatim when one was loaded, otherwise writes
    /// a `Symbol,Name,Sector` table.
    pub fn to_csv(&self) -> Result<String> {
        if let Some(text) = &self.source_text {
            return Ok(text.clone());
        }

        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        writer
            .write_record([SYMBOL_COLUMN, NAME_COLUMN, SECTOR_COLUMN])
            .map_err(TickerSourceError::from)?;
        for record in &self.records {
            writer
                .write_record([
                    record.symbol.as_str(),
                    record.name.as_str(),
                    record.sector.as_deref().unwrap_or(""),
                ])
                .map_err(TickerSourceError::from)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| TickerSourceError::from(csv::Error::from(e.into_error())))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}
