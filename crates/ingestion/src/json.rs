//! JSON trade-history reader.
//!
//! Reads the upstream history document shape:
//!
//! ```json
//! { "RESULT": { "HistoricOrderLists": [
//!     { "TRANSACTION_DATE": "...", "SHORT_LONG": "...",
//!       "CONTRACT": "...", "UNITS": 5, "PRICE": 12.47 }
//! ] } }
//! ```
//!
//! Unknown fields are ignored; only the flat [`RawRecord`] fields are kept.

use crate::record::{number_or_string, number_or_string_f64, RawRecord};
use recon_core::Result;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct HistoryDocument {
    #[serde(rename = "RESULT")]
    result: HistoryResult,
}

#[derive(Debug, Deserialize)]
struct HistoryResult {
    #[serde(rename = "HistoricOrderLists", default)]
    orders: Vec<HistoryRow>,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "TRANSACTION_DATE")]
    transaction_date: String,
    #[serde(rename = "SHORT_LONG")]
    short_long: String,
    #[serde(rename = "CONTRACT")]
    contract: String,
    #[serde(rename = "UNITS", deserialize_with = "number_or_string_f64")]
    units: f64,
    #[serde(rename = "PRICE", deserialize_with = "number_or_string")]
    price: String,
}

impl From<HistoryRow> for RawRecord {
    fn from(row: HistoryRow) -> Self {
        RawRecord {
            date: row.transaction_date,
            contract: row.contract,
            side: row.short_long,
            units: row.units,
            price: row.price,
        }
    }
}

/// Parse a history document from its JSON text.
pub fn parse_history(json: &str) -> Result<Vec<RawRecord>> {
    let document: HistoryDocument = serde_json::from_str(json)?;
    Ok(document.result.orders.into_iter().map(Into::into).collect())
}

/// Read a history document from a file.
pub fn read_history(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let records = parse_history(&text)?;
    info!(path = %path.display(), records = records.len(), "read trade history");
    Ok(records)
}
