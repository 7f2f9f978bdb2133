//! Input ingestion and normalization for the reconciliation pipeline.
//!
//! This crate handles:
//! - The flat raw-record model shared by all input origins
//! - Trade record normalization (dates, sides, units, prices)
//! - Contract/date inclusion filtering
//! - The JSON trade-history reader adapter

pub mod filter;
pub mod json;
pub mod normalizer;
pub mod record;

pub use filter::{filter_orders, filter_with_config};
pub use json::{parse_history, read_history};
pub use normalizer::{NormalizedBatch, Normalizer};
pub use record::RawRecord;
