//! Trade record normalization.
//!
//! Converts heterogeneous raw input rows into canonical [`Order`] values:
//! dates reformatted to `YYYY-MM-DD`, free-text side indicators mapped to
//! long/short, fractional unit counts truncated, locale decimal separators
//! tolerated in prices. Bad records are collected per-record instead of
//! aborting the batch, unless fail-fast is configured.

use crate::record::RawRecord;
use chrono::NaiveDate;
use recon_core::config::NormalizerConfig;
use recon_core::{Error, Order, RecordError, Result, Side};
use tracing::debug;

/// Result of normalizing a batch: the orders that parsed plus the per-record
/// errors for those that did not.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Successfully normalized orders, in input order.
    pub orders: Vec<Order>,
    /// Rejected records with their input index and reason.
    pub errors: Vec<RecordError>,
}

impl NormalizedBatch {
    /// True if every record in the batch parsed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Normalizer for raw trade records.
pub struct Normalizer {
    /// Lowercased indicators meaning "bought to open".
    long_indicators: Vec<String>,
    /// chrono format for dates not already in `YYYY-MM-DD` shape.
    date_format: String,
    /// Abort on the first bad record.
    fail_fast: bool,
}

impl Normalizer {
    /// Build a normalizer from configuration. Fails if the side mapping is
    /// empty, since that would classify every record as short.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            long_indicators: config
                .long_indicators
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            date_format: config.date_format.clone(),
            fail_fast: config.fail_fast,
        })
    }

    /// Normalize a batch of raw records.
    ///
    /// In the default mode every record is attempted and failures are
    /// collected in [`NormalizedBatch::errors`]; in fail-fast mode the first
    /// failure is returned as an [`Error::Parse`].
    pub fn normalize(&self, records: &[RawRecord]) -> Result<NormalizedBatch> {
        let mut batch = NormalizedBatch::default();

        for (index, record) in records.iter().enumerate() {
            match self.normalize_record(record) {
                Ok(order) => batch.orders.push(order),
                Err(reason) => {
                    let err = RecordError::new(index, reason);
                    if self.fail_fast {
                        return Err(Error::from(err));
                    }
                    batch.errors.push(err);
                }
            }
        }

        debug!(
            records = records.len(),
            orders = batch.orders.len(),
            rejected = batch.errors.len(),
            "normalized trade records"
        );
        Ok(batch)
    }

    /// Normalize one record; the error is the rejection reason.
    fn normalize_record(&self, record: &RawRecord) -> std::result::Result<Order, String> {
        let date = self.normalize_date(&record.date)?;
        let side = self.map_side(&record.side);
        let units = truncate_units(record.units)?;
        let price = parse_price(&record.price)?;
        Ok(Order::new(date, record.contract.clone(), side, units, price))
    }

    /// `YYYY-MM-DD` prefixes are taken verbatim; anything else goes through
    /// the configured source date format.
    fn normalize_date(&self, raw: &str) -> std::result::Result<String, String> {
        let raw = raw.trim();
        if has_iso_date_prefix(raw) {
            return Ok(raw[..10].to_string());
        }
        let parsed = NaiveDate::parse_from_str(raw, &self.date_format)
            .map_err(|e| format!("unparseable date {raw:?}: {e}"))?;
        Ok(parsed.format("%Y-%m-%d").to_string())
    }

    /// Case-insensitive side mapping: configured "buy" indicators map to
    /// long, everything else to short.
    fn map_side(&self, raw: &str) -> Side {
        let lowered = raw.trim().to_lowercase();
        if self.long_indicators.iter().any(|ind| *ind == lowered) {
            Side::Long
        } else {
            Side::Short
        }
    }
}

/// Check whether the first 10 characters already look like `YYYY-MM-DD`.
fn has_iso_date_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() < 10 {
        return false;
    }
    bytes[..10].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Truncate a possibly-fractional quantity toward zero. An order must end up
/// with at least one unit.
fn truncate_units(raw: f64) -> std::result::Result<u32, String> {
    if !raw.is_finite() {
        return Err(format!("unparseable unit count {raw:?}"));
    }
    let truncated = raw.trunc();
    if truncated < 1.0 || truncated > u32::MAX as f64 {
        return Err(format!("unit count {raw} out of range"));
    }
    Ok(truncated as u32)
}

/// Parse a decimal price, tolerating a comma decimal separator.
fn parse_price(raw: &str) -> std::result::Result<f64, String> {
    let price = raw
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| format!("unparseable price {raw:?}: {e}"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("price {raw:?} must be finite and non-negative"));
    }
    Ok(price)
}
