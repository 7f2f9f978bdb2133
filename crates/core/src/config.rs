//! Configuration structures for the trade reconciliation pipeline.

use crate::error::{Error, Result};
use crate::types::CONTRACT_MULTIPLIER;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for a reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spread window for the matcher.
    pub margin: MarginConfig,
    /// Fractional commission charged on notional volume.
    pub commission_rate: f64,
    /// Contract multiplier applied to `units * price`.
    pub contract_multiplier: f64,
    /// Whether to collapse same-(contract, side, price) orders before matching.
    pub aggregate_orders: bool,
    /// Which order sequence feeds the summary builder.
    pub summary_source: SummarySource,
    /// Inclusion filters applied after normalization.
    pub filter: FilterConfig,
    /// Normalizer configuration.
    pub normalizer: NormalizerConfig,
    /// CSV export configuration.
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: MarginConfig::default(),
            commission_rate: 1.478 / 10_000.0,
            contract_multiplier: CONTRACT_MULTIPLIER,
            aggregate_orders: true,
            summary_source: SummarySource::Raw,
            filter: FilterConfig::default(),
            normalizer: NormalizerConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Validate the configuration. Fatal problems are reported before any
    /// matching runs.
    pub fn validate(&self) -> Result<()> {
        self.margin.validate()?;
        if self.commission_rate < 0.0 {
            return Err(Error::config(format!(
                "commission_rate must be non-negative, got {}",
                self.commission_rate
            )));
        }
        if self.contract_multiplier <= 0.0 {
            return Err(Error::config(format!(
                "contract_multiplier must be positive, got {}",
                self.contract_multiplier
            )));
        }
        self.normalizer.validate()?;
        Ok(())
    }
}

/// Spread window configuration. A long/short pair is eligible for matching
/// when `min < short.price - long.price < max` (strict open interval).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    /// Lower spread bound, exclusive.
    pub min: f64,
    /// Upper spread bound, exclusive.
    pub max: f64,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            min: 0.139,
            max: 0.171,
        }
    }
}

impl MarginConfig {
    /// Reject windows that can never admit a spread.
    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(Error::config(format!(
                "margin window is empty: min {} must be below max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Which order sequence feeds the summary builder.
///
/// The reference behavior accumulates summaries from the filtered raw
/// sequence, so per-day volume reflects actual executions rather than
/// aggregated lots. The choice is explicit here instead of implied by
/// pipeline wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    /// Filtered, pre-aggregation orders (reference behavior).
    Raw,
    /// Post-aggregation orders.
    Aggregated,
}

/// Inclusion filters. An empty list means "accept all" for that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Contract identifiers to retain.
    pub contracts: Vec<String>,
    /// Dates (`YYYY-MM-DD`) to retain.
    pub dates: Vec<String>,
}

/// Normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Side indicators meaning "bought to open", matched case-insensitively.
    /// Anything not in this list maps to short.
    pub long_indicators: Vec<String>,
    /// chrono format string used for dates that are not already `YYYY-MM-DD`.
    pub date_format: String,
    /// Abort on the first bad record instead of collecting errors.
    pub fail_fast: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            long_indicators: vec![
                "UZUN".to_string(),
                "LONG".to_string(),
                "ALIŞ".to_string(),
                "BUY".to_string(),
            ],
            date_format: "%d/%m/%Y".to_string(),
            fail_fast: false,
        }
    }
}

impl NormalizerConfig {
    /// An empty side mapping would silently classify every record as short.
    pub fn validate(&self) -> Result<()> {
        if self.long_indicators.is_empty() {
            return Err(Error::config("long_indicators must not be empty"));
        }
        Ok(())
    }
}

/// CSV export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Whether to write the normalized orders to CSV.
    pub write_csv: bool,
    /// Output path for the CSV export.
    pub csv_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            write_csv: false,
            csv_path: "output.csv".to_string(),
        }
    }
}
