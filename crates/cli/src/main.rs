//! Batch reconciliation runner.
//!
//! Usage: `trade-recon <history.json> [config.json]`
//!
//! Reads a trade-history document, normalizes and filters the records,
//! builds daily and cumulative summaries, runs the spread matcher over the
//! (optionally aggregated) orders and prints the reports. Optionally writes
//! the normalized orders to CSV.

use anyhow::{bail, Context, Result};
use recon_core::{Config, SummarySource};
use recon_ingestion::{filter_with_config, read_history, Normalizer};
use recon_matching::{aggregate_orders, PoolBook, SpreadMatcher};
use recon_report::{
    export_orders_csv, render_cumulative_summary, render_daily_summary, render_match_report,
    SummaryBuilder,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (history_path, config_path) = match args.as_slice() {
        [history] => (history.clone(), None),
        [history, config] => (history.clone(), Some(config.clone())),
        _ => bail!("usage: trade-recon <history.json> [config.json]"),
    };

    let config = match config_path {
        Some(path) => Config::from_json_file(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => Config::default(),
    };
    config.validate().context("invalid configuration")?;

    let records = read_history(&history_path)
        .with_context(|| format!("failed to read trade history from {history_path}"))?;

    let normalizer = Normalizer::from_config(&config.normalizer)?;
    let batch = normalizer.normalize(&records)?;
    for err in &batch.errors {
        warn!(index = err.index, reason = %err.reason, "rejected trade record");
    }
    info!(
        orders = batch.orders.len(),
        rejected = batch.errors.len(),
        "normalized trade history"
    );

    let filtered = filter_with_config(&batch.orders, &config.filter);

    if config.export.write_csv {
        export_orders_csv(&config.export.csv_path, &filtered)
            .with_context(|| format!("failed to write CSV to {}", config.export.csv_path))?;
    }

    let aggregated = if config.aggregate_orders {
        aggregate_orders(&filtered)
    } else {
        filtered.clone()
    };

    let summary_input = match config.summary_source {
        SummarySource::Raw => &filtered,
        SummarySource::Aggregated => &aggregated,
    };
    let summaries =
        SummaryBuilder::new(config.commission_rate, config.contract_multiplier).build(summary_input);

    println!("{}", render_daily_summary(&summaries));
    println!("{}", render_cumulative_summary(&summaries.total));

    let matcher = SpreadMatcher::from_config(&config)?;
    let mut book = PoolBook::from_orders(aggregated);
    let match_report = matcher.run(&mut book);

    println!("{}", render_match_report(&match_report));

    Ok(())
}
