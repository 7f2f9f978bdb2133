//! Summaries, report rendering and export for the reconciliation pipeline.
//!
//! This crate provides:
//! - Daily and cumulative summary accumulation
//! - Console rendering of summaries and match reports
//! - CSV export of normalized orders

pub mod csv;
pub mod render;
pub mod summary;

pub use self::csv::{export_orders_csv, write_orders_csv};
pub use render::{render_cumulative_summary, render_daily_summary, render_match_report};
pub use summary::{SummaryBuilder, SummaryReport};
