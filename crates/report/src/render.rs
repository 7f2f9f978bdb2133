//! Console report rendering.
//!
//! Pure string builders for the daily summary table, the cumulative summary
//! block and the per-contract match report. Libraries here never print; the
//! binary decides where the text goes.

use crate::summary::SummaryReport;
use recon_core::{Order, Summary};
use recon_matching::{ContractMatch, MatchReport, RemainderStats};
use std::fmt::Write;

/// Render the per-day, per-contract summary table.
pub fn render_daily_summary(report: &SummaryReport) -> String {
    let mut out = String::new();
    writeln!(out, "Daily summary:").unwrap();
    writeln!(
        out,
        "{:<12} | {:<15} | {:<7} | {:<7} | {:<10} | {:>15} | {:>15}",
        "Date", "Contract", "Short", "Long", "Units", "Volume", "Commission"
    )
    .unwrap();

    for (key, summary) in &report.daily {
        writeln!(
            out,
            "{:<12} | {:<15} | {:<7} | {:<7} | {:<10} | {:>15.2} | {:>15.2}",
            key.date,
            key.contract,
            summary.total_short,
            summary.total_long,
            summary.total_units as u64,
            summary.total_volume,
            summary.total_commission
        )
        .unwrap();
    }

    out
}

/// Render the cumulative summary block.
pub fn render_cumulative_summary(total: &Summary) -> String {
    let mut out = String::new();
    writeln!(out, "Cumulative summary:").unwrap();
    writeln!(out, "{:<18}: {}", "Total short", total.total_short).unwrap();
    writeln!(out, "{:<18}: {}", "Total long", total.total_long).unwrap();
    writeln!(out, "{:<18}: {}", "Total units", total.total_units as u64).unwrap();
    writeln!(out, "{:<18}: {:.2}", "Total volume", total.total_volume).unwrap();
    writeln!(out, "{:<18}: {:.2}", "Total commission", total.total_commission).unwrap();
    out
}

/// Render the full match report, one block per contract.
pub fn render_match_report(report: &MatchReport) -> String {
    let mut out = String::new();
    for contract in &report.contracts {
        render_contract_match(&mut out, contract);
        out.push('\n');
    }
    writeln!(out, "Total matched units : {}", report.matched_units).unwrap();
    writeln!(out, "Total profit        : {:.2}", report.profit).unwrap();
    out
}

fn render_contract_match(out: &mut String, result: &ContractMatch) {
    writeln!(out, "{} matched units : {}", result.contract, result.matched_units).unwrap();
    writeln!(out, "{} profit        : {:.2}", result.contract, result.profit).unwrap();

    render_remainder_side(
        out,
        &result.contract,
        "long",
        &result.unmatched_longs,
        &result.long_remainder,
    );
    render_remainder_side(
        out,
        &result.contract,
        "short",
        &result.unmatched_shorts,
        &result.short_remainder,
    );
}

fn render_remainder_side(
    out: &mut String,
    contract: &str,
    label: &str,
    orders: &[Order],
    stats: &RemainderStats,
) {
    writeln!(out, "{contract} unmatched {label} orders:").unwrap();
    for order in orders {
        writeln!(
            out,
            "- side: {} | units: {}/{} | price: {:.2}",
            order.side,
            order.remaining(),
            order.units,
            order.price
        )
        .unwrap();
    }
    match stats.avg_price {
        Some(avg) => writeln!(
            out,
            "{contract} unmatched {label} => units: {}, average: {:.2}",
            stats.units, avg
        )
        .unwrap(),
        None => writeln!(out, "{contract} unmatched {label} => no remainder").unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::SummaryBuilder;
    use recon_core::{Order, Side};
    use recon_matching::{PoolBook, SpreadMatcher};

    fn order(contract: &str, side: Side, units: u32, price: f64) -> Order {
        Order::new("2025-05-01", contract, side, units, price)
    }

    #[test]
    fn test_daily_summary_layout() {
        let builder = SummaryBuilder::new(0.0001478, 100.0);
        let report = builder.build(&[order("F_A", Side::Long, 2, 10.0)]);
        let text = render_daily_summary(&report);

        assert!(text.contains("Daily summary:"));
        assert!(text.contains("2025-05-01"));
        assert!(text.contains("F_A"));
        assert!(text.contains("2000.00"));
    }

    #[test]
    fn test_cumulative_summary_layout() {
        let builder = SummaryBuilder::new(0.0001478, 100.0);
        let report = builder.build(&[
            order("F_A", Side::Long, 2, 10.0),
            order("F_A", Side::Short, 3, 20.0),
        ]);
        let text = render_cumulative_summary(&report.total);

        assert!(text.contains("Total short       : 3"));
        assert!(text.contains("Total long        : 2"));
        assert!(text.contains("Total units       : 5"));
        assert!(text.contains("8000.00"));
    }

    #[test]
    fn test_match_report_no_remainder_sentinel() {
        let mut book = PoolBook::from_orders(vec![
            order("F_A", Side::Long, 5, 10.0),
            order("F_A", Side::Short, 5, 10.15),
        ]);
        let matcher = SpreadMatcher::new(0.139, 0.171, 100.0).unwrap();
        let report = matcher.run(&mut book);
        let text = render_match_report(&report);

        assert!(text.contains("F_A matched units : 5"));
        assert!(text.contains("F_A profit        : 75.00"));
        assert!(text.contains("F_A unmatched long => no remainder"));
        assert!(text.contains("F_A unmatched short => no remainder"));
        assert!(text.contains("Total matched units : 5"));
    }

    #[test]
    fn test_match_report_remainder_lines() {
        let mut book = PoolBook::from_orders(vec![
            order("F_A", Side::Long, 8, 10.0),
            order("F_A", Side::Short, 5, 10.15),
        ]);
        let matcher = SpreadMatcher::new(0.139, 0.171, 100.0).unwrap();
        let report = matcher.run(&mut book);
        let text = render_match_report(&report);

        assert!(text.contains("- side: LONG | units: 3/8 | price: 10.00"));
        assert!(text.contains("F_A unmatched long => units: 3, average: 10.00"));
    }
}
