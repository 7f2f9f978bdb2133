//! Daily and cumulative trading summaries.
//!
//! Accumulates per-`(date, contract)` and global totals over a sequence of
//! orders. Which sequence that is (filtered raw executions or aggregated
//! lots) is the caller's configured choice; the builder itself is a total
//! function over well-formed orders.

use recon_core::{Order, Summary, SummaryKey};
use std::collections::BTreeMap;

/// Summaries produced by one pass over an order sequence.
#[derive(Debug, Clone, Default)]
pub struct SummaryReport {
    /// Per-`(date, contract)` summaries. BTreeMap iteration gives the
    /// lexicographic key order reports rely on.
    pub daily: BTreeMap<SummaryKey, Summary>,
    /// Global totals across every order.
    pub total: Summary,
}

/// Builder of daily and cumulative summaries.
pub struct SummaryBuilder {
    commission_rate: f64,
    multiplier: f64,
}

impl SummaryBuilder {
    /// Create a builder with the given commission rate and contract
    /// multiplier.
    pub fn new(commission_rate: f64, multiplier: f64) -> Self {
        Self {
            commission_rate,
            multiplier,
        }
    }

    /// Accumulate every order into keyed and global summaries.
    pub fn build(&self, orders: &[Order]) -> SummaryReport {
        let mut report = SummaryReport::default();

        for order in orders {
            let key = SummaryKey::new(order.date.clone(), order.contract.clone());
            report
                .daily
                .entry(key)
                .or_default()
                .add_order(order, self.commission_rate, self.multiplier);
            report
                .total
                .add_order(order, self.commission_rate, self.multiplier);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use recon_core::Side;

    fn order(date: &str, contract: &str, side: Side, units: u32, price: f64) -> Order {
        Order::new(date, contract, side, units, price)
    }

    #[test]
    fn test_reference_accumulation() {
        let builder = SummaryBuilder::new(0.0001478, 100.0);
        let report = builder.build(&[
            order("2025-05-01", "F_A", Side::Long, 2, 10.0),
            order("2025-05-01", "F_A", Side::Short, 3, 20.0),
        ]);

        assert_abs_diff_eq!(report.total.total_units, 5.0);
        assert_abs_diff_eq!(report.total.total_volume, 8000.0);
        assert_abs_diff_eq!(report.total.total_commission, 1.1824, epsilon = 1e-9);
        assert_eq!(report.total.total_long, 2);
        assert_eq!(report.total.total_short, 3);
    }

    #[test]
    fn test_keyed_by_date_and_contract() {
        let builder = SummaryBuilder::new(0.0001478, 100.0);
        let report = builder.build(&[
            order("2025-05-01", "F_A", Side::Long, 1, 10.0),
            order("2025-05-01", "F_B", Side::Long, 2, 10.0),
            order("2025-05-02", "F_A", Side::Long, 4, 10.0),
        ]);

        assert_eq!(report.daily.len(), 3);
        let first = report
            .daily
            .get(&SummaryKey::new("2025-05-01", "F_A"))
            .unwrap();
        assert_eq!(first.total_long, 1);
        assert_abs_diff_eq!(report.total.total_units, 7.0);
    }

    #[test]
    fn test_lexicographic_iteration() {
        let builder = SummaryBuilder::new(0.0001478, 100.0);
        let report = builder.build(&[
            order("2025-05-02", "F_A", Side::Long, 1, 10.0),
            order("2025-05-01", "F_B", Side::Long, 1, 10.0),
            order("2025-05-01", "F_A", Side::Long, 1, 10.0),
        ]);

        let keys: Vec<String> = report.daily.keys().map(|k| k.to_string()).collect();
        assert_eq!(
            keys,
            vec!["2025-05-01|F_A", "2025-05-01|F_B", "2025-05-02|F_A"]
        );
    }

    #[test]
    fn test_empty_input() {
        let builder = SummaryBuilder::new(0.0001478, 100.0);
        let report = builder.build(&[]);
        assert!(report.daily.is_empty());
        assert_abs_diff_eq!(report.total.total_units, 0.0);
    }
}
