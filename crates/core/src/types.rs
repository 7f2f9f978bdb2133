//! Core data types for the trade reconciliation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed contract multiplier used by the reference venue: one unit of a
/// contract controls 100 times the quoted price.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Direction of an opening execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bought to open.
    Long,
    /// Sold to open.
    Short,
}

impl Side {
    /// Get the sign: +1 for long, -1 for short.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }

    /// Short uppercase label used in reports and CSV exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Long => "LONG",
            Side::Short => "SHORT",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directional position taken on one contract at one price.
///
/// `date` is informational for matching and serves as a grouping key for
/// summaries. `matched_units` is mutated only by the spread matcher; it never
/// decreases and never exceeds `units`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Contract identifier (e.g. a futures contract code).
    pub contract: String,
    /// Position direction.
    pub side: Side,
    /// Unit quantity, > 0 after normalization.
    pub units: u32,
    /// Price per unit, non-negative and finite.
    pub price: f64,
    /// Units already closed against the opposite side.
    pub matched_units: u32,
}

impl Order {
    /// Create a fresh, unmatched order.
    pub fn new(
        date: impl Into<String>,
        contract: impl Into<String>,
        side: Side,
        units: u32,
        price: f64,
    ) -> Self {
        Self {
            date: date.into(),
            contract: contract.into(),
            side,
            units,
            price,
            matched_units: 0,
        }
    }

    /// Units not yet matched against the opposite side.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.units - self.matched_units
    }

    /// Notional value of the full order: `units * price * multiplier`.
    #[inline]
    pub fn notional(&self, multiplier: f64) -> f64 {
        self.units as f64 * self.price * multiplier
    }
}

/// Grouping key for keyed summaries.
///
/// The derived `Ord` compares `date` first, then `contract`, which gives the
/// lexicographic `(date, contract)` iteration order reports rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SummaryKey {
    pub date: String,
    pub contract: String,
}

impl SummaryKey {
    pub fn new(date: impl Into<String>, contract: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            contract: contract.into(),
        }
    }
}

impl fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.date, self.contract)
    }
}

/// Additive accumulator of per-day/per-contract (or global) trading totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Units sold to open.
    pub total_short: u32,
    /// Units bought to open.
    pub total_long: u32,
    /// Units regardless of side.
    pub total_units: f64,
    /// Notional volume: sum of `units * price * multiplier`.
    pub total_volume: f64,
    /// Commission charged on notional volume.
    pub total_commission: f64,
}

impl Summary {
    /// Fold one order into the accumulator.
    pub fn add_order(&mut self, order: &Order, commission_rate: f64, multiplier: f64) {
        let units = order.units;
        let volume = order.notional(multiplier);
        let commission = volume * commission_rate;

        match order.side {
            Side::Short => self.total_short += units,
            Side::Long => self.total_long += units,
        }

        self.total_units += units as f64;
        self.total_volume += volume;
        self.total_commission += commission;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_remaining() {
        let mut order = Order::new("2025-05-02", "F_XYZ0625", Side::Long, 10, 12.5);
        assert_eq!(order.remaining(), 10);
        order.matched_units = 4;
        assert_eq!(order.remaining(), 6);
    }

    #[test]
    fn test_notional() {
        let order = Order::new("2025-05-02", "F_XYZ0625", Side::Short, 3, 20.0);
        assert_abs_diff_eq!(order.notional(100.0), 6000.0);
    }

    #[test]
    fn test_summary_add_order() {
        let mut summary = Summary::default();
        let rate = 1.478 / 10_000.0;

        summary.add_order(&Order::new("d", "c", Side::Long, 2, 10.0), rate, 100.0);
        summary.add_order(&Order::new("d", "c", Side::Short, 3, 20.0), rate, 100.0);

        assert_eq!(summary.total_long, 2);
        assert_eq!(summary.total_short, 3);
        assert_abs_diff_eq!(summary.total_units, 5.0);
        assert_abs_diff_eq!(summary.total_volume, 8000.0);
        assert_abs_diff_eq!(summary.total_commission, 8000.0 * rate, epsilon = 1e-10);
    }

    #[test]
    fn test_summary_key_ordering() {
        let a = SummaryKey::new("2025-05-01", "F_B");
        let b = SummaryKey::new("2025-05-02", "F_A");
        let c = SummaryKey::new("2025-05-02", "F_B");
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_side_sign() {
        assert_eq!(Side::Long.sign(), 1.0);
        assert_eq!(Side::Short.sign(), -1.0);
    }
}
