//! The greedy spread matcher.
//!
//! For each contract, longs and shorts are sorted ascending by
//! `(price, units)` and every long scans the shorts in order, closing
//! quantity against the first short whose spread (`short.price - long.price`)
//! falls strictly inside the configured open window. The algorithm commits to
//! the first eligible short and never backtracks, so it is deterministic but
//! not globally optimal; replacing it with an optimal assignment would change
//! reported profit and is an explicit product decision, not a cleanup.

use recon_core::{Config, Error, Order, Result, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::book::PoolBook;
use crate::remainder::RemainderStats;

/// Match results for one contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractMatch {
    /// Contract identifier.
    pub contract: String,
    /// Units closed long-against-short for this contract.
    pub matched_units: u32,
    /// Profit accrued on matched quantity: Σ qty · spread · multiplier.
    pub profit: f64,
    /// Remainder totals for the long side.
    pub long_remainder: RemainderStats,
    /// Remainder totals for the short side.
    pub short_remainder: RemainderStats,
    /// Long orders with units left, in sorted pool order.
    pub unmatched_longs: Vec<Order>,
    /// Short orders with units left, in sorted pool order.
    pub unmatched_shorts: Vec<Order>,
}

/// Full match report across contracts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    /// Per-contract results, in sorted contract order.
    pub contracts: Vec<ContractMatch>,
    /// Total units matched across contracts.
    pub matched_units: u64,
    /// Total profit across contracts.
    pub profit: f64,
}

/// Greedy long/short spread matcher.
pub struct SpreadMatcher {
    margin_min: f64,
    margin_max: f64,
    multiplier: f64,
}

impl SpreadMatcher {
    /// Create a matcher. The window is an open interval; `margin_min` must
    /// lie strictly below `margin_max`.
    pub fn new(margin_min: f64, margin_max: f64, multiplier: f64) -> Result<Self> {
        if margin_min >= margin_max {
            return Err(Error::config(format!(
                "margin window is empty: min {margin_min} must be below max {margin_max}"
            )));
        }
        Ok(Self {
            margin_min,
            margin_max,
            multiplier,
        })
    }

    /// Create a matcher from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.margin.min,
            config.margin.max,
            config.contract_multiplier,
        )
    }

    /// Run the matcher over every contract in the book, mutating fill state
    /// in place and reporting per-contract totals and remainders.
    pub fn run(&self, book: &mut PoolBook) -> MatchReport {
        book.sort_pools();

        let contracts: Vec<String> = book.contracts().map(str::to_string).collect();
        let mut report = MatchReport::default();

        for contract in contracts {
            let result = self.match_contract(book, &contract);
            report.matched_units += result.matched_units as u64;
            report.profit += result.profit;
            report.contracts.push(result);
        }

        report
    }

    /// Greedy pass over one contract's pools.
    fn match_contract(&self, book: &mut PoolBook, contract: &str) -> ContractMatch {
        let pools = book.pools(contract).cloned().unwrap_or_default();
        let mut matched_units: u32 = 0;
        let mut profit: f64 = 0.0;

        for &b in &pools.longs {
            for &s in &pools.shorts {
                if book.order(s).remaining() == 0 {
                    continue;
                }

                let spread = book.order(s).price - book.order(b).price;
                if spread > self.margin_min && spread < self.margin_max {
                    let quantity = book.order(b).remaining().min(book.order(s).remaining());
                    book.order_mut(b).matched_units += quantity;
                    book.order_mut(s).matched_units += quantity;

                    matched_units += quantity;
                    profit += quantity as f64 * spread * self.multiplier;

                    if book.order(b).remaining() == 0 {
                        break;
                    }
                }
            }
        }

        let long_remainder = RemainderStats::from_book(book, contract, Side::Long);
        let short_remainder = RemainderStats::from_book(book, contract, Side::Short);

        debug!(
            contract,
            matched_units,
            profit,
            long_remaining = long_remainder.units,
            short_remaining = short_remainder.units,
            "matched contract"
        );

        ContractMatch {
            contract: contract.to_string(),
            matched_units,
            profit,
            long_remainder,
            short_remainder,
            unmatched_longs: unmatched(book, contract, Side::Long),
            unmatched_shorts: unmatched(book, contract, Side::Short),
        }
    }
}

fn unmatched(book: &PoolBook, contract: &str, side: Side) -> Vec<Order> {
    book.side_orders(contract, side)
        .into_iter()
        .filter(|o| o.remaining() > 0)
        .collect()
}
