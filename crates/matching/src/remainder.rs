//! Unmatched remainder statistics.
//!
//! After matching, each contract side may carry orders with units left over.
//! This module totals those units and computes their volume-weighted average
//! price. A fully matched side has no average price; that case is reported
//! as a `None` sentinel rather than dividing by zero.

use recon_core::{Order, Side};
use serde::{Deserialize, Serialize};

use crate::book::PoolBook;

/// Totals for the unmatched portion of one contract side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemainderStats {
    /// Sum of `remaining()` over orders with units left.
    pub units: u32,
    /// Volume-weighted average price of the remaining units; `None` when no
    /// units remain.
    pub avg_price: Option<f64>,
}

impl RemainderStats {
    /// Compute remainder totals over a slice of orders.
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut units: u32 = 0;
        let mut amount: f64 = 0.0;
        for order in orders {
            let remaining = order.remaining();
            if remaining > 0 {
                units += remaining;
                amount += remaining as f64 * order.price;
            }
        }
        let avg_price = if units > 0 {
            Some(amount / units as f64)
        } else {
            None
        };
        Self { units, avg_price }
    }

    /// Compute remainder totals for one side of one contract in a book.
    pub fn from_book(book: &PoolBook, contract: &str, side: Side) -> Self {
        Self::from_orders(&book.side_orders(contract, side))
    }
}
