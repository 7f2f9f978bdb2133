//! The order arena and per-contract long/short pools.
//!
//! The matcher mutates partial-fill state on orders that are visible through
//! both the long-pool and short-pool views. Instead of sharing owned objects
//! between two maps, [`PoolBook`] owns every order in one arena and the pools
//! hold index lists into it, so a fill recorded through one view is visible
//! through the other by construction.

use recon_core::{Order, Side};
use std::collections::BTreeMap;

/// Long/short index lists for one contract. Indexes point into the book's
/// arena.
#[derive(Debug, Clone, Default)]
pub struct ContractPools {
    /// Arena indexes of long orders.
    pub longs: Vec<usize>,
    /// Arena indexes of short orders.
    pub shorts: Vec<usize>,
}

/// Arena of orders partitioned into per-contract long/short pools.
#[derive(Debug, Clone, Default)]
pub struct PoolBook {
    arena: Vec<Order>,
    pools: BTreeMap<String, ContractPools>,
}

impl PoolBook {
    /// Build a book from a sequence of orders, partitioning by contract and
    /// side in input order.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let mut book = PoolBook::default();
        for order in orders {
            let idx = book.arena.len();
            let pools = book.pools.entry(order.contract.clone()).or_default();
            match order.side {
                Side::Long => pools.longs.push(idx),
                Side::Short => pools.shorts.push(idx),
            }
            book.arena.push(order);
        }
        book
    }

    /// Contracts present in either pool, in sorted order.
    pub fn contracts(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    /// Pools for one contract.
    pub fn pools(&self, contract: &str) -> Option<&ContractPools> {
        self.pools.get(contract)
    }

    /// All orders in the arena.
    pub fn orders(&self) -> &[Order] {
        &self.arena
    }

    /// One order by arena index.
    pub fn order(&self, idx: usize) -> &Order {
        &self.arena[idx]
    }

    /// Mutable access for the matcher's fill bookkeeping.
    pub(crate) fn order_mut(&mut self, idx: usize) -> &mut Order {
        &mut self.arena[idx]
    }

    /// Clone the orders of one side of one contract, in pool order.
    pub fn side_orders(&self, contract: &str, side: Side) -> Vec<Order> {
        match self.pools.get(contract) {
            Some(pools) => {
                let indexes = match side {
                    Side::Long => &pools.longs,
                    Side::Short => &pools.shorts,
                };
                indexes.iter().map(|&i| self.arena[i].clone()).collect()
            }
            None => Vec::new(),
        }
    }

    /// Sort both pools of every contract ascending by `(price, units)`.
    /// Price is the primary key and unit count the tie-break, so the matcher
    /// consumes the cheapest available order on each side first.
    pub(crate) fn sort_pools(&mut self) {
        let arena = &self.arena;
        for pools in self.pools.values_mut() {
            let by_price_then_units = |&a: &usize, &b: &usize| {
                let oa = &arena[a];
                let ob = &arena[b];
                ordered_float::OrderedFloat(oa.price)
                    .cmp(&ordered_float::OrderedFloat(ob.price))
                    .then(oa.units.cmp(&ob.units))
            };
            pools.longs.sort_by(by_price_then_units);
            pools.shorts.sort_by(by_price_then_units);
        }
    }
}
