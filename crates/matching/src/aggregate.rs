//! Order aggregation.
//!
//! Merges orders sharing `(contract, side, price)` into one net position
//! with summed units, keeping first-seen order and the first occurrence's
//! date. Many raw executions are the same economic position split across
//! multiple fills at an identical price; collapsing them shrinks the
//! matching search space and makes the price-only tie-break meaningful.

use ordered_float::OrderedFloat;
use recon_core::{Order, Side};
use std::collections::HashMap;

#[derive(PartialEq, Eq, Hash)]
struct AggKey {
    contract: String,
    side: Side,
    price: OrderedFloat<f64>,
}

/// Collapse same-(contract, side, price) orders into single net positions.
///
/// `matched_units` starts at 0 in every aggregate: inputs at this stage are
/// freshly normalized and never pre-matched. Idempotent.
pub fn aggregate_orders(orders: &[Order]) -> Vec<Order> {
    let mut index: HashMap<AggKey, usize> = HashMap::with_capacity(orders.len());
    let mut aggregated: Vec<Order> = Vec::new();

    for order in orders {
        let key = AggKey {
            contract: order.contract.clone(),
            side: order.side,
            price: OrderedFloat(order.price),
        };
        match index.get(&key) {
            Some(&slot) => {
                aggregated[slot].units += order.units;
            }
            None => {
                index.insert(key, aggregated.len());
                aggregated.push(Order::new(
                    order.date.clone(),
                    order.contract.clone(),
                    order.side,
                    order.units,
                    order.price,
                ));
            }
        }
    }

    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(date: &str, contract: &str, side: Side, units: u32, price: f64) -> Order {
        Order::new(date, contract, side, units, price)
    }

    #[test]
    fn test_same_key_merged() {
        let orders = vec![
            order("2025-05-01", "F_A", Side::Long, 3, 10.0),
            order("2025-05-02", "F_A", Side::Long, 4, 10.0),
        ];
        let agg = aggregate_orders(&orders);
        assert_eq!(agg.len(), 1);
        assert_eq!(agg[0].units, 7);
        // Date comes from the first occurrence.
        assert_eq!(agg[0].date, "2025-05-01");
        assert_eq!(agg[0].matched_units, 0);
    }

    #[test]
    fn test_distinct_keys_kept_separate() {
        let orders = vec![
            order("2025-05-01", "F_A", Side::Long, 3, 10.0),
            order("2025-05-01", "F_A", Side::Short, 3, 10.0),
            order("2025-05-01", "F_A", Side::Long, 3, 10.5),
            order("2025-05-01", "F_B", Side::Long, 3, 10.0),
        ];
        let agg = aggregate_orders(&orders);
        assert_eq!(agg.len(), 4);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let orders = vec![
            order("2025-05-01", "F_A", Side::Long, 1, 11.0),
            order("2025-05-01", "F_A", Side::Long, 1, 10.0),
            order("2025-05-01", "F_A", Side::Long, 1, 11.0),
        ];
        let agg = aggregate_orders(&orders);
        assert_eq!(agg.len(), 2);
        assert!((agg[0].price - 11.0).abs() < 1e-12);
        assert_eq!(agg[0].units, 2);
        assert!((agg[1].price - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let orders = vec![
            order("2025-05-01", "F_A", Side::Long, 3, 10.0),
            order("2025-05-02", "F_A", Side::Long, 4, 10.0),
            order("2025-05-01", "F_A", Side::Short, 2, 10.2),
        ];
        let once = aggregate_orders(&orders);
        let twice = aggregate_orders(&once);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.units, b.units);
            assert_eq!(a.date, b.date);
            assert_eq!(a.contract, b.contract);
            assert_eq!(a.side, b.side);
            assert!((a.price - b.price).abs() < 1e-12);
        }
    }
}
