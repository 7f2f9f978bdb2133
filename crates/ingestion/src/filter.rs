//! Order inclusion filtering.
//!
//! Retains orders whose contract and date pass caller-supplied inclusion
//! sets. An empty set means "accept all" for that dimension. Pure; preserves
//! relative order.

use recon_core::config::FilterConfig;
use recon_core::Order;
use std::collections::HashSet;

/// Filter orders by allowed contracts and allowed dates.
pub fn filter_orders(
    orders: &[Order],
    allowed_contracts: &HashSet<String>,
    allowed_dates: &HashSet<String>,
) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| allowed_contracts.is_empty() || allowed_contracts.contains(&o.contract))
        .filter(|o| allowed_dates.is_empty() || allowed_dates.contains(&o.date))
        .cloned()
        .collect()
}

/// Filter using the inclusion lists from configuration.
pub fn filter_with_config(orders: &[Order], config: &FilterConfig) -> Vec<Order> {
    let contracts: HashSet<String> = config.contracts.iter().cloned().collect();
    let dates: HashSet<String> = config.dates.iter().cloned().collect();
    filter_orders(orders, &contracts, &dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_core::Side;

    fn order(date: &str, contract: &str) -> Order {
        Order::new(date, contract, Side::Long, 1, 10.0)
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_sets_pass_everything() {
        let orders = vec![order("2025-05-01", "F_A"), order("2025-05-02", "F_B")];
        let filtered = filter_orders(&orders, &HashSet::new(), &HashSet::new());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].contract, "F_A");
        assert_eq!(filtered[1].contract, "F_B");
    }

    #[test]
    fn test_contract_filter() {
        let orders = vec![
            order("2025-05-01", "F_A"),
            order("2025-05-01", "F_B"),
            order("2025-05-02", "F_A"),
        ];
        let filtered = filter_orders(&orders, &set(&["F_A"]), &HashSet::new());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|o| o.contract == "F_A"));
    }

    #[test]
    fn test_both_dimensions_conjunctive() {
        let orders = vec![
            order("2025-05-01", "F_A"),
            order("2025-05-01", "F_B"),
            order("2025-05-02", "F_A"),
        ];
        let filtered = filter_orders(&orders, &set(&["F_A"]), &set(&["2025-05-01"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2025-05-01");
        assert_eq!(filtered[0].contract, "F_A");
    }

    #[test]
    fn test_relative_order_preserved() {
        let orders = vec![
            order("2025-05-03", "F_A"),
            order("2025-05-01", "F_B"),
            order("2025-05-02", "F_A"),
        ];
        let filtered = filter_orders(&orders, &set(&["F_A"]), &HashSet::new());
        assert_eq!(filtered[0].date, "2025-05-03");
        assert_eq!(filtered[1].date, "2025-05-02");
    }
}
