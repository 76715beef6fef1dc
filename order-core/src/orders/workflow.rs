//! Order status workflow
//!
//! `pending → preparing → ready → served → completed`, advanced one step at
//! a time. Staff overrides may jump anywhere (see [`override_status`]).

use super::manager::{ManagerError, ManagerResult};
use shared::{Order, OrderStatus};
use std::collections::BTreeMap;

/// Move an order one step forward and return its new status
pub fn advance(order: &mut Order) -> ManagerResult<OrderStatus> {
    let next = order
        .status
        .next()
        .ok_or_else(|| ManagerError::TerminalState(order.id.clone()))?;
    order.status = next;
    Ok(next)
}

/// Administrative any-to-any transition; returns the previous status
pub fn override_status(order: &mut Order, status: OrderStatus) -> OrderStatus {
    std::mem::replace(&mut order.status, status)
}

/// Number of orders per status; every status is present, zero included
pub fn count_by_status(orders: &[Order]) -> BTreeMap<OrderStatus, usize> {
    let mut counts: BTreeMap<OrderStatus, usize> =
        OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for order in orders {
        *counts.entry(order.status).or_default() += 1;
    }
    counts
}

/// Orders in `status` (all orders for `None`), collection order preserved
pub fn filter_by_status(orders: &[Order], status: Option<OrderStatus>) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| status.is_none_or(|s| o.status == s))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            table_number: "1".to_string(),
            customer_name: "Ana".to_string(),
            customer_email: "ana@example.com".to_string(),
            items: vec![],
            total: 0.0,
            status,
            created_at: Utc::now(),
            special_requests: None,
        }
    }

    #[test]
    fn test_advance_stops_at_completed() {
        let mut o = order("a", OrderStatus::Served);
        assert_eq!(advance(&mut o).unwrap(), OrderStatus::Completed);

        let err = advance(&mut o).unwrap_err();
        assert!(matches!(err, ManagerError::TerminalState(id) if id == "a"));
        assert_eq!(o.status, OrderStatus::Completed);
    }

    #[test]
    fn test_override_can_go_backwards() {
        let mut o = order("a", OrderStatus::Completed);
        let previous = override_status(&mut o, OrderStatus::Preparing);
        assert_eq!(previous, OrderStatus::Completed);
        assert_eq!(o.status, OrderStatus::Preparing);
    }

    #[test]
    fn test_count_by_status_includes_zeroes() {
        let orders = vec![
            order("a", OrderStatus::Pending),
            order("b", OrderStatus::Pending),
            order("c", OrderStatus::Ready),
        ];
        let counts = count_by_status(&orders);

        assert_eq!(counts.len(), 5);
        assert_eq!(counts[&OrderStatus::Pending], 2);
        assert_eq!(counts[&OrderStatus::Ready], 1);
        assert_eq!(counts[&OrderStatus::Completed], 0);
        assert_eq!(counts.values().sum::<usize>(), orders.len());
    }

    #[test]
    fn test_filter_by_status() {
        let orders = vec![
            order("a", OrderStatus::Ready),
            order("b", OrderStatus::Pending),
            order("c", OrderStatus::Ready),
        ];

        let ready: Vec<_> = filter_by_status(&orders, Some(OrderStatus::Ready))
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ready, vec!["a", "c"]);
        assert_eq!(filter_by_status(&orders, None).len(), 3);
    }
}
