//! Dashboard figures derived from the order collection

use super::money::{to_decimal, to_f64};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Order, OrderStatus};

/// Summary shown on the staff dashboard
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total_orders: usize,
    pub total_revenue: f64,
    /// 0 when there are no orders
    pub average_order_value: f64,
    pub pending_orders: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let revenue: Decimal = orders.iter().map(|o| to_decimal(o.total)).sum();
        let average = if orders.is_empty() {
            Decimal::ZERO
        } else {
            revenue / Decimal::from(orders.len())
        };

        Self {
            total_orders: orders.len(),
            total_revenue: to_f64(revenue),
            average_order_value: to_f64(average),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
        }
    }
}
