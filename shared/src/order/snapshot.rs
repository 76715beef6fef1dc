//! Submitted order snapshot and its fulfillment status

use super::types::OrderLineItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// Fulfillment runs strictly in declaration order:
/// `Pending → Preparing → Ready → Served → Completed`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
    Completed,
}

impl OrderStatus {
    /// Every status, in workflow order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Completed,
    ];

    /// Next status in the workflow, `None` once completed
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::Served),
            Self::Served => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Completed
    }

    /// Button label for the action that advances out of this status
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Pending => "Start Preparing",
            Self::Preparing => "Mark Ready",
            Self::Ready => "Mark Served",
            Self::Served => "Complete",
            Self::Completed => "Update",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Served => "served",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status text that is not one of the five workflow states
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Submitted order
///
/// `items` and `total` are frozen at submission; only `status` changes
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID (short base-36 string)
    pub id: String,
    pub table_number: String,
    pub customer_name: String,
    pub customer_email: String,
    /// Copy of the cart at submission time
    pub items: Vec<OrderLineItem>,
    /// Sum of unit price × quantity at submission time
    pub total: f64,
    pub status: OrderStatus,
    /// Serialized as RFC 3339
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_walks_the_workflow() {
        let mut status = OrderStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, OrderStatus::ALL.to_vec());
        assert!(status.is_terminal());
    }

    #[test]
    fn status_parses_wire_names_only() {
        assert_eq!("ready".parse::<OrderStatus>(), Ok(OrderStatus::Ready));
        assert_eq!(
            "cooking".parse::<OrderStatus>(),
            Err(UnknownStatus("cooking".to_string()))
        );
        assert!("Ready".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn order_timestamp_is_iso8601() {
        let created_at = DateTime::parse_from_rfc3339("2026-03-01T19:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let order = Order {
            id: "abc123xyz".to_string(),
            table_number: "T3".to_string(),
            customer_name: "Jane".to_string(),
            customer_email: "jane@x.com".to_string(),
            items: vec![],
            total: 0.0,
            status: OrderStatus::Served,
            created_at,
            special_requests: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["createdAt"], "2026-03-01T19:30:00Z");
        assert_eq!(json["status"], "served");
        assert_eq!(json["tableNumber"], "T3");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
