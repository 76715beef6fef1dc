//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64`; every sum is done in `Decimal`. Cart totals go
//! back to `f64` exactly, dashboard figures are rounded to 2 decimal places
//! (half away from zero).

use super::manager::ManagerError;
use rust_decimal::prelude::*;
use shared::OrderLineItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item (€1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per cart line
pub const MAX_QUANTITY: i32 = 9999;

/// Validate a catalog price before it enters the cart
pub fn validate_price(price: f64) -> Result<(), ManagerError> {
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(ManagerError::InvalidPrice(price));
    }
    Ok(())
}

/// Validate a stored quantity (1..=MAX_QUANTITY)
pub fn validate_quantity(quantity: i32) -> Result<(), ManagerError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(ManagerError::InvalidQuantity(quantity));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// unit_price × quantity
pub fn line_total(item: &OrderLineItem) -> Decimal {
    to_decimal(item.unit_price) * Decimal::from(item.quantity)
}

/// Σ unit_price × quantity over the cart, unrounded
///
/// Prices may carry more than 2 decimal places, so the exact sum is kept;
/// only dashboard figures are rounded (see [`to_f64`]).
pub fn cart_total(items: &[OrderLineItem]) -> f64 {
    let sum: Decimal = items.iter().map(line_total).sum();
    sum.to_f64().unwrap_or_default()
}
