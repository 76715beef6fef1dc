//! OrderStateManager - cart, table selection and submitted orders
//!
//! One manager is constructed per diner session over a [`StateStore`] and
//! handed to whatever renders the menu, cart and staff views.
//!
//! # Mutation Flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Validate input (no lock held)
//!     ├─ 2. Lock state, copy it
//!     ├─ 3. Apply the change to the copy
//!     ├─ 4. Commit every changed key in one WriteBatch
//!     ├─ 5. Publish the copy as the new state
//!     └─ 6. Return result
//! ```
//!
//! A failure at 3 or 4 drops the copy, so callers never observe a half
//! applied change (e.g. a cleared cart without the order it became).

mod error;
pub use error::*;

use super::money;
use super::stats::OrderStats;
use super::storage::{
    self, CART_KEY, ORDERS_KEY, RedbStore, StateStore, TABLE_KEY, WriteBatch,
};
use super::workflow;
use crate::common::Config;
use chrono::Utc;
use parking_lot::Mutex;
use shared::{MenuItem, Order, OrderLineItem, OrderStatus};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything the session persists
#[derive(Debug, Clone, Default, PartialEq)]
struct SessionState {
    cart: Vec<OrderLineItem>,
    table: String,
    /// Newest first
    orders: Vec<Order>,
}

impl SessionState {
    fn load(store: &dyn StateStore) -> ManagerResult<Self> {
        Ok(Self {
            cart: storage::load_json(store, CART_KEY)?,
            table: storage::load_json(store, TABLE_KEY)?,
            orders: storage::load_json(store, ORDERS_KEY)?,
        })
    }

    /// Batch writing every key whose value differs from `previous`
    fn diff(&self, previous: &SessionState) -> ManagerResult<WriteBatch> {
        let mut batch = WriteBatch::new();
        if self.cart != previous.cart {
            batch.set(CART_KEY, storage::encode_json(&self.cart)?);
        }
        if self.table != previous.table {
            batch.set(TABLE_KEY, storage::encode_json(&self.table)?);
        }
        if self.orders != previous.orders {
            batch.set(ORDERS_KEY, storage::encode_json(&self.orders)?);
        }
        Ok(batch)
    }

    fn line_mut(&mut self, item_id: &str) -> Option<&mut OrderLineItem> {
        self.cart.iter_mut().find(|line| line.item_id == item_id)
    }

    fn order_mut(&mut self, order_id: &str) -> ManagerResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))
    }

    /// Short id not used by any existing order
    fn fresh_order_id(&self) -> String {
        loop {
            let id = shared::util::short_id();
            if !self.orders.iter().any(|o| o.id == id) {
                return id;
            }
        }
    }
}

/// Owner of the diner's cart, table selection and order history
pub struct OrderStateManager {
    store: Arc<dyn StateStore>,
    state: Mutex<SessionState>,
}

impl std::fmt::Debug for OrderStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("OrderStateManager")
            .field("store", &"<StateStore>")
            .field("cart_lines", &state.cart.len())
            .field("table", &state.table)
            .field("orders", &state.orders.len())
            .finish()
    }
}

impl OrderStateManager {
    /// Restore the session persisted in `store` (empty on a fresh store)
    pub fn open(store: Arc<dyn StateStore>) -> ManagerResult<Self> {
        let state = SessionState::load(store.as_ref())?;
        tracing::info!(
            cart_lines = state.cart.len(),
            table = %state.table,
            orders = state.orders.len(),
            "Order session restored"
        );
        Ok(Self {
            store,
            state: Mutex::new(state),
        })
    }

    /// Open the redb store configured by `config`, creating the work dir
    pub fn open_with_config(config: &Config) -> ManagerResult<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(storage::StorageError::from)?;
        let path = config.db_path();
        tracing::debug!(path = %path.display(), "Opening order store");
        let store = RedbStore::open(path)?;
        Self::open(Arc::new(store))
    }

    /// Apply `f` to a copy of the state, persist what changed, then publish
    fn mutate<R>(
        &self,
        op: &'static str,
        f: impl FnOnce(&mut SessionState) -> ManagerResult<R>,
    ) -> ManagerResult<R> {
        let mut state = self.state.lock();
        let mut next = state.clone();
        let result = f(&mut next)?;

        let batch = next.diff(&state)?;
        if !batch.is_empty() {
            tracing::debug!(op, keys = ?batch.keys().collect::<Vec<_>>(), "Persisting session state");
            if let Err(e) = self.store.commit(batch) {
                tracing::error!(op, error = %e, "Failed to persist session state");
                return Err(e.into());
            }
        }

        *state = next;
        Ok(result)
    }

    // ========== Cart ==========

    /// Add `quantity` of a catalog dish; an existing line is topped up
    pub fn add_item(&self, item: &MenuItem, quantity: i32) -> ManagerResult<()> {
        if quantity <= 0 {
            return Err(ManagerError::InvalidQuantity(quantity));
        }
        money::validate_price(item.unit_price)?;

        self.mutate("add_item", |state| {
            match state.line_mut(&item.item_id) {
                Some(line) => {
                    let merged = line.quantity.saturating_add(quantity);
                    money::validate_quantity(merged)?;
                    line.quantity = merged;
                }
                None => {
                    money::validate_quantity(quantity)?;
                    state
                        .cart
                        .push(OrderLineItem::from_menu_item(item, quantity));
                }
            }
            Ok(())
        })?;

        tracing::debug!(item_id = %item.item_id, quantity, "Item added to cart");
        Ok(())
    }

    /// Add a single unit of a catalog dish
    pub fn add_one(&self, item: &MenuItem) -> ManagerResult<()> {
        self.add_item(item, 1)
    }

    /// Drop a line from the cart; absent ids are ignored
    pub fn remove_item(&self, item_id: &str) -> ManagerResult<()> {
        self.mutate("remove_item", |state| {
            state.cart.retain(|line| line.item_id != item_id);
            Ok(())
        })?;
        tracing::debug!(item_id = %item_id, "Item removed from cart");
        Ok(())
    }

    /// Replace a line's quantity; `quantity <= 0` removes the line
    pub fn set_quantity(&self, item_id: &str, quantity: i32) -> ManagerResult<()> {
        if quantity <= 0 {
            return self.remove_item(item_id);
        }
        money::validate_quantity(quantity)?;

        self.mutate("set_quantity", |state| {
            let line = state
                .line_mut(item_id)
                .ok_or_else(|| ManagerError::ItemNotFound(item_id.to_string()))?;
            line.quantity = quantity;
            Ok(())
        })?;
        tracing::debug!(item_id = %item_id, quantity, "Cart quantity updated");
        Ok(())
    }

    /// Empty the cart without creating an order
    pub fn clear_cart(&self) -> ManagerResult<()> {
        self.mutate("clear_cart", |state| {
            state.cart.clear();
            Ok(())
        })
    }

    /// Σ unit_price × quantity over the current cart
    pub fn compute_total(&self) -> f64 {
        money::cart_total(&self.state.lock().cart)
    }

    /// Total number of units in the cart
    pub fn item_count(&self) -> i32 {
        self.state.lock().cart.iter().map(|line| line.quantity).sum()
    }

    pub fn cart(&self) -> Vec<OrderLineItem> {
        self.state.lock().cart.clone()
    }

    // ========== Table ==========

    /// Select the diner's table; an empty string clears the selection
    ///
    /// The identifier is stored verbatim, including ones the table directory
    /// does not know about. Trimming manual entry is up to the caller.
    pub fn set_table(&self, table_id: &str) -> ManagerResult<()> {
        self.mutate("set_table", |state| {
            state.table = table_id.to_string();
            Ok(())
        })?;
        tracing::debug!(table = %table_id, "Table selected");
        Ok(())
    }

    /// Selected table, empty when none
    pub fn table(&self) -> String {
        self.state.lock().table.clone()
    }

    // ========== Orders ==========

    /// Turn the cart into a pending order and return its id
    ///
    /// The cart is emptied in the same commit that stores the order; the
    /// table selection is kept for follow-up orders.
    pub fn submit(
        &self,
        customer_name: &str,
        customer_email: &str,
        special_requests: Option<&str>,
    ) -> ManagerResult<String> {
        let special_requests = special_requests
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let order = self.mutate("submit", |state| {
            if state.cart.is_empty() {
                return Err(ManagerError::EmptyCart);
            }
            if state.table.is_empty() {
                return Err(ManagerError::NoTableSelected);
            }

            let total = money::cart_total(&state.cart);
            let order = Order {
                id: state.fresh_order_id(),
                table_number: state.table.clone(),
                customer_name: customer_name.to_string(),
                customer_email: customer_email.to_string(),
                items: std::mem::take(&mut state.cart),
                total,
                status: OrderStatus::Pending,
                created_at: Utc::now(),
                special_requests,
            };
            state.orders.insert(0, order.clone());
            Ok(order)
        })?;

        tracing::info!(
            order_id = %order.id,
            table = %order.table_number,
            lines = order.items.len(),
            total = order.total,
            "Order submitted"
        );
        crate::audit_log!(
            order.customer_email,
            "submit",
            format!("order:{}", order.id)
        );
        Ok(order.id)
    }

    /// Advance an order one step through the status workflow
    pub fn advance(&self, order_id: &str) -> ManagerResult<OrderStatus> {
        let result = self.mutate("advance", |state| {
            workflow::advance(state.order_mut(order_id)?)
        });

        match &result {
            Ok(status) => {
                tracing::info!(order_id = %order_id, status = %status, "Order advanced")
            }
            Err(ManagerError::TerminalState(_)) => {
                tracing::warn!(order_id = %order_id, "Advance requested on completed order")
            }
            Err(_) => {}
        }
        result
    }

    /// Staff override: set any status given by its wire name
    pub fn set_status(&self, order_id: &str, status: &str) -> ManagerResult<()> {
        let status: OrderStatus = status.parse()?;
        self.set_status_to(order_id, status)
    }

    /// Staff override: set any status
    pub fn set_status_to(&self, order_id: &str, status: OrderStatus) -> ManagerResult<()> {
        let previous = self.mutate("set_status", |state| {
            Ok(workflow::override_status(state.order_mut(order_id)?, status))
        })?;

        tracing::info!(order_id = %order_id, from = %previous, to = %status, "Order status overridden");
        crate::audit_log!(
            "staff",
            "set_status",
            format!("order:{}", order_id),
            format!("{} -> {}", previous, status)
        );
        Ok(())
    }

    /// Order count per status; values sum to the number of orders
    pub fn count_by_status(&self) -> BTreeMap<OrderStatus, usize> {
        workflow::count_by_status(&self.state.lock().orders)
    }

    /// Orders in `status` (all for `None`), newest first
    pub fn orders_with_status(&self, status: Option<OrderStatus>) -> Vec<Order> {
        workflow::filter_by_status(&self.state.lock().orders, status)
    }

    /// All submitted orders, newest first
    pub fn orders(&self) -> Vec<Order> {
        self.state.lock().orders.clone()
    }

    pub fn order(&self, order_id: &str) -> Option<Order> {
        self.state
            .lock()
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }

    /// Dashboard summary over all orders
    pub fn stats(&self) -> OrderStats {
        OrderStats::from_orders(&self.state.lock().orders)
    }
}

#[cfg(test)]
mod tests;
