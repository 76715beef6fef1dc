use super::*;
use crate::orders::storage::{MemoryStore, StorageError, StorageResult};
use shared::CommandError;
use std::sync::atomic::{AtomicBool, Ordering};

fn create_test_manager() -> OrderStateManager {
    let store = RedbStore::open_in_memory().unwrap();
    OrderStateManager::open(Arc::new(store)).unwrap()
}

fn dish(item_id: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        item_id: item_id.to_string(),
        name: name.to_string(),
        description: String::new(),
        unit_price: price,
        category: "mains".to_string(),
        media_ref: None,
        rating: None,
        cook_time: None,
        is_vegetarian: false,
        is_spicy: false,
    }
}

/// Independent Σ price × quantity, for comparing against `compute_total`
fn expected_total(cart: &[OrderLineItem]) -> f64 {
    cart.iter()
        .map(|line| line.unit_price * line.quantity as f64)
        .sum()
}

// ========================================================================
// Helper: table selected, cart filled, order submitted
// ========================================================================

fn submit_order(manager: &OrderStateManager, table: &str, items: &[(&MenuItem, i32)]) -> String {
    manager.set_table(table).unwrap();
    for (item, quantity) in items {
        manager.add_item(item, *quantity).unwrap();
    }
    manager
        .submit("Test Diner", "diner@example.com", None)
        .unwrap()
}

// ========================================================================
// Store double whose commits can be switched to fail
// ========================================================================

#[derive(Default)]
struct FailingStore {
    inner: MemoryStore,
    fail_commits: AtomicBool,
}

impl FailingStore {
    fn set_failing(&self, failing: bool) {
        self.fail_commits.store(failing, Ordering::SeqCst);
    }
}

impl StateStore for FailingStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        self.inner.get(key)
    }

    fn commit(&self, batch: WriteBatch) -> StorageResult<()> {
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("storage quota exceeded".to_string()));
        }
        self.inner.commit(batch)
    }
}

fn create_failing_manager() -> (OrderStateManager, Arc<FailingStore>) {
    let store = Arc::new(FailingStore::default());
    let manager = OrderStateManager::open(store.clone()).unwrap();
    (manager, store)
}

mod test_submit;
