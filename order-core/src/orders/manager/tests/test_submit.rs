use super::*;

#[test]
fn test_submit_scenario() {
    let manager = create_test_manager();
    manager.set_table("5").unwrap();
    manager.add_one(&dish("6", "Margherita Pizza", 22.0)).unwrap();

    let order_id = manager.submit("Jane", "jane@x.com", None).unwrap();

    assert!(manager.cart().is_empty());
    assert_eq!(manager.table(), "5");

    let order = manager.order(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 22.0);
    assert_eq!(order.table_number, "5");
    assert_eq!(order.customer_name, "Jane");
    assert_eq!(order.customer_email, "jane@x.com");
    assert_eq!(order.special_requests, None);
}

#[test]
fn test_submit_keeps_table_id_verbatim() {
    let manager = create_test_manager();
    manager.set_table("   ").unwrap();
    manager.add_one(&dish("14", "Espresso", 4.0)).unwrap();

    let order_id = manager.submit("Jane", "jane@x.com", None).unwrap();
    assert_eq!(manager.order(&order_id).unwrap().table_number, "   ");
    assert_eq!(manager.table(), "   ");
}

#[test]
fn test_submit_snapshots_cart_and_total() {
    let manager = create_test_manager();
    manager.set_table("P1").unwrap();
    manager.add_item(&dish("4", "Osso Buco", 35.0), 2).unwrap();
    manager.add_item(&dish("13", "Limoncello", 8.0), 4).unwrap();

    let cart_before = manager.cart();
    let total_before = manager.compute_total();

    let order_id = manager.submit("Marco", "marco@example.com", None).unwrap();
    let order = manager.order(&order_id).unwrap();

    assert_eq!(order.items, cart_before);
    assert_eq!(order.total, total_before);
    assert_eq!(order.total, 102.0);
}

#[test]
fn test_submit_empty_cart() {
    let manager = create_test_manager();
    manager.set_table("5").unwrap();

    let err = manager.submit("Jane", "jane@x.com", None).unwrap_err();
    assert!(matches!(err, ManagerError::EmptyCart));
    assert!(manager.orders().is_empty());
}

#[test]
fn test_submit_empty_cart_wins_over_missing_table() {
    let manager = create_test_manager();
    let err = manager.submit("Jane", "jane@x.com", None).unwrap_err();
    assert!(matches!(err, ManagerError::EmptyCart));
}

#[test]
fn test_submit_without_table() {
    let manager = create_test_manager();
    manager.add_one(&dish("6", "Margherita Pizza", 22.0)).unwrap();

    let err = manager.submit("Jane", "jane@x.com", None).unwrap_err();
    assert!(matches!(err, ManagerError::NoTableSelected));

    // Nothing changed
    assert_eq!(manager.cart().len(), 1);
    assert!(manager.orders().is_empty());
}

#[test]
fn test_submit_keeps_special_requests() {
    let manager = create_test_manager();
    manager.set_table("T1").unwrap();
    manager.add_one(&dish("3", "Arancini", 12.0)).unwrap();
    let with_note = manager
        .submit("Ana", "ana@example.com", Some("  No nuts please "))
        .unwrap();

    manager.add_one(&dish("3", "Arancini", 12.0)).unwrap();
    let blank_note = manager
        .submit("Ana", "ana@example.com", Some("   "))
        .unwrap();

    assert_eq!(
        manager.order(&with_note).unwrap().special_requests.as_deref(),
        Some("No nuts please")
    );
    assert_eq!(manager.order(&blank_note).unwrap().special_requests, None);
}

#[test]
fn test_orders_newest_first() {
    let manager = create_test_manager();
    let pizza = dish("6", "Margherita Pizza", 22.0);

    let first = submit_order(&manager, "1", &[(&pizza, 1)]);
    let second = submit_order(&manager, "1", &[(&pizza, 2)]);
    let third = submit_order(&manager, "2", &[(&pizza, 3)]);

    let ids: Vec<_> = manager.orders().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[test]
fn test_order_ids_are_unique() {
    let manager = create_test_manager();
    let espresso = dish("14", "Espresso", 4.0);

    let mut ids: Vec<_> = (0..50)
        .map(|_| submit_order(&manager, "B1", &[(&espresso, 1)]))
        .collect();
    assert!(ids.iter().all(|id| id.len() == shared::util::SHORT_ID_LEN));

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_order_items_immutable_after_cart_changes() {
    let manager = create_test_manager();
    let tiramisu = dish("9", "Tiramisu", 12.0);
    let order_id = submit_order(&manager, "3", &[(&tiramisu, 2)]);

    manager.add_item(&tiramisu, 5).unwrap();
    manager.set_quantity("9", 1).unwrap();
    manager.clear_cart().unwrap();

    let order = manager.order(&order_id).unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.total, 24.0);
}

#[test]
fn test_orders_snapshot_is_a_copy() {
    let manager = create_test_manager();
    let order_id = submit_order(&manager, "4", &[(&dish("2", "Antipasto", 18.0), 1)]);

    let mut orders = manager.orders();
    orders[0].status = OrderStatus::Completed;
    orders[0].items.clear();

    let stored = manager.order(&order_id).unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.items.len(), 1);
}

#[test]
fn test_stats_over_orders() {
    let manager = create_test_manager();
    let pizza = dish("6", "Margherita Pizza", 22.0);
    let espresso = dish("14", "Espresso", 4.0);

    let first = submit_order(&manager, "1", &[(&pizza, 1)]);
    submit_order(&manager, "1", &[(&espresso, 2)]);
    manager.advance(&first).unwrap();

    let stats = manager.stats();
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.total_revenue, 30.0);
    assert_eq!(stats.average_order_value, 15.0);
    assert_eq!(stats.pending_orders, 1);
}
