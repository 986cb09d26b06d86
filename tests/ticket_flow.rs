//! Ticket lifecycle integration tests
//!
//! Exercises the full scan → order → re-scan flow against the in-memory
//! store, including the double-submission race: N concurrent order
//! attempts with the same valid ticket must yield exactly one order.

use std::sync::Arc;

use chrono::Duration;
use futures::future::join_all;
use kedai_server::db::models::OrderItem;
use kedai_server::db::repository::{MemoryStore, TableStore};
use kedai_server::{PlaceOrderRequest, SessionTicketManager, TicketError};

fn order_request(table: &str, code: &str) -> PlaceOrderRequest {
    PlaceOrderRequest {
        table_number: table.to_string(),
        session_code: code.to_string(),
        items: vec![
            OrderItem {
                product_id: Some("latte".to_string()),
                name: "Latte".to_string(),
                price: 4.5,
                quantity: 1,
            },
            OrderItem {
                product_id: Some("croissant".to_string()),
                name: "Croissant".to_string(),
                price: 3.0,
                quantity: 2,
            },
        ],
        total_price: 10.5,
    }
}

fn manager_on(store: &Arc<MemoryStore>) -> Arc<SessionTicketManager> {
    Arc::new(SessionTicketManager::new(
        store.clone(),
        store.clone(),
        Duration::hours(2),
    ))
}

#[tokio::test]
async fn scan_order_rescan_flow() {
    let store = Arc::new(MemoryStore::new());
    store.add_table("12");
    let manager = manager_on(&store);

    // Scan: a ticket appears on the table
    let first = manager.issue("12").await.unwrap();
    assert!(store.get("12").await.unwrap().unwrap().ticket.is_some());

    // Order against it
    let order = manager
        .place_order(order_request("12", &first.token))
        .await
        .unwrap();
    assert_eq!(order.table_number, "12");
    assert!(order.id.is_some());
    assert_eq!(store.orders().len(), 1);
    assert!(store.get("12").await.unwrap().unwrap().ticket.is_none());

    // Same token again: consumed
    let err = manager
        .place_order(order_request("12", &first.token))
        .await
        .unwrap_err();
    assert!(matches!(err, TicketError::InvalidTicket));

    // Re-scan issues a fresh usable ticket
    let second = manager.issue("12").await.unwrap();
    assert_ne!(second.token, first.token);
    manager
        .place_order(order_request("12", &second.token))
        .await
        .unwrap();
    assert_eq!(store.orders().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_consumers_place_exactly_one_order() {
    const CONCURRENCY: usize = 32;

    let store = Arc::new(MemoryStore::new());
    store.add_table("7");
    let manager = manager_on(&store);
    let issued = manager.issue("7").await.unwrap();

    let tasks: Vec<_> = (0..CONCURRENCY)
        .map(|_| {
            let manager = manager.clone();
            let token = issued.token.clone();
            tokio::spawn(async move { manager.place_order(order_request("7", &token)).await })
        })
        .collect();

    let mut successes = 0;
    let mut rejected = 0;
    for result in join_all(tasks).await {
        match result.expect("task panicked") {
            Ok(_) => successes += 1,
            Err(TicketError::InvalidTicket) | Err(TicketError::TicketExpired) => rejected += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(rejected, CONCURRENCY - 1);
    assert_eq!(store.orders().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_consumers_on_different_tables_do_not_interfere() {
    let store = Arc::new(MemoryStore::new());
    let manager = manager_on(&store);

    let mut tokens = Vec::new();
    for n in 1..=8 {
        let table = n.to_string();
        store.add_table(&table);
        tokens.push((table.clone(), manager.issue(&table).await.unwrap().token));
    }

    let tasks: Vec<_> = tokens
        .into_iter()
        .map(|(table, token)| {
            let manager = manager.clone();
            tokio::spawn(async move { manager.place_order(order_request(&table, &token)).await })
        })
        .collect();

    for result in join_all(tasks).await {
        result.expect("task panicked").expect("order should succeed");
    }
    assert_eq!(store.orders().len(), 8);
}
