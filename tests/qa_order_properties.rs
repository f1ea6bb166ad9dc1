use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use ordersvc::orders::{CreateOrderItem, OrderError, compute_totals, index_products, last_page};
use ordersvc::products::{Product, ProductClientError, ProductValidator};

/// Helper to build a catalog product
fn product(id: Uuid, name: &str, price: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: price.parse().expect("valid decimal"),
    }
}

fn line(product_id: Uuid, quantity: i32) -> CreateOrderItem {
    CreateOrderItem {
        product_id,
        quantity,
    }
}

#[test]
fn qa_totals_follow_snapshotted_prices() {
    let keyboard = Uuid::new_v4();
    let monitor = Uuid::new_v4();

    // Setup: catalog at order-creation time
    let catalog = index_products(vec![
        product(keyboard, "Keyboard", "149.99"),
        product(monitor, "Monitor", "299.00"),
    ]);

    let items = vec![line(keyboard, 2), line(monitor, 1)];
    let (amount, count) = compute_totals(&items, &catalog).expect("totals");

    assert_eq!(amount, "598.98".parse::<Decimal>().unwrap());
    assert_eq!(count, 3);

    // A later catalog price change must not affect already-computed totals:
    // the computation only ever sees the snapshot it was handed.
    let repriced = index_products(vec![
        product(keyboard, "Keyboard", "999.99"),
        product(monitor, "Monitor", "299.00"),
    ]);
    let (new_amount, _) = compute_totals(&items, &repriced).expect("totals");
    assert_ne!(new_amount, amount);
    assert_eq!(amount, "598.98".parse::<Decimal>().unwrap());
}

#[test]
fn qa_unresolvable_product_fails_deterministically() {
    let known = Uuid::new_v4();
    let missing = Uuid::new_v4();
    let catalog = index_products(vec![product(known, "Keyboard", "10.00")]);

    let err = compute_totals(&[line(known, 1), line(missing, 2)], &catalog).unwrap_err();
    let msg = err.to_string();

    assert!(matches!(err, OrderError::UnknownProduct(id) if id == missing));
    assert!(msg.contains(&missing.to_string()));
}

#[test]
fn qa_last_page_is_ceil_of_total_over_limit() {
    // 25 matching orders, limit 10 -> pages 1..=3
    assert_eq!(last_page(25, 10), 3);
    // Exact multiple
    assert_eq!(last_page(30, 10), 3);
    // Nothing matching -> lastPage 0
    assert_eq!(last_page(0, 10), 0);
    // Single partial page
    assert_eq!(last_page(7, 10), 1);
}

/// Validator that records how it was called, for batching assertions
struct RecordingValidator {
    catalog: Vec<Product>,
    calls: std::sync::Mutex<Vec<Vec<Uuid>>>,
}

#[async_trait]
impl ProductValidator for RecordingValidator {
    async fn validate_products(&self, ids: &[Uuid]) -> Result<Vec<Product>, ProductClientError> {
        self.calls.lock().unwrap().push(ids.to_vec());
        Ok(self
            .catalog
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn qa_validator_receives_one_batched_call() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let validator = Arc::new(RecordingValidator {
        catalog: vec![product(a, "Keyboard", "1.00"), product(b, "Mouse", "2.00")],
        calls: std::sync::Mutex::new(Vec::new()),
    });

    let resolved = validator
        .validate_products(&[a, b])
        .await
        .expect("validation");
    assert_eq!(resolved.len(), 2);

    let calls = validator.calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "one batched call, not one per item");
    assert_eq!(calls[0], vec![a, b]);
}
