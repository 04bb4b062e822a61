//! Behavioural tests for the cart service.

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::{product, CountingCart, FakeCatalog, MemorySession};
use spacepal_application::cart::total_price;
use spacepal_application::{AddOutcome, CartService};
use spacepal_core::cart::CartItem;

fn service(cart: Arc<CountingCart>, session: MemorySession) -> CartService {
    CartService::new(cart, Arc::new(FakeCatalog::new()), Arc::new(session))
}

#[tokio::test]
async fn test_unauthenticated_add_makes_no_network_call() {
    let cart = Arc::new(CountingCart::new());
    let service = service(cart.clone(), MemorySession::new());

    let outcome = service.add_to_cart("p1").await;

    assert_eq!(outcome, AddOutcome::NotAuthenticated);
    assert_eq!(cart.call_count(), 0);
    assert!(!service.recently_added("p1"));
}

#[tokio::test]
async fn test_add_arms_confirmation_flag() {
    let cart = Arc::new(CountingCart::new());
    let service = service(cart.clone(), MemorySession::logged_in("ana", false));

    let outcome = service.add_to_cart("p1").await;

    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(cart.call_count(), 1);
    assert!(service.recently_added("p1"));
    assert!(!service.recently_added("p2"));
}

#[tokio::test]
async fn test_failed_add_reports_failed_without_retry() {
    let cart = Arc::new(CountingCart::new());
    cart.fail.store(true, Ordering::SeqCst);
    let service = service(cart.clone(), MemorySession::logged_in("ana", false));

    let outcome = service.add_to_cart("p1").await;

    assert_eq!(outcome, AddOutcome::Failed);
    assert_eq!(cart.call_count(), 1);
    assert!(!service.recently_added("p1"));
}

#[tokio::test]
async fn test_detailed_cart_resolves_products_best_effort() {
    let cart = Arc::new(CountingCart::with_items(vec![
        CartItem {
            product_id: "p1".into(),
            quantity: 2,
        },
        CartItem {
            product_id: "ghost".into(),
            quantity: 1,
        },
    ]));
    let catalog = Arc::new(FakeCatalog::new());
    catalog.insert_product(product("p1", 10.0));

    let session = Arc::new(MemorySession::logged_in("ana", false));
    let service = CartService::new(cart, catalog, session);

    let entries = service.detailed_cart().await.unwrap();
    assert_eq!(entries.len(), 2, "unresolvable products keep their line");
    assert!(entries[0].product.is_some());
    assert!(entries[1].product.is_none());
    assert_eq!(total_price(&entries), 20.0);
}

#[tokio::test]
async fn test_detailed_cart_requires_login() {
    let service = service(Arc::new(CountingCart::new()), MemorySession::new());
    let err = service.detailed_cart().await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_set_quantity_zero_removes_line() {
    let cart = Arc::new(CountingCart::with_items(vec![CartItem {
        product_id: "p1".into(),
        quantity: 3,
    }]));
    let service = service(cart.clone(), MemorySession::logged_in("ana", false));

    service.set_quantity("p1", 0).await.unwrap();

    let entries = service.detailed_cart().await.unwrap();
    assert!(entries.is_empty());
}
