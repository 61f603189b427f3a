//! Black-box flows through the store: seed dataset, movements, vocabulary
//! cascades, and the queries the presentation layer reads.

use stockpile_core::{InventoryState, MovementDraft, MovementKind, ProductDraft, VocabularyKind};
use stockpile_engine::{Operation, Store, query};

fn setup() -> Store {
    stockpile_observability::init();
    Store::new(InventoryState::seed())
}

#[test]
fn seeded_low_stock_alert_clears_after_an_inbound_movement() {
    let mut store = setup();

    // Office Chair is seeded at quantity 8 with reorder level 15.
    let chair_id = store
        .current()
        .products
        .iter()
        .find(|p| p.name == "Office Chair")
        .unwrap()
        .id;
    assert!(
        query::low_stock(store.current())
            .iter()
            .any(|p| p.id == chair_id)
    );

    let state = store.apply(Operation::AddMovement(MovementDraft {
        product_id: chair_id,
        kind: MovementKind::In,
        quantity: 10,
        reason: "Purchase Order #PO-107".to_string(),
        user: "John Smith".to_string(),
    }));

    assert_eq!(state.product(chair_id).unwrap().quantity, 18);
    assert!(
        !query::low_stock(store.current())
            .iter()
            .any(|p| p.id == chair_id)
    );
}

#[test]
fn adding_a_category_sorts_and_ignores_the_duplicate() {
    let mut store = Store::new(InventoryState {
        categories: vec!["Electronics".to_string(), "Furniture".to_string()],
        ..InventoryState::default()
    });

    let add = Operation::AddVocabularyItem {
        kind: VocabularyKind::Category,
        value: "Tools".to_string(),
    };
    let once = store.apply(add.clone()).categories.clone();
    assert_eq!(once, vec!["Electronics", "Furniture", "Tools"]);

    let twice = store.apply(add).categories.clone();
    assert_eq!(twice, once);
}

#[test]
fn a_full_session_keeps_the_snapshot_and_queries_consistent() {
    let mut store = setup();

    store.apply(Operation::AddProduct(ProductDraft {
        name: "Label Printer".to_string(),
        sku: "LP-001".to_string(),
        category: "Hardware".to_string(),
        quantity: 2,
        price: 149.99,
        reorder_level: 5,
        supplier: "Logitech".to_string(),
        location: "Warehouse B".to_string(),
    }));
    let printer_id = store.current().products.last().unwrap().id;

    // Over-withdrawal clamps the product at zero but keeps the requested
    // magnitude in the ledger.
    let state = store.apply(Operation::AddMovement(MovementDraft {
        product_id: printer_id,
        kind: MovementKind::Out,
        quantity: 6,
        reason: "Sales Order #SO-201".to_string(),
        user: "Sarah Johnson".to_string(),
    }));
    assert_eq!(state.product(printer_id).unwrap().quantity, 0);
    assert_eq!(state.movements[0].quantity, 6);

    // Rename a supplier and watch the cascade land in the product list.
    let state = store.apply(Operation::RenameVocabularyItem {
        kind: VocabularyKind::Supplier,
        old: "Logitech".to_string(),
        new: "Logitech International".to_string(),
    });
    assert!(
        state
            .products
            .iter()
            .all(|p| p.supplier != "Logitech")
    );
    assert_eq!(
        state.product(printer_id).unwrap().supplier,
        "Logitech International"
    );

    // Queries see the new product.
    let summary = query::inventory_summary(store.current());
    assert_eq!(summary.total_products, 6);
    assert_eq!(summary.movement_count, 4);
    let groups = query::by_category(store.current());
    assert_eq!(groups["Hardware"].count, 1);
}
