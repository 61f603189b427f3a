use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{MovementId, ProductId};
use crate::movement::{Movement, MovementKind};
use crate::product::Product;
use crate::vocabulary::VocabularyKind;

/// One immutable snapshot of the full inventory state.
///
/// The engine replaces the snapshot wholesale on every operation; it is never
/// partially updated in place. This is also the exact shape that gets
/// persisted — the field names are the wire contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryState {
    pub products: Vec<Product>,
    pub movements: Vec<Movement>,
    pub categories: Vec<String>,
    pub suppliers: Vec<String>,
    pub locations: Vec<String>,
}

impl InventoryState {
    /// The vocabulary list for `kind`.
    pub fn vocabulary(&self, kind: VocabularyKind) -> &[String] {
        match kind {
            VocabularyKind::Category => &self.categories,
            VocabularyKind::Supplier => &self.suppliers,
            VocabularyKind::Location => &self.locations,
        }
    }

    /// Mutable vocabulary list for `kind`.
    pub fn vocabulary_mut(&mut self, kind: VocabularyKind) -> &mut Vec<String> {
        match kind {
            VocabularyKind::Category => &mut self.categories,
            VocabularyKind::Supplier => &mut self.suppliers,
            VocabularyKind::Location => &mut self.locations,
        }
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Built-in dataset used when no persisted snapshot is available.
    ///
    /// Seed movements reference seed products, and the Office Chair is seeded
    /// below its reorder threshold so a fresh install already exercises the
    /// low-stock path.
    pub fn seed() -> Self {
        let now = Utc::now();

        let products = vec![
            Product {
                id: ProductId::new(),
                name: "MacBook Pro 16\"".to_string(),
                sku: "MBP-16-001".to_string(),
                category: "Electronics".to_string(),
                quantity: 25,
                price: 2499.99,
                reorder_level: 10,
                supplier: "Apple Inc.".to_string(),
                location: "Warehouse A".to_string(),
                last_updated: now,
            },
            Product {
                id: ProductId::new(),
                name: "Wireless Mouse".to_string(),
                sku: "WM-001".to_string(),
                category: "Electronics".to_string(),
                quantity: 150,
                price: 29.99,
                reorder_level: 50,
                supplier: "Logitech".to_string(),
                location: "Warehouse B".to_string(),
                last_updated: now,
            },
            Product {
                id: ProductId::new(),
                name: "Office Chair".to_string(),
                sku: "OC-ERG-001".to_string(),
                category: "Furniture".to_string(),
                quantity: 8,
                price: 199.99,
                reorder_level: 15,
                supplier: "Herman Miller".to_string(),
                location: "Warehouse A".to_string(),
                last_updated: now,
            },
            Product {
                id: ProductId::new(),
                name: "USB-C Cable".to_string(),
                sku: "USBC-001".to_string(),
                category: "Electronics".to_string(),
                quantity: 200,
                price: 19.99,
                reorder_level: 100,
                supplier: "Anker".to_string(),
                location: "Warehouse C".to_string(),
                last_updated: now,
            },
            Product {
                id: ProductId::new(),
                name: "Standing Desk".to_string(),
                sku: "SD-ADJ-001".to_string(),
                category: "Furniture".to_string(),
                quantity: 5,
                price: 599.99,
                reorder_level: 10,
                supplier: "FlexiSpot".to_string(),
                location: "Warehouse A".to_string(),
                last_updated: now,
            },
        ];

        let movements = vec![
            Movement {
                id: MovementId::new(),
                product_id: products[0].id,
                kind: MovementKind::In,
                quantity: 10,
                reason: "Purchase Order #PO-001".to_string(),
                date: now - Duration::days(1),
                user: "John Smith".to_string(),
            },
            Movement {
                id: MovementId::new(),
                product_id: products[1].id,
                kind: MovementKind::Out,
                quantity: 25,
                reason: "Sales Order #SO-045".to_string(),
                date: now - Duration::days(2),
                user: "Sarah Johnson".to_string(),
            },
            Movement {
                id: MovementId::new(),
                product_id: products[2].id,
                kind: MovementKind::Out,
                quantity: 2,
                reason: "Office Setup".to_string(),
                date: now - Duration::days(3),
                user: "Mike Davis".to_string(),
            },
        ];

        Self {
            products,
            movements,
            categories: vec![
                "Electronics".to_string(),
                "Furniture".to_string(),
                "Office Supplies".to_string(),
                "Hardware".to_string(),
            ],
            suppliers: vec![
                "Apple Inc.".to_string(),
                "Logitech".to_string(),
                "Herman Miller".to_string(),
                "Anker".to_string(),
                "FlexiSpot".to_string(),
            ],
            locations: vec![
                "Warehouse A".to_string(),
                "Warehouse B".to_string(),
                "Warehouse C".to_string(),
            ],
        }
    }
}
