use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A tracked product.
///
/// `name` and `sku` are free text; the engine does not check them for
/// uniqueness (form-level responsibility). `category`, `supplier` and
/// `location` SHOULD name entries in the matching vocabulary list, but the
/// reference is not enforced structurally: a product may keep naming a value
/// that was later deleted from its list (dangling reference).
///
/// Field names are the wire contract for the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
    pub reorder_level: u64,
    pub supplier: String,
    pub location: String,
    pub last_updated: DateTime<Utc>,
}

impl Product {
    /// Low stock: quantity at or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Current stock value (quantity × unit price).
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Product fields as submitted by a caller.
///
/// The engine assigns the id and the `lastUpdated` timestamp on creation;
/// the draft carries everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
    pub reorder_level: u64,
    pub supplier: String,
    pub location: String,
}

impl ProductDraft {
    /// Materialize the draft into a [`Product`] with an engine-assigned id.
    pub fn into_product(self, id: ProductId, last_updated: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            reorder_level: self.reorder_level,
            supplier: self.supplier,
            location: self.location,
            last_updated,
        }
    }
}
