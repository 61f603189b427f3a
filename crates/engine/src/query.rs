//! Stateless projections over a snapshot.
//!
//! Every function recomputes from the snapshot it is given. Snapshots are
//! immutable, so there is nothing to cache or invalidate, and nothing here is
//! ever part of the persisted shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockpile_core::{InventoryState, Movement, MovementKind, Product, VocabularyKind};

/// Products at or below their reorder threshold.
pub fn low_stock(state: &InventoryState) -> Vec<&Product> {
    state.products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Total stock value across all products (quantity × price).
pub fn total_value(state: &InventoryState) -> f64 {
    state.products.iter().map(Product::stock_value).sum()
}

/// Per-value aggregate for one vocabulary field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VocabularyRollup {
    pub count: usize,
    pub quantity: u64,
    pub value: f64,
}

/// Product count, quantity and value grouped by category, in display order.
pub fn by_category(state: &InventoryState) -> BTreeMap<String, VocabularyRollup> {
    rollup(state, VocabularyKind::Category)
}

/// Same rollup keyed by supplier.
pub fn by_supplier(state: &InventoryState) -> BTreeMap<String, VocabularyRollup> {
    rollup(state, VocabularyKind::Supplier)
}

/// Same rollup keyed by location.
pub fn by_location(state: &InventoryState) -> BTreeMap<String, VocabularyRollup> {
    rollup(state, VocabularyKind::Location)
}

fn rollup(state: &InventoryState, kind: VocabularyKind) -> BTreeMap<String, VocabularyRollup> {
    let mut groups: BTreeMap<String, VocabularyRollup> = BTreeMap::new();
    for product in &state.products {
        let entry = groups.entry(kind.field(product).to_string()).or_default();
        entry.count += 1;
        entry.quantity += product.quantity;
        entry.value += product.stock_value();
    }
    groups
}

/// The `n` most recent movements (the ledger is most-recent-first).
pub fn recent_movements(state: &InventoryState, n: usize) -> &[Movement] {
    &state.movements[..n.min(state.movements.len())]
}

/// Movements dated strictly after the cutoff.
pub fn movements_since(state: &InventoryState, cutoff: DateTime<Utc>) -> Vec<&Movement> {
    state.movements.iter().filter(|m| m.date > cutoff).collect()
}

/// Headline numbers for the dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_value: f64,
    pub low_stock_count: usize,
    pub movement_count: usize,
}

/// Snapshot-wide totals: product count, stock value, low-stock count and
/// ledger length.
pub fn inventory_summary(state: &InventoryState) -> InventorySummary {
    InventorySummary {
        total_products: state.products.len(),
        total_value: total_value(state),
        low_stock_count: low_stock(state).len(),
        movement_count: state.movements.len(),
    }
}

/// Inbound/outbound totals over a reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementSummary {
    pub total: usize,
    pub inbound: u64,
    pub outbound: u64,
}

/// Movement totals for ledger entries dated after `since`.
pub fn movement_summary(state: &InventoryState, since: DateTime<Utc>) -> MovementSummary {
    let mut summary = MovementSummary {
        total: 0,
        inbound: 0,
        outbound: 0,
    };
    for movement in movements_since(state, since) {
        summary.total += 1;
        match movement.kind {
            MovementKind::In => summary.inbound += movement.quantity,
            MovementKind::Out => summary.outbound += movement.quantity,
        }
    }
    summary
}

/// Products ranked by stock value, highest first, top `n`.
pub fn top_value_products(state: &InventoryState, n: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = state.products.iter().collect();
    ranked.sort_by(|a, b| {
        b.stock_value()
            .partial_cmp(&a.stock_value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

/// Narrowing criteria for product lists.
///
/// `search` matches name or SKU case-insensitively; `category` and `location`
/// match exactly; the default filter passes everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub low_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !product.name.to_lowercase().contains(&term)
                && !product.sku.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if product.location != *location {
                return false;
            }
        }
        if self.low_stock_only && !product.is_low_stock() {
            return false;
        }
        true
    }
}

/// Products passing the filter, in snapshot order.
pub fn filter_products<'a>(state: &'a InventoryState, filter: &ProductFilter) -> Vec<&'a Product> {
    state
        .products
        .iter()
        .filter(|p| filter.matches(p))
        .collect()
}
