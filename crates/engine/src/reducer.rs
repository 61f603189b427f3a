//! The reducer: the only place mutations are defined.

use chrono::Utc;

use stockpile_core::{InventoryState, MovementId, MovementKind, ProductId};

use crate::operation::Operation;

/// Compute the next snapshot from the current one and a single operation.
///
/// Never mutates its input and never fails: degenerate inputs (unknown ids,
/// duplicate vocabulary values, renames of absent values) reduce to the
/// unchanged state. `AddProduct` and `AddMovement` mint fresh ids and
/// timestamps; everything else is a pure function of its arguments.
pub fn reduce(state: &InventoryState, operation: Operation) -> InventoryState {
    let mut next = state.clone();

    match operation {
        Operation::AddProduct(draft) => {
            next.products
                .push(draft.into_product(ProductId::new(), Utc::now()));
        }

        Operation::UpdateProduct(mut product) => {
            product.last_updated = Utc::now();
            if let Some(slot) = next.products.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
            }
        }

        Operation::DeleteProduct(id) => {
            // Movements referencing the product stay in the ledger.
            next.products.retain(|p| p.id != id);
        }

        Operation::AddMovement(draft) => {
            let movement = draft.into_movement(MovementId::new(), Utc::now());
            if let Some(product) = next
                .products
                .iter_mut()
                .find(|p| p.id == movement.product_id)
            {
                product.quantity = match movement.kind {
                    MovementKind::In => product.quantity.saturating_add(movement.quantity),
                    // OUT clamps at zero; the ledger keeps the full magnitude.
                    MovementKind::Out => product.quantity.saturating_sub(movement.quantity),
                };
                product.last_updated = movement.date;
            }
            // Recorded even when the product is unknown.
            next.movements.insert(0, movement);
        }

        Operation::AddVocabularyItem { kind, value } => {
            let list = next.vocabulary_mut(kind);
            // Case-sensitive exact match; a duplicate add is a no-op.
            if !list.contains(&value) {
                list.push(value);
                list.sort();
            }
        }

        Operation::RenameVocabularyItem { kind, old, new } => {
            let list = next.vocabulary_mut(kind);
            for entry in list.iter_mut() {
                if *entry == old {
                    *entry = new.clone();
                }
            }
            list.sort();
            // Cascade: every product holding the old value follows the rename.
            for product in &mut next.products {
                let field = kind.field_mut(product);
                if *field == old {
                    *field = new.clone();
                }
            }
        }

        Operation::DeleteVocabularyItem { kind, value } => {
            // Products referencing the value keep it (dangling reference).
            next.vocabulary_mut(kind).retain(|entry| entry != &value);
        }

        Operation::LoadState(snapshot) => {
            next = snapshot;
        }
    }

    next
}
