use stockpile_core::{
    InventoryState, MovementDraft, Product, ProductDraft, ProductId, VocabularyKind,
};

/// One mutating operation against the inventory snapshot.
///
/// This is the closed set the reducer handles, matched exhaustively. Every
/// well-formed value produces a well-defined next state: degenerate inputs
/// (unknown ids, duplicate vocabulary values, renames of absent values)
/// reduce to no-ops, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Append a new product with an engine-assigned id and timestamp.
    AddProduct(ProductDraft),
    /// Replace the product with the matching id in place (position preserved).
    UpdateProduct(Product),
    /// Remove the product with the matching id. Its movements stay in the ledger.
    DeleteProduct(ProductId),
    /// Record a ledger entry and apply its delta to the referenced product.
    AddMovement(MovementDraft),
    /// Add a value to a vocabulary list (re-sorted); duplicates are ignored.
    AddVocabularyItem {
        kind: VocabularyKind,
        value: String,
    },
    /// Rename a vocabulary value, cascading into every product that held the
    /// old one.
    RenameVocabularyItem {
        kind: VocabularyKind,
        old: String,
        new: String,
    },
    /// Remove a vocabulary value. Products referencing it keep the dangling
    /// text.
    DeleteVocabularyItem {
        kind: VocabularyKind,
        value: String,
    },
    /// Replace the entire snapshot. Used by the persistence adapter at
    /// startup; no validation beyond shape.
    LoadState(InventoryState),
}

impl Operation {
    /// Stable operation tag, used for tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddProduct(_) => "product.add",
            Operation::UpdateProduct(_) => "product.update",
            Operation::DeleteProduct(_) => "product.delete",
            Operation::AddMovement(_) => "movement.add",
            Operation::AddVocabularyItem { .. } => "vocabulary.add",
            Operation::RenameVocabularyItem { .. } => "vocabulary.rename",
            Operation::DeleteVocabularyItem { .. } => "vocabulary.delete",
            Operation::LoadState(_) => "state.load",
        }
    }
}
