//! `stockpile-core` — inventory domain model.
//!
//! This crate contains the **pure data model** (no engine or persistence
//! concerns): products, the stock-movement ledger, the three reference
//! vocabularies, and the aggregate snapshot they form.

pub mod error;
pub mod id;
pub mod movement;
pub mod product;
pub mod state;
pub mod vocabulary;

pub use error::{DomainError, DomainResult};
pub use id::{MovementId, ProductId};
pub use movement::{Movement, MovementDraft, MovementKind};
pub use product::{Product, ProductDraft};
pub use state::InventoryState;
pub use vocabulary::VocabularyKind;
