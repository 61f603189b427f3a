use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{MovementId, ProductId};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    In,
    Out,
}

/// One ledger entry.
///
/// Movements are facts: immutable once recorded, never cascade-deleted.
/// `product_id` may dangle if the product is later deleted. The ledger is
/// kept most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: MovementId,
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub quantity: u64,
    pub reason: String,
    pub date: DateTime<Utc>,
    pub user: String,
}

/// Movement fields as submitted by a caller.
///
/// The engine assigns the id and the `date` timestamp when it records the
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementDraft {
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub quantity: u64,
    pub reason: String,
    pub user: String,
}

impl MovementDraft {
    /// Materialize the draft into a recorded [`Movement`].
    pub fn into_movement(self, id: MovementId, date: DateTime<Utc>) -> Movement {
        Movement {
            id,
            product_id: self.product_id,
            kind: self.kind,
            quantity: self.quantity,
            reason: self.reason,
            date,
            user: self.user,
        }
    }
}
