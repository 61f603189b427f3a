use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The three reference vocabularies a product field can point into.
///
/// Each kind binds one of the snapshot's sorted string lists to the
/// [`Product`] field a rename cascades into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyKind {
    Category,
    Supplier,
    Location,
}

impl VocabularyKind {
    /// The product field this vocabulary cascades into.
    pub fn field<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            VocabularyKind::Category => &product.category,
            VocabularyKind::Supplier => &product.supplier,
            VocabularyKind::Location => &product.location,
        }
    }

    /// Mutable access to the product field this vocabulary cascades into.
    pub fn field_mut<'a>(&self, product: &'a mut Product) -> &'a mut String {
        match self {
            VocabularyKind::Category => &mut product.category,
            VocabularyKind::Supplier => &mut product.supplier,
            VocabularyKind::Location => &mut product.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ProductId;
    use chrono::Utc;

    fn test_product() -> Product {
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
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn each_kind_selects_its_own_field() {
        let product = test_product();
        assert_eq!(VocabularyKind::Category.field(&product), "Electronics");
        assert_eq!(VocabularyKind::Supplier.field(&product), "Anker");
        assert_eq!(VocabularyKind::Location.field(&product), "Warehouse C");
    }

    #[test]
    fn field_mut_writes_through() {
        let mut product = test_product();
        *VocabularyKind::Location.field_mut(&mut product) = "Warehouse A".to_string();
        assert_eq!(product.location, "Warehouse A");
    }
}
