//! Deterministic display fallbacks for absent optional fields.
//!
//! The dashboard shows a SKU and a product image even when the record has
//! neither. The fallback is derived from the product id, so the same record
//! always renders the same placeholder across sessions and in tests.

use crate::product::Product;
use stocklens_core::ProductId;

/// Number of bundled placeholder product images (1-based asset indices).
pub const PLACEHOLDER_PHOTO_COUNT: u64 = 16;

/// The product's SKU, or a stable `SKU-NNNN` placeholder derived from its id.
pub fn display_sku(product: &Product) -> String {
    match product.sku.as_deref() {
        Some(sku) if !sku.is_empty() => sku.to_string(),
        _ => format!("SKU-{:04}", id_seed(&product.product_id) % 10_000),
    }
}

/// Which bundled placeholder image (1..=16) to show when the record carries
/// no photo reference.
pub fn placeholder_photo_index(id: &ProductId) -> u8 {
    (id_seed(id) % PLACEHOLDER_PHOTO_COUNT) as u8 + 1
}

/// The product's storage location, or `"N/A"`.
pub fn display_location(product: &Product) -> &str {
    product
        .location
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or("N/A")
}

// FNV-1a over the id string. Chosen over the std hasher because the result
// must be stable across compiler releases.
fn id_seed(id: &ProductId) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in id.as_str().bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_id(id: &str) -> Product {
        Product {
            product_id: ProductId::from_string(id),
            name: "Widget".to_string(),
            price: 1.0,
            stock_quantity: 1,
            category_id: None,
            supplier: None,
            sku: None,
            location: None,
            rating: None,
            created_at: None,
            photo: None,
        }
    }

    #[test]
    fn explicit_sku_wins_over_placeholder() {
        let mut product = product_with_id("p-1");
        product.sku = Some("SKU-REAL".to_string());
        assert_eq!(display_sku(&product), "SKU-REAL");
    }

    #[test]
    fn placeholder_sku_is_deterministic_per_id() {
        let a1 = display_sku(&product_with_id("p-1"));
        let a2 = display_sku(&product_with_id("p-1"));
        let b = display_sku(&product_with_id("p-2"));

        assert_eq!(a1, a2);
        assert!(a1.starts_with("SKU-"));
        assert_eq!(a1.len(), "SKU-0000".len());
        // Different ids almost certainly land on different placeholders;
        // these two inputs are known to differ.
        assert_ne!(a1, b);
    }

    #[test]
    fn photo_index_is_in_asset_range() {
        for id in ["a", "b", "c", "p-123", "cm456xyz"] {
            let index = placeholder_photo_index(&ProductId::from_string(id));
            assert!((1..=16).contains(&index));
        }
    }

    #[test]
    fn location_falls_back_to_na() {
        let mut product = product_with_id("p-1");
        assert_eq!(display_location(&product), "N/A");
        product.location = Some("Warehouse A".to_string());
        assert_eq!(display_location(&product), "Warehouse A");
    }
}
