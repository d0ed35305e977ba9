//! Merchandise catalog item types.

use serde::{Deserialize, Serialize};

use crate::{MerchItemId, Price};

/// Merchandise garment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerchType {
    Tshirt,
    Hoodie,
}

/// An immutable merchandise catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchItem {
    pub id: MerchItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Reference to the item's product image (asset path or URL).
    pub image_ref: String,
    /// Available size labels, in display order.
    pub sizes: Vec<String>,
    #[serde(rename = "type")]
    pub merch_type: MerchType,
    pub color: String,
}

impl MerchItem {
    /// Whether `size` is one of this item's offered sizes.
    ///
    /// Exposed for UI-level validation before a cart add; the cart itself
    /// does not enforce it.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> MerchItem {
        MerchItem {
            id: MerchItemId::new("tshirt-black"),
            name: "Official T-Shirt - Black".to_owned(),
            description: "Premium quality cotton t-shirt".to_owned(),
            price: Price::from_cents(3999),
            image_ref: "assets/images/tshirt-black.png".to_owned(),
            sizes: vec!["S".to_owned(), "M".to_owned(), "L".to_owned()],
            merch_type: MerchType::Tshirt,
            color: "Black".to_owned(),
        }
    }

    #[test]
    fn test_offers_size() {
        let item = sample();
        assert!(item.offers_size("M"));
        assert!(!item.offers_size("5XL"));
        assert!(!item.offers_size("m"));
    }

    #[test]
    fn test_merch_type_serde_tag() {
        let item = sample();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"tshirt\""));
        let back: MerchItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
