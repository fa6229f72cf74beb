//! Product read model.

use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product categories offered on the storefront.
pub const CATEGORIES: [&str; 7] = [
    "Electronics",
    "Fashion",
    "Food",
    "Beauty",
    "Books",
    "Accessories",
    "Other",
];

/// A product as supplied by the catalog.
///
/// Field names follow the catalog's JSON shape; cart snapshots persist
/// products verbatim so the same shape round-trips through the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// List price.
    pub price: Money,
    /// Sale price; only honored when strictly below `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Money>,
    /// Image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Owning vendor, when the catalog knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<VendorId>,
}

impl Product {
    /// The price a buyer actually pays: the discount price when it is present
    /// and strictly below the list price, otherwise the list price.
    pub fn effective_price(&self) -> Money {
        match self.discount_price {
            Some(discounted) if discounted < self.price => discounted,
            _ => self.price,
        }
    }

    /// Whether the product carries a real discount.
    pub fn has_discount(&self) -> bool {
        matches!(self.discount_price, Some(d) if d < self.price)
    }

    /// Whether any units remain.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// The primary image, if the catalog supplied one.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, discount: Option<i64>) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Desk Lamp".to_string(),
            price: Money::new(price),
            discount_price: discount.map(Money::new),
            images: vec![],
            category: "Electronics".to_string(),
            stock: 3,
            vendor_id: Some(VendorId::new("v1")),
        }
    }

    #[test]
    fn test_effective_price_uses_discount() {
        let p = product(5000, Some(4000));
        assert_eq!(p.effective_price(), Money::new(4000));
        assert!(p.has_discount());
    }

    #[test]
    fn test_discount_not_below_price_is_ignored() {
        let equal = product(5000, Some(5000));
        assert_eq!(equal.effective_price(), Money::new(5000));
        assert!(!equal.has_discount());

        let higher = product(5000, Some(6000));
        assert_eq!(higher.effective_price(), Money::new(5000));
        assert!(!higher.has_discount());
    }

    #[test]
    fn test_no_discount() {
        let p = product(5000, None);
        assert_eq!(p.effective_price(), Money::new(5000));
        assert!(!p.has_discount());
    }

    #[test]
    fn test_product_json_shape() {
        let p = product(5000, Some(4000));
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["price"], 5000);
        assert_eq!(json["discountPrice"], 4000);
        assert_eq!(json["vendorId"], "v1");
    }

    #[test]
    fn test_product_deserializes_with_missing_optionals() {
        let p: Product = serde_json::from_str(
            r#"{"id":"p9","name":"Notebook","price":1500}"#,
        )
        .unwrap();

        assert_eq!(p.discount_price, None);
        assert!(p.images.is_empty());
        assert_eq!(p.stock, 0);
        assert_eq!(p.vendor_id, None);
    }
}
