//! Cart, line item, and wishlist types.

use crate::catalog::Product;
use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart: a product snapshot plus a quantity.
///
/// The product fields are flattened so a persisted line is the product's own
/// JSON shape with `quantity` alongside, matching the session snapshot format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    #[serde(flatten)]
    pub product: Product,
    /// Units of this product in the cart; always at least 1.
    pub quantity: i64,
}

impl CartLine {
    /// The per-unit price the buyer pays.
    pub fn unit_price(&self) -> Money {
        self.product.effective_price()
    }

    /// Total for this line (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

/// An ordered collection of cart lines, one per product id.
///
/// Serializes as a bare JSON array, which is exactly the persisted snapshot
/// shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same product id exists, its quantity is increased;
    /// otherwise a new line is appended. A non-positive quantity is floored
    /// to 1 — rejection of bad quantities belongs to [`Cart::set_quantity`].
    pub fn add(&mut self, product: &Product, quantity: i64) {
        let quantity = quantity.max(1);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
        }
    }

    /// Remove the line with the given product id.
    ///
    /// Returns whether a line was removed; removing an absent id is a no-op.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product.id != product_id);
        self.lines.len() < len_before
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of zero or less removes the line. Returns whether anything
    /// changed; an absent id is a no-op.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) {
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by product id.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count (sum of quantities), for the cart badge.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The vendor of the first line, used when building an order.
    pub fn vendor_id(&self) -> Option<&VendorId> {
        self.lines.first().and_then(|l| l.product.vendor_id.as_ref())
    }
}

/// Saved-for-later products, one entry per product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Wishlist {
    entries: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product. Adding an id that is already present is a no-op;
    /// returns whether the product was added.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.entries.push(product.clone());
        true
    }

    /// Remove a product by id. Returns whether an entry was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|p| &p.id != product_id);
        self.entries.len() < len_before
    }

    /// Check membership by product id.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|p| &p.id == product_id)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
