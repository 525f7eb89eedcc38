//! # Shopping Cart
//!
//! An ordered collection of borrowed products.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Ownership                                 │
//! │                                                                     │
//! │  Checkout flow (owner)          Cart<'a> (borrower)                 │
//! │  ─────────────────────          ───────────────────                 │
//! │  let laptop: Product  ◄──────── items[0]: &'a Product               │
//! │  let mobile: Product  ◄──────── items[1]: &'a Product               │
//! │                                                                     │
//! │  The cart never owns a product. The borrow checker enforces that    │
//! │  every product outlives the cart that lists it.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//! The cart's `Display` output is the single rendering path: the console
//! purchase blocks and the export file both print this exact text, so
//! the two can never disagree byte for byte.

use std::fmt;

use crate::money::Money;
use crate::product::Product;

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is preserved and is the display order
/// - No deduplication: adding the same product twice lists it twice
/// - No removal operation
#[derive(Debug, Clone, Default)]
pub struct Cart<'a> {
    items: Vec<&'a Product>,
}

impl<'a> Cart<'a> {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a product to the end of the cart. O(1) amortized.
    pub fn add_product(&mut self, product: &'a Product) {
        self.items.push(product);
    }

    /// Returns the products in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Returns the number of items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all list prices.
    pub fn subtotal(&self) -> Money {
        let mut total = Money::zero();
        for product in &self.items {
            total += product.price();
        }
        total
    }

    /// Sum of all per-item discount amounts.
    pub fn total_discount(&self) -> Money {
        let mut total = Money::zero();
        for product in &self.items {
            total += product.discount();
        }
        total
    }
}

/// Renders every item in insertion order: the product's display block,
/// a `Discounted Price:` line with the item's discount amount, and a
/// blank separator line. An empty cart renders nothing at all.
impl fmt::Display for Cart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for product in &self.items {
            write!(f, "{product}")?;
            writeln!(f, "Discounted Price: {}", product.discount())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::{Laptop, Mobile};

    fn alpha_laptop() -> Product {
        Product::from(Laptop::new("Alpha", Money::from_cents(100_000), "BrandX"))
    }

    fn beta_mobile() -> Product {
        Product::from(Mobile::new("Beta", Money::from_cents(50_000), "MakerY"))
    }

    #[test]
    fn test_empty_cart_renders_nothing() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.to_string(), "");
    }

    #[test]
    fn test_add_product_appends() {
        let laptop = alpha_laptop();
        let mobile = beta_mobile();

        let mut cart = Cart::new();
        cart.add_product(&laptop);
        cart.add_product(&mobile);

        assert_eq!(cart.item_count(), 2);
        let names: Vec<&str> = cart.items().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_render_follows_insertion_order() {
        let laptop = alpha_laptop();
        let mobile = beta_mobile();

        // Mobile added first, so its block must come first
        let mut cart = Cart::new();
        cart.add_product(&mobile);
        cart.add_product(&laptop);

        let text = cart.to_string();
        let mobile_at = text.find("Name: Beta").unwrap();
        let laptop_at = text.find("Name: Alpha").unwrap();
        assert!(mobile_at < laptop_at);
    }

    #[test]
    fn test_render_block_format() {
        let laptop = alpha_laptop();

        let mut cart = Cart::new();
        cart.add_product(&laptop);

        assert_eq!(
            cart.to_string(),
            "Name: Alpha\n\
             Price: $1000.00\n\
             Brand: BrandX\n\
             Discounted Price: $100.00\n\
             \n"
        );
    }

    #[test]
    fn test_duplicate_products_are_listed_twice() {
        let laptop = alpha_laptop();

        let mut cart = Cart::new();
        cart.add_product(&laptop);
        cart.add_product(&laptop);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.to_string().matches("Name: Alpha").count(), 2);
    }

    #[test]
    fn test_totals() {
        let laptop = alpha_laptop();
        let mobile = beta_mobile();

        let mut cart = Cart::new();
        cart.add_product(&laptop);
        cart.add_product(&mobile);

        assert_eq!(cart.subtotal(), Money::from_cents(150_000));
        assert_eq!(cart.total_discount(), Money::from_cents(12_500));
    }
}
