//! # voltshop-core: Pure Business Logic for Voltshop
//!
//! This crate is the **heart** of Voltshop. It contains the product
//! catalog types, the shopping cart, the customer types, and all money
//! math as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Voltshop Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  apps/console (voltshop bin)                  │ │
//! │  │    prompts ──► checkout ──► purchase output ──► cart export   │ │
//! │  └────────────────────────────┬──────────────────────────────────┘ │
//! │                               │                                    │
//! │  ┌────────────────────────────▼──────────────────────────────────┐ │
//! │  │              ★ voltshop-core (THIS CRATE) ★                   │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────┐        │ │
//! │  │   │  money  │  │ product │  │  cart   │  │ customer │        │ │
//! │  │   │  Money  │  │ Laptop  │  │  Cart   │  │ Regular  │        │ │
//! │  │   │Discount │  │ Mobile  │  │ render  │  │Corporate │        │ │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └──────────┘        │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO FLOATS IN MONEY MATH • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic and parsing
//! - [`product`] - Product variants (Laptop, Mobile) and discount rates
//! - [`cart`] - Shopping cart holding borrowed products
//! - [`customer`] - Customer variants (Regular, Corporate)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Console, file system, and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **One Rendering Path**: `Display` output is the text written to both
//!    console and file, so the two can never drift apart
//!
//! ## Example Usage
//!
//! ```rust
//! use voltshop_core::{Cart, Laptop, Money, Product};
//!
//! let laptop = Product::from(Laptop::new("Alpha", Money::from_cents(100_000), "BrandX"));
//!
//! let mut cart = Cart::new();
//! cart.add_product(&laptop);
//!
//! // 10% off a $1000.00 laptop
//! assert_eq!(laptop.discount(), Money::from_cents(10_000));
//! assert!(cart.to_string().contains("Discounted Price: $100.00"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use voltshop_core::Money` instead of
// `use voltshop_core::money::Money`

pub use cart::Cart;
pub use customer::{CorporateCustomer, Customer, RegularCustomer};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use product::{DiscountRate, Laptop, Mobile, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discount rate for laptops, in basis points (1000 = 10%).
///
/// The rate set is fixed at compile time. New product kinds get a new
/// variant and a new constant here.
pub const LAPTOP_DISCOUNT_BPS: u32 = 1_000;

/// Discount rate for mobiles, in basis points (500 = 5%).
pub const MOBILE_DISCOUNT_BPS: u32 = 500;
