//! # Product Types
//!
//! The store catalog: laptops and mobiles, each with a fixed discount
//! rate.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Product                                    │
//! │                                                                     │
//! │  ┌──────────────────┐            ┌──────────────────┐               │
//! │  │     Laptop       │            │     Mobile       │               │
//! │  │  ──────────────  │            │  ──────────────  │               │
//! │  │  name            │            │  name            │               │
//! │  │  price (Money)   │            │  price (Money)   │               │
//! │  │  brand           │            │  manufacturer    │               │
//! │  │  discount: 10%   │            │  discount: 5%    │               │
//! │  └──────────────────┘            └──────────────────┘               │
//! │                                                                     │
//! │  The variant set is closed: adding a product kind is a new enum     │
//! │  variant, not a runtime registration.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{LAPTOP_DISCOUNT_BPS, MOBILE_DISCOUNT_BPS};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 500 bps = 5%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Laptop
// =============================================================================

/// A laptop in the catalog.
///
/// Fields are set once at construction and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laptop {
    /// Display name shown on console and in the export file.
    pub name: String,

    /// List price. Whatever the input layer parsed is accepted,
    /// including zero and negative amounts.
    pub price: Money,

    /// Brand line appended to the display block.
    pub brand: String,
}

impl Laptop {
    /// Creates a laptop. No validation is performed here.
    pub fn new(name: impl Into<String>, price: Money, brand: impl Into<String>) -> Self {
        Laptop {
            name: name.into(),
            price,
            brand: brand.into(),
        }
    }

    /// The fixed laptop rate (10%).
    #[inline]
    pub const fn discount_rate() -> DiscountRate {
        DiscountRate::from_bps(LAPTOP_DISCOUNT_BPS)
    }

    /// Discount amount at the laptop rate.
    pub fn discount(&self) -> Money {
        self.price.discount(Self::discount_rate())
    }
}

/// Three lines: name, price, brand. Each newline-terminated.
impl fmt::Display for Laptop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "Brand: {}", self.brand)
    }
}

// =============================================================================
// Mobile
// =============================================================================

/// A mobile phone in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mobile {
    pub name: String,
    pub price: Money,

    /// Manufacturer line appended to the display block.
    pub manufacturer: String,
}

impl Mobile {
    /// Creates a mobile. No validation is performed here.
    pub fn new(name: impl Into<String>, price: Money, manufacturer: impl Into<String>) -> Self {
        Mobile {
            name: name.into(),
            price,
            manufacturer: manufacturer.into(),
        }
    }

    /// The fixed mobile rate (5%).
    #[inline]
    pub const fn discount_rate() -> DiscountRate {
        DiscountRate::from_bps(MOBILE_DISCOUNT_BPS)
    }

    /// Discount amount at the mobile rate.
    pub fn discount(&self) -> Money {
        self.price.discount(Self::discount_rate())
    }
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "Manufacturer: {}", self.manufacturer)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store: the closed set of catalog variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Product {
    Laptop(Laptop),
    Mobile(Mobile),
}

impl Product {
    /// The product's display name.
    pub fn name(&self) -> &str {
        match self {
            Product::Laptop(laptop) => &laptop.name,
            Product::Mobile(mobile) => &mobile.name,
        }
    }

    /// The product's list price.
    pub fn price(&self) -> Money {
        match self {
            Product::Laptop(laptop) => laptop.price,
            Product::Mobile(mobile) => mobile.price,
        }
    }

    /// The variant's fixed discount rate.
    pub fn discount_rate(&self) -> DiscountRate {
        match self {
            Product::Laptop(_) => Laptop::discount_rate(),
            Product::Mobile(_) => Mobile::discount_rate(),
        }
    }

    /// Discount amount at the variant's rate.
    pub fn discount(&self) -> Money {
        self.price().discount(self.discount_rate())
    }
}

impl From<Laptop> for Product {
    fn from(laptop: Laptop) -> Self {
        Product::Laptop(laptop)
    }
}

impl From<Mobile> for Product {
    fn from(mobile: Mobile) -> Self {
        Product::Mobile(mobile)
    }
}

/// Delegates to the variant's display block.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Laptop(laptop) => laptop.fmt(f),
            Product::Mobile(mobile) => mobile.fmt(f),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
