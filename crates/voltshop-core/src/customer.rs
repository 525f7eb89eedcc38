//! # Customer Types
//!
//! Regular and corporate customers. A customer can render its own
//! identity block and a purchase summary for a cart.
//!
//! `purchase` reads the cart and returns text. It records nothing: no
//! inventory change, no order, no ownership transfer. Calling it twice
//! with the same cart yields the same text twice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

// =============================================================================
// Regular Customer
// =============================================================================

/// A walk-in customer identified by a street address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegularCustomer {
    pub name: String,
    pub address: String,
}

impl RegularCustomer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        RegularCustomer {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Renders the purchase summary: identity header, then the cart.
    pub fn purchase(&self, cart: &Cart<'_>) -> String {
        format!(
            "Regular Customer: {}\nAddress: {}\nPurchased Products:\n{}",
            self.name, self.address, cart
        )
    }
}

impl fmt::Display for RegularCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)
    }
}

// =============================================================================
// Corporate Customer
// =============================================================================

/// A business customer identified by a company name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorporateCustomer {
    pub name: String,
    pub company_name: String,
}

impl CorporateCustomer {
    pub fn new(name: impl Into<String>, company_name: impl Into<String>) -> Self {
        CorporateCustomer {
            name: name.into(),
            company_name: company_name.into(),
        }
    }

    /// Renders the purchase summary: identity header, then the cart.
    pub fn purchase(&self, cart: &Cart<'_>) -> String {
        format!(
            "Corporate Customer: {}\nCompany Name: {}\nPurchased Products:\n{}",
            self.name, self.company_name, cart
        )
    }
}

impl fmt::Display for CorporateCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Company Name: {}", self.company_name)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer: the closed set of customer variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Customer {
    Regular(RegularCustomer),
    Corporate(CorporateCustomer),
}

impl Customer {
    /// The customer's name.
    pub fn name(&self) -> &str {
        match self {
            Customer::Regular(regular) => &regular.name,
            Customer::Corporate(corporate) => &corporate.name,
        }
    }

    /// Renders the variant's purchase summary for the cart.
    pub fn purchase(&self, cart: &Cart<'_>) -> String {
        match self {
            Customer::Regular(regular) => regular.purchase(cart),
            Customer::Corporate(corporate) => corporate.purchase(cart),
        }
    }
}

impl From<RegularCustomer> for Customer {
    fn from(regular: RegularCustomer) -> Self {
        Customer::Regular(regular)
    }
}

impl From<CorporateCustomer> for Customer {
    fn from(corporate: CorporateCustomer) -> Self {
        Customer::Corporate(corporate)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Customer::Regular(regular) => regular.fmt(f),
            Customer::Corporate(corporate) => corporate.fmt(f),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
