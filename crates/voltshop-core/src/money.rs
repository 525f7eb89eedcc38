//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    $999.99 is stored as 99999 cents                                 │
//! │    Discounts are computed in integer math and rounded to the        │
//! │    nearest cent, so rendered prices never grow float artifacts      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use voltshop_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Or parse console input
//! let typed: Money = "10.99".parse().unwrap();
//! assert_eq!(price, typed);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::product::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Nothing rejects a negative price at the input
///   edge, so the math must tolerate one
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use voltshop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates a discount amount at the given rate.
    ///
    /// Integer math throughout: `(cents * bps + 5000) / 10000`, which
    /// rounds half away from zero to the nearest cent. The result is the
    /// amount taken off, not the reduced price.
    ///
    /// ## Example
    /// ```rust
    /// use voltshop_core::money::Money;
    /// use voltshop_core::product::DiscountRate;
    ///
    /// let price = Money::from_cents(100_000); // $1000.00
    /// let rate = DiscountRate::from_bps(1000); // 10%
    ///
    /// assert_eq!(price.discount(rate), Money::from_cents(10_000)); // $100.00
    /// ```
    pub fn discount(&self, rate: DiscountRate) -> Money {
        // i128 keeps the intermediate product from overflowing.
        // Rounding follows the sign so that -$100.00 at 5% is -$5.00
        // rather than one cent short of it.
        let scaled = self.0 as i128 * rate.bps() as i128;
        let rounding = if scaled < 0 { -5000 } else { 5000 };
        let discount_cents = (scaled + rounding) / 10000;
        Money::from_cents(discount_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders `$D.CC` with two fraction digits, sign first.
///
/// This is the exact text used in product blocks and the cart export,
/// so `"Price: $1000.00"` comes straight from here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a plain decimal amount: an optional sign, digits, and at most
/// two fraction digits (`"1000"`, `"999.99"`, `"-5"`, `".50"`).
///
/// Anything else is a [`CoreError::InvalidAmount`]. Amounts with three or
/// more fraction digits are rejected rather than rounded, since they are
/// not representable in whole cents.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidAmount {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let raw = s.trim();
        let negative = raw.starts_with('-');
        let unsigned = raw
            .strip_prefix('-')
            .or_else(|| raw.strip_prefix('+'))
            .unwrap_or(raw);

        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(invalid("expected a decimal number"));
        }
        if !major.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a decimal number"));
        }
        if minor.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }
        if !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a decimal number"));
        }

        let dollars: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| invalid("amount out of range"))?
        };
        // "9.5" means 50 cents, not 5
        let cents_frac: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().unwrap_or(0) * 10,
            _ => minor.parse::<i64>().unwrap_or(0),
        };

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_frac))
            .ok_or_else(|| invalid("amount out of range"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_parse_integer_amount() {
        let money: Money = "1000".parse().unwrap();
        assert_eq!(money.cents(), 100_000);
    }

    #[test]
    fn test_parse_two_decimal_amount() {
        let money: Money = "999.99".parse().unwrap();
        assert_eq!(money.cents(), 99_999);
    }

    #[test]
    fn test_parse_single_decimal_means_tens_of_cents() {
        let money: Money = "9.5".parse().unwrap();
        assert_eq!(money.cents(), 950);
    }

    #[test]
    fn test_parse_bare_fraction() {
        let money: Money = ".50".parse().unwrap();
        assert_eq!(money.cents(), 50);
    }

    #[test]
    fn test_parse_negative_and_zero_accepted() {
        let negative: Money = "-5".parse().unwrap();
        assert_eq!(negative.cents(), -500);

        let zero: Money = "0".parse().unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let money: Money = "  12.50 ".parse().unwrap();
        assert_eq!(money.cents(), 1250);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("12,50".parse::<Money>().is_err());
        assert!("$10".parse::<Money>().is_err());
    }

    #[test]
    fn test_discount_ten_percent() {
        let price = Money::from_cents(100_000); // $1000.00
        let discount = price.discount(DiscountRate::from_bps(1000));
        assert_eq!(discount.cents(), 10_000); // $100.00
    }

    #[test]
    fn test_discount_five_percent() {
        let price = Money::from_cents(50_000); // $500.00
        let discount = price.discount(DiscountRate::from_bps(500));
        assert_eq!(discount.cents(), 2_500); // $25.00
    }

    #[test]
    fn test_discount_rounds_half_up_to_nearest_cent() {
        // 10% of $9.99 = 99.9 cents, rounds to $1.00
        let price = Money::from_cents(999);
        let discount = price.discount(DiscountRate::from_bps(1000));
        assert_eq!(discount.cents(), 100);

        // 5% of $0.49 = 2.45 cents, rounds to 2 cents
        let price = Money::from_cents(49);
        let discount = price.discount(DiscountRate::from_bps(500));
        assert_eq!(discount.cents(), 2);
    }
}
