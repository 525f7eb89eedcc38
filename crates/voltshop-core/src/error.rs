//! # Error Types
//!
//! Domain-specific error types for voltshop-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

/// Core business logic errors.
///
/// The domain has exactly one failure mode of its own: money text that
/// cannot be parsed. Everything else in the crate is total.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary amount could not be parsed from text.
    ///
    /// Raised by [`crate::Money`]'s `FromStr` implementation when console
    /// input is not a plain decimal number with at most two fraction
    /// digits.
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidAmount {
            input: "12.345".to_string(),
            reason: "more than two decimal places".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid amount \"12.345\": more than two decimal places"
        );
    }
}
