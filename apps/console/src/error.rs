//! # Console Error Type
//!
//! Unified error type for the interactive session. Everything that can
//! interrupt a run funnels into one enum so `run` has a single error
//! channel to `main`.

use thiserror::Error;

use voltshop_core::CoreError;

/// Errors raised while running the console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Typed input could not be parsed (bad price text).
    #[error("input error: {0}")]
    Input(#[from] CoreError),

    /// Reading a prompt answer or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let core = CoreError::InvalidAmount {
            input: "abc".to_string(),
            reason: "expected a decimal number".to_string(),
        };
        let err: ConsoleError = core.into();
        assert!(matches!(err, ConsoleError::Input(_)));
        assert_eq!(
            err.to_string(),
            "input error: invalid amount \"abc\": expected a decimal number"
        );
    }
}
