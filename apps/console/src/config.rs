//! Console configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There is one setting: where the cart export lands.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default export filename, written to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "cart.txt";

/// Environment variable overriding the export path.
pub const EXPORT_PATH_ENV: &str = "VOLTSHOP_CART_PATH";

/// Console application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Where the cart summary is written. Overwritten on every run.
    pub export_path: PathBuf,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Self {
        Self::from_export_override(env::var(EXPORT_PATH_ENV).ok())
    }

    fn from_export_override(value: Option<String>) -> Self {
        let export_path = value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));
        ConsoleConfig { export_path }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_path() {
        let config = ConsoleConfig::from_export_override(None);
        assert_eq!(config.export_path, PathBuf::from("cart.txt"));
    }

    #[test]
    fn test_env_override_wins() {
        let config = ConsoleConfig::from_export_override(Some("/tmp/receipt.txt".to_string()));
        assert_eq!(config.export_path, PathBuf::from("/tmp/receipt.txt"));
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        let config = ConsoleConfig::from_export_override(Some("   ".to_string()));
        assert_eq!(config.export_path, PathBuf::from("cart.txt"));
    }
}
