//! Cart export.
//!
//! Writes the cart's rendered text to a file. The bytes written are the
//! cart's `Display` output, the same text printed inside the purchase
//! blocks on the console. Cart contents only: no customer header.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use voltshop_core::Cart;

/// Writes the cart summary to `path`, replacing any existing file.
///
/// `File::create` truncates, so a second run fully overwrites the first.
/// The file handle is closed when it goes out of scope.
pub fn export_cart(path: &Path, cart: &Cart<'_>) -> io::Result<()> {
    let rendered = cart.to_string();

    let mut file = File::create(path)?;
    file.write_all(rendered.as_bytes())?;

    debug!(
        path = %path.display(),
        bytes = rendered.len(),
        items = cart.item_count(),
        "cart exported"
    );
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
