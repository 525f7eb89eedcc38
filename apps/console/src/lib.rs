//! # voltshop-console: Interactive Checkout
//!
//! Drives one pass of the store demo: prompt for two products and two
//! customers, show each customer's purchase summary, then export the
//! cart to a text file.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Session                               │
//! │                                                                     │
//! │  read_checkout ──► build Laptop + Mobile ──► Cart (borrows both)    │
//! │        │                                         │                  │
//! │        │                     regular.purchase(cart) ──► stdout      │
//! │        │                     corporate.purchase(cart) ──► stdout    │
//! │        │                                         │                  │
//! │        └───────────────► export_cart ──► cart.txt (overwrite)       │
//! │                                                                     │
//! │  One linear pass. No retries, no branching states.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `run` is generic over its reader and writer so the whole session is
//! testable without a terminal.

pub mod config;
pub mod error;
pub mod export;
pub mod input;

use std::io::{BufRead, Write};

use tracing::{info, warn};

use voltshop_core::{Cart, Product};

use crate::config::ConsoleConfig;
pub use crate::error::{ConsoleError, ConsoleResult};

/// Runs one checkout session against the given reader and writer.
///
/// A failed cart export is reported on the console and logged, but does
/// not fail the run. Input and output failures do.
pub fn run<R, W>(input: &mut R, output: &mut W, config: &ConsoleConfig) -> ConsoleResult<()>
where
    R: BufRead,
    W: Write,
{
    let checkout = input::read_checkout(input, output)?;

    let laptop = Product::from(checkout.laptop);
    let mobile = Product::from(checkout.mobile);

    let mut cart = Cart::new();
    cart.add_product(&laptop);
    cart.add_product(&mobile);
    info!(
        items = cart.item_count(),
        subtotal = %cart.subtotal(),
        discount = %cart.total_discount(),
        "cart assembled"
    );

    write!(output, "{}", checkout.regular.purchase(&cart))?;
    writeln!(output)?;
    write!(output, "{}", checkout.corporate.purchase(&cart))?;

    match export::export_cart(&config.export_path, &cart) {
        Ok(()) => {
            writeln!(output, "Cart data stored into {}", config.export_path.display())?;
        }
        Err(err) => {
            warn!(error = %err, path = %config.export_path.display(), "cart export failed");
            writeln!(output, "Failed to open file for writing")?;
        }
    }
    output.flush()?;

    Ok(())
}
