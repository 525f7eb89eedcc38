//! # Voltshop
//!
//! Interactive electronics-store checkout demo. Reads product and
//! customer details from stdin, prints each customer's purchase summary,
//! and stores the cart in `cart.txt`.

use std::io;

use tracing::info;

use voltshop_console::config::ConsoleConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing. Diagnostics go to stderr so the interactive
    // session on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = ConsoleConfig::load();
    info!(export_path = %config.export_path.display(), "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    voltshop_console::run(&mut stdin.lock(), &mut stdout.lock(), &config)?;

    info!("session complete");
    Ok(())
}
