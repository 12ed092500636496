//! Version command

use anyhow::Result;
use colored::*;

/// Print the CLI version
pub fn print_version() -> Result<()> {
    println!(
        "{} {}",
        "nixopus".bold(),
        env!("CARGO_PKG_VERSION").cyan()
    );
    Ok(())
}
