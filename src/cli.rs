//! Command-line interface implementation for magisk-setup.
//! Provides argument parsing using clap.

use clap::Parser;

/// Command-line arguments structure for magisk-setup.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prepares a Magisk module project: generates default files and fills in placeholders",
    long_about = None
)]
pub struct Args {
    /// Print the changes that would be made without touching any file.
    /// Module name validation and default file generation are skipped.
    #[arg(long)]
    pub dry_run: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for unknown arguments
pub fn get_args() -> Args {
    Args::parse()
}
