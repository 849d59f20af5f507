//! Error handling for magisk-setup.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while preparing a module project.
///
/// Some of them abort the whole run (invalid module name, unreadable tree),
/// others are reported per file and the run carries on.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project tree could not be enumerated
    #[error("Failed to walk the project tree: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// The configured module name cannot be used as a Magisk module id
    #[error("Invalid module name '{name}': {reason}.")]
    InvalidModuleName { name: String, reason: String },

    /// Represents errors that occur while loading the setup configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The exclusion set used by the tree walk could not be built
    #[error("Ignore error: {0}.")]
    IgnoreError(String),

    /// A single file could not be processed
    #[error("Error processing file {path}: {message}.")]
    ProcessError { path: String, message: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
