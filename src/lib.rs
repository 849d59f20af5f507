//! magisk-setup prepares a Magisk module project checked out from a template.
//! It writes the default module scripts, fills in `@(Token)` placeholders
//! across the project tree and swaps the CI workflow for its release variant.

/// Command-line interface module
pub mod cli;

/// Module metadata and the optional setup file
/// Supports setup.json, setup.yml, setup.yaml
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Default module files
/// - service.sh
/// - post-fs-data.sh
/// - customize.sh
/// - changelog.md
pub mod generator;

/// Control directories and files excluded from the tree walk
pub mod ignore;

/// Logging setup
pub mod logger;

/// Per-file transformation, including the release workflow swap
pub mod processor;

/// Literal placeholder substitution
pub mod renderer;

/// Run orchestration
pub mod runner;

/// Project tree enumeration
pub mod tree;
