//! Common constants used throughout magisk-setup.

/// Supported setup configuration file names, tried in this order
pub const CONFIG_FILES: [&str; 3] = ["setup.json", "setup.yml", "setup.yaml"];

/// Module name left behind by the upstream template; must be changed before a real run
pub const TEMPLATE_MODULE_NAME: &str = "Magisk-Module-Template";

/// Directories never descended into: version control and IDE metadata
pub const EXCLUDED_DIRS: [&str; 2] = [".git", ".vs"];

/// Suffix of the CI workflow file replaced by its release variant
pub const WORKFLOW_MARKER: &str = "main.yml";

/// Extension appended to a workflow path to locate its release variant
pub const RELEASE_EXTENSION: &str = ".release";

/// Release variant of the workflow; consumed, never substituted on its own
pub const RELEASE_WORKFLOW_FILE: &str = "main.yml.release";
