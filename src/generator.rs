//! Default module files written into the project root.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A fixed file written by the generator.
#[derive(Debug, Clone, Copy)]
pub struct Payload {
    pub file_name: &'static str,
    pub content: &'static str,
}

/// The default payload set, in generation order.
pub const DEFAULT_PAYLOADS: [Payload; 4] = [
    Payload { file_name: "service.sh", content: include_str!("../payloads/service.sh") },
    Payload {
        file_name: "post-fs-data.sh",
        content: include_str!("../payloads/post-fs-data.sh"),
    },
    Payload { file_name: "customize.sh", content: include_str!("../payloads/customize.sh") },
    Payload { file_name: "changelog.md", content: include_str!("../payloads/changelog.md") },
];

/// Names of the default payload files.
pub fn payload_names() -> Vec<&'static str> {
    DEFAULT_PAYLOADS.iter().map(|p| p.file_name).collect()
}

/// Writes every default payload into `target_dir`.
///
/// Existing files are overwritten without checking; the content is static so
/// repeated runs converge on the same result.
///
/// # Arguments
/// * `target_dir` - Directory receiving the payload files
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths that were written
///
/// # Errors
/// * `Error::IoError` on the first payload that cannot be written
pub fn generate<P: AsRef<Path>>(target_dir: P) -> Result<Vec<PathBuf>> {
    let target_dir = target_dir.as_ref();
    let mut written = Vec::with_capacity(DEFAULT_PAYLOADS.len());

    for payload in DEFAULT_PAYLOADS {
        let path = target_dir.join(payload.file_name);
        debug!("Writing default file: {}", path.display());
        fs::write(&path, payload.content).map_err(Error::IoError)?;
        written.push(path);
    }

    Ok(written)
}
