//! Per-file transformation of the project tree.
//! Reads a file, swaps in the release workflow where applicable and
//! substitutes placeholders. Writing the result is left to the caller so the
//! same transformation serves both real and preview runs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    constants::{RELEASE_EXTENSION, WORKFLOW_MARKER},
    error::{Error, Result},
    renderer::TemplateRenderer,
};

/// Outcome of the release-variant rule for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseSwap {
    /// The file is not a workflow file
    NotApplicable,
    /// Content was taken from this sibling, which should now be removed
    Swapped(PathBuf),
    /// The file is a workflow file but the sibling does not exist
    Missing(PathBuf),
}

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    pub source: PathBuf,
    /// New content, present only when the file changed
    pub content: Option<String>,
    pub release: ReleaseSwap,
}

/// Decodes bytes as UTF-8, dropping any invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

fn read_text(path: &Path) -> std::io::Result<String> {
    std::fs::read(path).map(|bytes| decode_lossy(&bytes))
}

/// Returns true for files replaced by their release variant.
pub fn is_workflow_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(WORKFLOW_MARKER))
}

/// Path of the release variant for a workflow file: `<path>.release`.
pub fn release_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut release = path.as_ref().as_os_str().to_os_string();
    release.push(RELEASE_EXTENSION);
    PathBuf::from(release)
}

/// Transforms project files with a renderer.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Processor<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Reads and transforms one file without touching the filesystem.
    ///
    /// A missing release variant is not an error: the file's own content is
    /// kept and [`ReleaseSwap::Missing`] is reported.
    ///
    /// # Errors
    /// * `Error::ProcessError` if the file or an existing release variant
    ///   cannot be read
    pub fn process<P: AsRef<Path>>(&self, path: P) -> Result<ProcessResult> {
        let path = path.as_ref();
        let to_error = |e: std::io::Error| Error::ProcessError {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut content = read_text(path).map_err(to_error)?;
        let mut modified = false;
        let mut release = ReleaseSwap::NotApplicable;

        if is_workflow_file(path) {
            let sibling = release_path(path);
            match read_text(&sibling) {
                Ok(release_content) => {
                    debug!("Using release workflow {}", sibling.display());
                    content = release_content;
                    modified = true;
                    release = ReleaseSwap::Swapped(sibling);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    release = ReleaseSwap::Missing(sibling);
                }
                Err(e) => return Err(to_error(e)),
            }
        }

        let rendered = self.renderer.render(&content);
        let content = if modified || rendered.modified { Some(rendered.content) } else { None };

        Ok(ProcessResult { source: path.to_path_buf(), content, release })
    }
}
