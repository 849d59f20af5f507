use crate::error::Result;
use crate::ignore::Exclusions;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Dangling links and link cycles are skipped rather than failing the walk.
fn is_skippable_link(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    let dangling = err
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound);
    dangling && err.path().is_some_and(|p| p.symlink_metadata().is_ok())
}

/// Lists every regular file below `root` that is not a control path.
///
/// Excluded directories are pruned without being read. Setup files are
/// skipped only directly under `root`. Symbolic links are followed, so a
/// linked directory is walked like a real one; dangling links and link
/// cycles are skipped with a warning. Any directory that
/// cannot be listed fails the whole enumeration; callers never see a partial
/// tree.
///
/// # Arguments
/// * `root` - Project root directory
/// * `exclusions` - Control directories and files to skip
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Files sorted by name within each directory
pub fn enumerate<P: AsRef<Path>>(root: P, exclusions: &Exclusions) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root.as_ref())
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let pruned = entry.depth() > 0
                && entry.file_type().is_dir()
                && exclusions.is_excluded_dir(entry.file_name());
            if pruned {
                debug!("Skipping directory {}", entry.path().display());
            }
            !pruned
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_skippable_link(&err) => {
                warn!("Skipping link: {}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if exclusions.is_excluded_file(entry.file_name())
            || (entry.depth() == 1 && exclusions.is_excluded_root_file(entry.file_name()))
        {
            debug!("Skipping control file {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}
