//! Control paths skipped while walking the project tree.
//! Directories such as `.git` are never descended into, and control files
//! (the setup program itself and the release workflow variant) are never
//! rewritten. Setup files are control files only at the project root.

use crate::constants::{CONFIG_FILES, EXCLUDED_DIRS, RELEASE_WORKFLOW_FILE};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Compiled exclusion rules, matched against bare file names.
#[derive(Debug, Clone)]
pub struct Exclusions {
    dirs: GlobSet,
    files: GlobSet,
    root_files: GlobSet,
}

fn build_set<'a, I>(names: I) -> Result<GlobSet>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = GlobSetBuilder::new();
    for name in names {
        // Names are literal; a `[` in a file name must not open a class.
        let glob = Glob::new(&globset::escape(name))
            .map_err(|e| Error::IgnoreError(format!("invalid exclusion '{}': {}", name, e)))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::IgnoreError(e.to_string()))
}

impl Exclusions {
    /// Builds the exclusion rules for a run.
    ///
    /// # Arguments
    /// * `program_name` - File name of the running setup program, if known
    ///
    /// # Returns
    /// * `Result<Exclusions>` - Rules covering the default control directories
    ///   and files, the root-level setup files and the program itself
    pub fn new(program_name: Option<&str>) -> Result<Self> {
        let mut files: Vec<&str> = vec![RELEASE_WORKFLOW_FILE];
        if let Some(name) = program_name {
            debug!("Excluding setup program '{}' from processing", name);
            files.push(name);
        }

        Ok(Self {
            dirs: build_set(EXCLUDED_DIRS)?,
            files: build_set(files)?,
            root_files: build_set(CONFIG_FILES)?,
        })
    }

    /// Returns the rules for the currently running executable.
    pub fn for_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().ok();
        let program_name = exe
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str());
        Self::new(program_name)
    }

    pub fn is_excluded_dir<P: AsRef<Path>>(&self, name: P) -> bool {
        self.dirs.is_match(name)
    }

    pub fn is_excluded_file<P: AsRef<Path>>(&self, name: P) -> bool {
        self.files.is_match(name)
    }

    /// Control files that only count directly under the project root.
    pub fn is_excluded_root_file<P: AsRef<Path>>(&self, name: P) -> bool {
        self.root_files.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_names() {
        let exclusions = Exclusions::new(Some("setup[1]")).unwrap();
        assert!(exclusions.is_excluded_file("setup[1]"));
        assert!(!exclusions.is_excluded_file("setup1"));
        assert!(exclusions.is_excluded_file("main.yml.release"));
        assert!(!exclusions.is_excluded_file("main.yml"));
        assert!(!exclusions.is_excluded_file("setup.yml"));
        assert!(exclusions.is_excluded_root_file("setup.yml"));
        assert!(exclusions.is_excluded_dir(".git"));
        assert!(!exclusions.is_excluded_dir(".github"));
    }
}
