//! Run orchestration: validation, default file generation, the tree walk and
//! the final report.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::{
    config::ModuleConfig,
    error::{Error, Result},
    generator::{generate, payload_names},
    ignore::Exclusions,
    processor::{ProcessResult, Processor, ReleaseSwap},
    renderer::{TokenMap, TokenRenderer},
    tree::enumerate,
};

/// Options controlling a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Preview changes on the console instead of touching the filesystem
    pub dry_run: bool,
}

/// What a run did, file by file.
#[derive(Debug, Default)]
pub struct Report {
    /// Files written back (or previewed, in a dry run)
    pub modified: Vec<PathBuf>,
    /// Files skipped because of an error, with the error message
    pub failed: Vec<(PathBuf, String)>,
    /// Release variants that were expected but not found
    pub missing_releases: Vec<PathBuf>,
    /// Default files generated before the walk
    pub generated: Vec<PathBuf>,
}

/// Writes the transformed file, or prints it when previewing.
fn apply<W: Write>(result: &ProcessResult, dry_run: bool, out: &mut W) -> Result<bool> {
    let Some(content) = &result.content else {
        return Ok(false);
    };

    if dry_run {
        writeln!(out, "Modified file: {}", result.source.display())?;
        writeln!(out, "{}", content)?;
        writeln!(out)?;
        return Ok(true);
    }

    fs::write(&result.source, content).map_err(|e| Error::ProcessError {
        path: result.source.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(true)
}

/// Deletes a consumed release variant.
fn remove_release(sibling: &Path) -> Result<()> {
    debug!("Removing release workflow {}", sibling.display());
    fs::remove_file(sibling).map_err(|e| Error::ProcessError {
        path: sibling.display().to_string(),
        message: e.to_string(),
    })
}

/// Prints the closing summary shown after every run.
pub fn print_summary<W: Write>(out: &mut W, config: &ModuleConfig) -> Result<()> {
    writeln!(out, "{} module setup completed successfully!", config.display_name)?;
    writeln!(out, "Module files created: {}", payload_names().join(", "))?;
    writeln!(out, "After packing the module into a ZIP, install it with Magisk Manager.")?;
    Ok(())
}

/// Prepares the module project under `root`.
///
/// # Arguments
/// * `config` - Module metadata substituted into the project
/// * `root` - Project root directory
/// * `exclusions` - Control paths skipped by the walk
/// * `options` - Run options
/// * `out` - Console sink for previews and the summary
///
/// # Returns
/// * `Result<Report>` - Per-file outcome of the run
///
/// # Flow
/// 1. Validates the module name (skipped in a dry run)
/// 2. Writes the default files (skipped in a dry run)
/// 3. Enumerates the tree; failure aborts before any file is transformed
/// 4. Transforms every file, logging and skipping per-file failures. A
///    release variant that cannot be deleted is reported as failed on its
///    own path; the rewritten workflow still counts as modified
/// 5. Prints the summary
///
/// # Errors
/// * `Error::InvalidModuleName` if validation fails outside a dry run
/// * `Error::IoError` if a default file cannot be written
/// * `Error::WalkError` if the tree cannot be enumerated
pub fn run<P: AsRef<Path>, W: Write>(
    config: &ModuleConfig,
    root: P,
    exclusions: &Exclusions,
    options: &RunOptions,
    out: &mut W,
) -> Result<Report> {
    let root = root.as_ref();
    let mut report = Report::default();

    if options.dry_run {
        info!("Dry run: no files will be changed");
    } else {
        config.validate()?;
        report.generated = generate(root)?;
    }

    let files = enumerate(root, exclusions)?;
    debug!("Found {} files under {}", files.len(), root.display());

    let renderer = TokenRenderer::new(TokenMap::from(config));
    let processor = Processor::new(&renderer);

    for path in files {
        let result = match processor.process(&path) {
            Ok(result) => result,
            Err(e) => {
                error!("{}", e);
                report.failed.push((path, e.to_string()));
                continue;
            }
        };

        if let ReleaseSwap::Missing(sibling) = &result.release {
            warn!("Release file {} not found, skipping", sibling.display());
            report.missing_releases.push(sibling.clone());
        }

        match apply(&result, options.dry_run, out) {
            Ok(true) => {
                debug!("Modified file: {}", path.display());
                report.modified.push(path);
            }
            Ok(false) => continue,
            Err(e) => {
                error!("{}", e);
                report.failed.push((path, e.to_string()));
                continue;
            }
        }

        if let (false, ReleaseSwap::Swapped(sibling)) = (options.dry_run, &result.release) {
            if let Err(e) = remove_release(sibling) {
                error!("{}", e);
                report.failed.push((sibling.clone(), e.to_string()));
            }
        }
    }

    print_summary(out, config)?;
    Ok(report)
}
