//! magisk-setup's main application entry point.
//! Parses arguments, loads the module configuration and runs the setup in the
//! current directory.

use std::path::Path;

use magisk_setup::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    ignore::Exclusions,
    logger::init_logger,
    runner::{run, RunOptions},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger();

    if let Err(err) = execute(args) {
        default_error_handler(err);
    }
}

fn execute(args: Args) -> Result<()> {
    let root = Path::new(".");
    let config = get_config(root)?;
    let exclusions = Exclusions::for_current_exe()?;
    let options = RunOptions { dry_run: args.dry_run };

    let report = run(&config, root, &exclusions, &options, &mut std::io::stdout().lock())?;
    if !report.failed.is_empty() {
        log::warn!("{} file(s) could not be processed", report.failed.len());
    }
    Ok(())
}
