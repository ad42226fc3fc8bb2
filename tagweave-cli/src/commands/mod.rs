//! CLI command implementations

use clap::Subcommand;

pub mod process;
pub mod scan;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve tags in template files against a content store
    Process(process::ProcessArgs),

    /// List the tags found in template files without resolving them
    Scan(scan::ScanArgs),
}

/// Initialize logging from the shared verbosity flags.
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}
