//! Tagweave command-line interface
//!
//! Resolves `{@tag .../}` constructs in template files against a JSON
//! content store, or lists the tags a template contains.

use clap::Parser;
use tagweave_cli::commands::Commands;

/// Template tag precompiler
#[derive(Debug, Parser)]
#[command(name = "tagweave", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(args.execute()),
        Commands::Scan(args) => args.execute(),
    }
}
