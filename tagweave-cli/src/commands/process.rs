//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tagweave_api::{Config, ContentResolver, ContentStore, TagAllowList, TemplateProcessor};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Content store JSON file
    #[arg(short, long, value_name = "FILE")]
    pub content: PathBuf,

    /// Output file (default: stdout; multiple inputs are concatenated)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Tags to resolve, comma-separated (default: pre)
    #[arg(short, long, value_name = "NAMES")]
    pub tags: Option<String>,

    /// Read chunk size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = 8192)]
    pub chunk_size: usize,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);
        log::debug!("arguments: {self:?}");

        let files = crate::input::resolve_patterns(&self.input)?;
        let store = ContentStore::from_file(&self.content)
            .with_context(|| format!("Failed to load content store {}", self.content.display()))?;

        let mut resolver = ContentResolver::new(store);
        if let Some(spec) = &self.tags {
            resolver = resolver.with_tags(Some(TagAllowList::from_comma_list(spec)));
        }

        let config = Config::builder().chunk_size(self.chunk_size).build()?;
        let processor = TemplateProcessor::with_config(resolver, config);

        let mut rendered = String::new();
        for file in &files {
            log::info!("processing {}", file.display());
            let output = processor
                .process_file(file)
                .await
                .with_context(|| format!("Failed to process {}", file.display()))?;
            log::debug!(
                "{}: {} tag(s), {} chunk(s), {} ms",
                file.display(),
                output.metadata.tags_resolved,
                output.metadata.chunks,
                output.metadata.processing_time_ms
            );
            rendered.push_str(&output.text);
        }

        crate::output::write_output(self.output.as_deref(), &rendered)
    }
}
