//! Scan command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tagweave_api::{Segment, TagAllowList, TagRecord, Tokenizer};

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Restrict the scan to these tags, comma-separated (default: all)
    #[arg(short, long, value_name = "NAMES")]
    pub tags: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per tag: file, name, attributes
    Text,
    /// JSON array of per-file reports
    Json,
}

/// Tags found in one file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    tags: Vec<TagRecord>,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let allow = self
            .tags
            .as_deref()
            .map(TagAllowList::from_comma_list);

        let files = crate::input::resolve_patterns(&self.input)?;
        let mut reports = Vec::new();
        for file in &files {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let segments = Tokenizer::scan_all(&text, allow.clone())
                .with_context(|| format!("Failed to scan {}", file.display()))?;
            let tags: Vec<TagRecord> = segments
                .into_iter()
                .filter_map(|segment| match segment {
                    Segment::Tag(tag) => Some(tag),
                    Segment::Text(_) => None,
                })
                .collect();
            log::info!("{}: {} tag(s)", file.display(), tags.len());
            reports.push(FileReport {
                file: file.display().to_string(),
                tags,
            });
        }

        let rendered = match self.format {
            OutputFormat::Text => render_text(&reports),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&reports)?;
                json.push('\n');
                json
            }
        };
        crate::output::write_output(self.output.as_deref(), &rendered)
    }
}

fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        for tag in &report.tags {
            out.push_str(&report.file);
            out.push('\t');
            out.push_str(&tag.name);
            for (name, value) in tag.attributes.iter() {
                out.push_str(&format!("\t{name}={value:?}"));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rendering_lists_one_tag_per_line() {
        let mut tag = TagRecord::new("pre");
        tag.attributes.insert("content", "a.b");
        let reports = vec![FileReport {
            file: "x.dust".into(),
            tags: vec![tag],
        }];
        assert_eq!(render_text(&reports), "x.dust\tpre\tcontent=\"a.b\"\n");
    }
}
