//! Output writing helpers

use crate::error::CliResult;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Write rendered output to a file, or to stdout when no target is given.
pub fn write_output(target: Option<&Path>, rendered: &str) -> CliResult<()> {
    match target {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rendered.as_bytes())?;
            lock.flush()?;
            Ok(())
        }
    }
}
