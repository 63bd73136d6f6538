//! Shared utilities for CLI commands.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use timediff_core::LineResult;

/// Reads the whole input from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Logs lines whose end time precedes their start time.
///
/// The negative value is still counted; this only makes it visible.
pub fn warn_negative(lines: &[LineResult]) {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(minutes) = line.duration_minutes().filter(|m| *m < 0) {
            tracing::warn!(entry = idx + 1, minutes, text = line.text(), "negative duration");
        }
    }
}
