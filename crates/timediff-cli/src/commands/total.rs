//! Total command: sums every tagged block in a document.

use std::io::Write;

use anyhow::Result;
use timediff_core::{DocumentSummary, summarize_document};

use super::util::warn_negative;

/// One-line document total, e.g. `Total: 225min - 3h45min`.
pub fn format_total(summary: &DocumentSummary) -> String {
    format!(
        "Total: {}min - {}",
        summary.total_minutes, summary.total_readable
    )
}

/// Summarizes `document`, logging any negative entries.
pub fn compute(document: &str, tag: &str) -> DocumentSummary {
    let summary = summarize_document(document, tag);
    for block in &summary.blocks {
        tracing::debug!(
            start_line = block.start_line,
            total_minutes = block.result.total_minutes,
            "block total"
        );
        warn_negative(&block.result.per_line);
    }
    summary
}

/// Runs the total command.
pub fn run<W: Write>(writer: &mut W, document: &str, tag: &str, json: bool) -> Result<()> {
    let summary = compute(document, tag);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(writer, "{}", format_total(&summary))?;
    }

    Ok(())
}
