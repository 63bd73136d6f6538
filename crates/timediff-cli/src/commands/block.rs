//! Block command: renders one block with per-line durations.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use timediff_core::{AggregateResult, LineResult, aggregate_text, format_minutes, strip_fence};

use super::util::warn_negative;

/// Formats a block the way it is shown in a rendered note.
///
/// Matched lines get their duration appended after a tab; other lines are
/// echoed unchanged. The last line carries the block total.
pub fn format_block(result: &AggregateResult) -> String {
    let mut output = String::new();

    for line in &result.per_line {
        match line {
            LineResult::Matched {
                text,
                duration_minutes,
            } => {
                let readable = format_minutes(*duration_minutes);
                writeln!(output, "{text}\t{readable}").unwrap();
            }
            LineResult::Unmatched { text } => {
                writeln!(output, "{text}").unwrap();
            }
        }
    }

    writeln!(output, "Total: {}", result.total_readable).unwrap();
    output
}

/// Aggregates `source` as a single block, unwrapping it first if it is
/// itself a fenced block tagged `tag`.
pub fn compute(source: &str, tag: &str) -> AggregateResult {
    let result = aggregate_text(strip_fence(source, tag));
    warn_negative(&result.per_line);
    result
}

/// Runs the block command.
pub fn run<W: Write>(writer: &mut W, source: &str, tag: &str, json: bool) -> Result<()> {
    let result = compute(source, tag);
    tracing::debug!(
        lines = result.per_line.len(),
        matched = result.matched_count(),
        total_minutes = result.total_minutes,
        "computed block"
    );

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write!(writer, "{}", format_block(&result))?;
    }

    Ok(())
}
