//! Duration aggregation over the lines of a block.

use serde::Serialize;

use crate::classify::{LineResult, classify};

/// Classified lines of a block with their summed duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    /// Non-empty input lines, in input order.
    pub per_line: Vec<LineResult>,

    /// Sum of `duration_minutes` over all matched lines.
    pub total_minutes: i64,

    /// `total_minutes` rendered by [`format_minutes`].
    pub total_readable: String,
}

impl AggregateResult {
    pub fn matched_count(&self) -> usize {
        self.per_line
            .iter()
            .filter(|line| matches!(line, LineResult::Matched { .. }))
            .count()
    }
}

/// Formats a minute count as `"{hours}h{minutes}min"`.
///
/// Hours are floored while the minute remainder truncates toward zero,
/// so negative counts carry the sign on both parts: `-90` renders as
/// `"-2h-30min"`.
pub fn format_minutes(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let remainder = minutes % 60;
    format!("{hours}h{remainder}min")
}

/// Classifies every non-empty line and sums the matched durations.
pub fn aggregate<I, S>(lines: I) -> AggregateResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut per_line = Vec::new();
    let mut total_minutes = 0;

    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        let result = classify(line);
        if let Some(minutes) = result.duration_minutes() {
            total_minutes += minutes;
        }
        per_line.push(result);
    }

    tracing::trace!(lines = per_line.len(), total_minutes, "aggregated block");

    AggregateResult {
        per_line,
        total_minutes,
        total_readable: format_minutes(total_minutes),
    }
}

/// Aggregates the body of a block given as one string.
///
/// Lines are split with [`str::lines`], so CRLF input is normalized: a
/// trailing `\r` is not part of the passed-through text, and a line holding
/// only `\r` counts as empty.
pub fn aggregate_text(source: &str) -> AggregateResult {
    aggregate(source.lines())
}
