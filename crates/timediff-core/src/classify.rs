//! Line classification: finding the time-range token in a line of text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::aggregate::format_minutes;
use crate::time::TimeEndpoint;

/// Zero-padded `HH:MM - HH:MM` token. ASCII digits only.
static TIME_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}:[0-9]{2} - [0-9]{2}:[0-9]{2}").unwrap());

/// Outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineResult {
    /// No time-range token; the line is passed through verbatim.
    Unmatched { text: String },
    /// The line contained a token. Only the first one counts.
    Matched { text: String, duration_minutes: i64 },
}

impl LineResult {
    /// The original line text.
    pub fn text(&self) -> &str {
        match self {
            Self::Unmatched { text } | Self::Matched { text, .. } => text,
        }
    }

    pub const fn duration_minutes(&self) -> Option<i64> {
        match self {
            Self::Unmatched { .. } => None,
            Self::Matched {
                duration_minutes, ..
            } => Some(*duration_minutes),
        }
    }

    /// Per-line duration rendered as `"{h}h{m}min"`, if the line matched.
    pub fn readable_duration(&self) -> Option<String> {
        self.duration_minutes().map(format_minutes)
    }
}

/// Returns the endpoints of the first time-range token in `line`.
pub fn find_range(line: &str) -> Option<(TimeEndpoint, TimeEndpoint)> {
    let token = TIME_RANGE_RE.find(line)?.as_str();
    let (left, right) = token.split_once(" - ")?;
    Some((left.parse().ok()?, right.parse().ok()?))
}

/// Classifies a single non-empty line.
///
/// Lines without a token are not an error: free-text commentary is allowed
/// to sit between time entries and comes back as [`LineResult::Unmatched`].
pub fn classify(line: &str) -> LineResult {
    match find_range(line) {
        Some((start, end)) => LineResult::Matched {
            text: line.to_string(),
            duration_minutes: start.minutes_until(end),
        },
        None => LineResult::Unmatched {
            text: line.to_string(),
        },
    }
}
