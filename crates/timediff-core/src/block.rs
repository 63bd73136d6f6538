//! Discovery of tagged fenced blocks in Markdown documents.
//!
//! A timediff block is a fenced code block whose info string starts with
//! the block tag:
//!
//! ````text
//! ```timediff
//! 09:00 - 10:30 planning
//! 10:30 - 12:00
//! ```
//! ````
//!
//! Fences follow the `CommonMark` rules that matter here: three or more
//! backticks or tildes, at most three spaces of indentation, and a closing
//! fence of the same character that is at least as long as the opening one.

use serde::Serialize;

use crate::aggregate::{AggregateResult, aggregate, format_minutes};

/// A fenced block found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based line number of the opening fence.
    pub start_line: usize,

    /// 1-based line number of the closing fence, or of the last line of
    /// the document when the block is left open.
    pub end_line: usize,

    /// Text between the fences.
    pub body: &'a str,
}

impl<'a> Block<'a> {
    pub fn lines(&self) -> std::str::Lines<'a> {
        self.body.lines()
    }

    pub fn aggregate(&self) -> AggregateResult {
        aggregate(self.lines())
    }
}

/// Aggregate for one block of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    pub start_line: usize,
    #[serde(flatten)]
    pub result: AggregateResult,
}

/// Per-block aggregates plus the document-wide total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub blocks: Vec<BlockSummary>,
    pub total_minutes: i64,
    pub total_readable: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence<'a> {
    marker: char,
    len: usize,
    info: &'a str,
}

/// Parses a fence line, returning `None` for ordinary lines.
fn parse_fence(line: &str) -> Option<Fence<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }

    let rest = &line[indent..];
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.len() - rest.trim_start_matches(marker).len();
    if len < 3 {
        return None;
    }

    let info = rest[len..].trim();
    if marker == '`' && info.contains('`') {
        return None;
    }

    Some(Fence { marker, len, info })
}

fn closes(fence: &Fence<'_>, candidate: &Fence<'_>) -> bool {
    candidate.marker == fence.marker && candidate.len >= fence.len && candidate.info.is_empty()
}

fn has_tag(fence: &Fence<'_>, tag: &str) -> bool {
    fence.info.split_whitespace().next() == Some(tag)
}

/// Finds every fenced block in `document` whose info string starts with `tag`.
///
/// The tag must equal the whole first word of the info string, so
/// `timediffs` does not match `timediff`. Tilde fences count as well as
/// backtick fences. Blocks with other tags are skipped whole. A block left
/// open runs to the end of the document.
pub fn extract_blocks<'a>(document: &'a str, tag: &str) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    // (opening fence, its line number, byte offset where the body starts)
    let mut open: Option<(Fence<'a>, usize, usize)> = None;
    let mut offset = 0;
    let mut line_count = 0;

    for (idx, line) in document.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += line.len();
        line_count = idx + 1;

        let Some(fence) = parse_fence(line) else {
            continue;
        };

        match open {
            None => open = Some((fence, idx + 1, offset)),
            Some((opening, start_line, body_start)) if closes(&opening, &fence) => {
                if has_tag(&opening, tag) {
                    blocks.push(Block {
                        start_line,
                        end_line: idx + 1,
                        body: &document[body_start..line_start],
                    });
                }
                open = None;
            }
            Some(_) => {}
        }
    }

    match open {
        Some((opening, start_line, body_start)) if has_tag(&opening, tag) => {
            blocks.push(Block {
                start_line,
                end_line: line_count,
                body: &document[body_start..],
            });
        }
        _ => {}
    }

    tracing::debug!(count = blocks.len(), tag, "extracted blocks");
    blocks
}

/// Returns the body of `text` if it is a single block tagged `tag`,
/// otherwise `text` unchanged.
///
/// Only blank lines may surround the block; any other text before or after
/// the fences keeps the whole input as the body.
pub fn strip_fence<'a>(text: &'a str, tag: &str) -> &'a str {
    let is_blank = |line: &str| line.trim().is_empty();
    let first_line = text.lines().position(|line| !is_blank(line));
    match extract_blocks(text, tag).as_slice() {
        [block]
            if first_line.map(|idx| idx + 1) == Some(block.start_line)
                && text.lines().skip(block.end_line).all(is_blank) =>
        {
            block.body
        }
        _ => text,
    }
}

/// Aggregates every tagged block of a document and sums their totals.
pub fn summarize_document(document: &str, tag: &str) -> DocumentSummary {
    let blocks: Vec<BlockSummary> = extract_blocks(document, tag)
        .into_iter()
        .map(|block| BlockSummary {
            start_line: block.start_line,
            result: block.aggregate(),
        })
        .collect();

    let total_minutes = blocks.iter().map(|b| b.result.total_minutes).sum();
    tracing::debug!(blocks = blocks.len(), total_minutes, "summarized document");

    DocumentSummary {
        blocks,
        total_minutes,
        total_readable: format_minutes(total_minutes),
    }
}
