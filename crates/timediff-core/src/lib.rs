//! Core logic for timediff blocks.
//!
//! This crate contains:
//! - Time endpoints: `HH:MM` wall-clock values with minute-of-day arithmetic
//! - Line classification: locating the first `HH:MM - HH:MM` token in a line
//! - Aggregation: per-line durations, running total, readable formatting
//! - Block discovery: finding tagged fenced blocks inside a Markdown document

mod aggregate;
pub mod block;
mod classify;
mod time;

pub use aggregate::{AggregateResult, aggregate, aggregate_text, format_minutes};
pub use block::{
    Block, BlockSummary, DocumentSummary, extract_blocks, strip_fence, summarize_document,
};
pub use classify::{LineResult, classify, find_range};
pub use time::{TimeEndpoint, TimeParseError};

/// Info-string tag that marks a fenced block as a timediff block.
pub const BLOCK_TAG: &str = "timediff";
