//! CLI subcommand implementations.

pub mod block;
pub mod report;
pub mod total;
pub mod util;
