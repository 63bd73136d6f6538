//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sum the time ranges in timediff blocks.
///
/// Lines containing `HH:MM - HH:MM` are counted; any other line is kept as
/// commentary.
#[derive(Debug, Parser)]
#[command(name = "timediff", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a single block with per-line durations and a total.
    Block {
        /// File holding the block body. Reads stdin when omitted or `-`.
        path: Option<PathBuf>,

        /// Block tag to strip if the input is a fenced block.
        #[arg(long)]
        tag: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the total over every tagged block in a Markdown document.
    Total {
        /// Markdown document. Reads stdin when `-`.
        path: PathBuf,

        /// Block tag to look for (defaults to the configured tag).
        #[arg(long)]
        tag: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render every tagged block of a document followed by the total.
    Report {
        /// Markdown document. Reads stdin when `-`.
        path: PathBuf,

        /// Block tag to look for (defaults to the configured tag).
        #[arg(long)]
        tag: Option<String>,
    },
}
