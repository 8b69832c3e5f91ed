//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `tickid`.
#[derive(Debug, Parser)]
#[command(
    name = "tickid",
    version,
    about = "Generate and inspect time-ordered unique ids"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate ids, one per line.
    Generate {
        /// How many ids to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Node address to stamp on ids. Defaults to `TICKID_NODE_ADDRESS`,
        /// then to the host's hardware address.
        #[arg(long, allow_negative_numbers = true)]
        node_address: Option<i64>,
        /// Read clock values from a recorded clock cassette instead of the system clock.
        #[arg(long, value_name = "CASSETTE")]
        replay_clock: Option<PathBuf>,
        /// Echo each id to stderr as an `audit:` line.
        #[arg(long)]
        audit: bool,
    },
    /// Show the fields of an id and the instant it was generated.
    Inspect {
        /// The id in `timestamp-node-sequence` form.
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Read ids from stdin and print them in sorted order.
    Sort,
}
