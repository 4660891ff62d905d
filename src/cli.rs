//! Command-line interface definition using clap.
//!
//! Defines [`Args`], the argument structure of the `convsplit` binary.
//! Converting it into a [`PartitionConfig`] keeps the binary free of any
//! partitioning logic of its own.

use clap::Parser;

use crate::config::{DEFAULT_MAX_DAYS, PartitionConfig};

/// Split chat conversations into separate conversations wherever
/// consecutive messages are more than a number of days apart.
#[derive(Parser, Debug, Clone)]
#[command(name = "convsplit")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    convsplit data/merged/all_conversations.json -o data/merged/partitioned.json
    convsplit all.json -o partitioned.json --max-days 14
    convsplit all.json -o partitioned.json --max-days 0.5 --no-pretty
    convsplit all.json -o partitioned.json --strict --jobs 0")]
pub struct Args {
    /// Input JSON file with conversations to partition
    pub input: String,

    /// Output JSON file path
    #[arg(short, long)]
    pub output: String,

    /// Maximum days between consecutive messages before splitting
    #[arg(long, value_name = "DAYS", default_value_t = DEFAULT_MAX_DAYS)]
    pub max_days: f64,

    /// Don't pretty-print JSON output (smaller file size)
    #[arg(long)]
    pub no_pretty: bool,

    /// Fail if openai_messages doesn't match the messages with content
    #[arg(long)]
    pub strict: bool,

    /// Worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub jobs: usize,
}

impl Args {
    /// Builds the partitioning configuration from the parsed arguments.
    pub fn partition_config(&self) -> PartitionConfig {
        PartitionConfig::new()
            .with_max_days(self.max_days)
            .with_strict(self.strict)
            .with_jobs(self.jobs)
    }
}
