use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use day7::{Config, Disk, DEFAULT_BOUND, DEFAULT_CAPACITY, DEFAULT_NEEDED};

#[derive(Parser, Debug, Clone)]
#[command(about = "Sizes the directories of a shell transcript")]
pub struct Cli {
    /// Transcript to read, stdin when omitted
    pub input: Option<PathBuf>,

    /// Largest directory size counted into the first answer
    #[arg(long, default_value_t = DEFAULT_BOUND)]
    pub bound: u64,

    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: u64,

    /// Free space required after deleting a directory
    #[arg(long, default_value_t = DEFAULT_NEEDED)]
    pub needed: u64,

    /// Print the reconstructed tree before the answers
    #[arg(long)]
    pub tree: bool,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, short, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            bound: cli.bound,
            disk: Disk {
                capacity: cli.capacity,
                needed: cli.needed,
            },
        }
    }
}
