use std::fmt;

use anyhow::{Context, Result};
use tracing::info;

mod config;
mod disk;
mod line;
mod sizes;
mod tree;

pub use config::{Config, DEFAULT_BOUND, DEFAULT_CAPACITY, DEFAULT_NEEDED};
pub use disk::Disk;
pub use line::{CdTarget, Line};
pub use sizes::{SizeLimits, SizeSummary};
pub use tree::{DirectoryNode, NavigationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub used: u64,
    pub bounded_sum: u64,
    /// `None` when no directory is big enough.
    pub min_candidate: Option<u64>,
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sol 1: {}", self.bounded_sum)?;
        match self.min_candidate {
            Some(size) => write!(f, "Sol 2: {size}"),
            None => write!(f, "Sol 2: not found"),
        }
    }
}

pub fn answers(root: &DirectoryNode, config: &Config) -> Answers {
    let used = root.total_size();
    let to_free = config.disk.space_to_free(used);

    let summary = root.summarize(&SizeLimits {
        at_most: config.bound,
        at_least: Some(to_free),
    });

    info!(used, to_free, ?summary, "sized directory tree");

    Answers {
        used,
        bounded_sum: summary.bounded_sum,
        min_candidate: summary.min_candidate,
    }
}

pub fn solve(input: impl Iterator<Item = impl Into<String>>, config: &Config) -> Answers {
    answers(&DirectoryNode::from_transcript(input), config)
}

pub fn size_smallest(input: impl Iterator<Item = impl Into<String>>, biggest: u64) -> u64 {
    DirectoryNode::from_transcript(input)
        .summarize(&SizeLimits {
            at_most: biggest,
            at_least: None,
        })
        .bounded_sum
}

pub fn size_to_delete(
    input: impl Iterator<Item = impl Into<String>>,
    total: u64,
    needed: u64,
) -> Result<u64> {
    let disk = Disk {
        capacity: total,
        needed,
    };
    let root = DirectoryNode::from_transcript(input);

    let to_free = disk.space_to_free(root.total_size());

    root.summarize(&SizeLimits {
        at_most: 0,
        at_least: Some(to_free),
    })
    .min_candidate
    .context("No directory to free found")
}
