use crate::disk::Disk;

pub const DEFAULT_BOUND: u64 = 100000;
pub const DEFAULT_CAPACITY: u64 = 70000000;
pub const DEFAULT_NEEDED: u64 = 30000000;

/// Thresholds of a run. Defaults are the values of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Largest directory total counted into the bounded sum.
    pub bound: u64,
    pub disk: Disk,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            disk: Disk {
                capacity: DEFAULT_CAPACITY,
                needed: DEFAULT_NEEDED,
            },
        }
    }
}
