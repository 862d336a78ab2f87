#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disk {
    pub capacity: u64,
    pub needed: u64,
}

impl Disk {
    /// Smallest size a single deleted directory must have so that `needed`
    /// bytes are free, i.e. `needed - (capacity - used)`. Zero when enough
    /// space is free already, so every directory qualifies.
    pub fn space_to_free(&self, used: u64) -> u64 {
        self.needed
            .saturating_add(used)
            .saturating_sub(self.capacity)
    }
}
