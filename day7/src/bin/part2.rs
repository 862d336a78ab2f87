use day7::{size_to_delete, DEFAULT_CAPACITY, DEFAULT_NEEDED};

use std::io::{self, BufRead};

use anyhow::Result;

fn main() -> Result<()> {
    let stdin = io::stdin();

    let cs = size_to_delete(
        stdin.lock().lines().filter_map(|s| s.ok()),
        DEFAULT_CAPACITY,
        DEFAULT_NEEDED,
    )?;

    println!("{cs}");

    Ok(())
}
