use day7::{size_smallest, DEFAULT_BOUND};

use std::io::{self, BufRead};

use anyhow::Result;

fn main() -> Result<()> {
    let stdin = io::stdin();

    let cs = size_smallest(stdin.lock().lines().filter_map(|s| s.ok()), DEFAULT_BOUND);

    println!("{cs}");

    Ok(())
}
