use anyhow::Result;
use clap::Parser as _;
use tracing::{debug, level_filters::LevelFilter};

use day7::{answers, Config, DirectoryNode};
use util::read_input;

use crate::cli::Cli;

mod cli;

fn main() -> Result<()> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    let input = read_input(cli_args.input.as_deref())?;
    let root = DirectoryNode::from_transcript(input.lines());

    if cli_args.tree {
        print!("{root}");
    }

    let res = answers(&root, &Config::from(&cli_args));

    println!("{res}");

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if cli_args.log_level != LevelFilter::OFF {
        tracing_subscriber::fmt()
            .with_max_level(cli_args.log_level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
