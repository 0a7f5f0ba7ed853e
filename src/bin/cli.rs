// src/bin/cli.rs
use clap::Parser;
use pool_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    pool_scrape::log::init(args.log_level());

    cli::run(&args)
}
