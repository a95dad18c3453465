//! CLI entry point for tiling level files

use clap::Parser;
use cladtile::io::cli::{Cli, FileProcessor};
use log::{LevelFilter, info};

fn main() -> cladtile::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let mut processor = FileProcessor::new(cli);
    let tiled = processor.process()?;
    info!("Tiled {tiled} level file(s)");
    Ok(())
}
