//! CLI entry point for photomosaic assembly

use clap::Parser;
use mosaictile::io::cli::{Cli, MosaicRunner};

fn main() -> mosaictile::Result<()> {
    let cli = Cli::parse();
    MosaicRunner::new(cli).run()
}
