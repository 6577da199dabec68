//! CLI entry point for the woven-grid pattern generator

use clap::Parser;
use loomtile::io::cli::{Cli, RenderJob};

fn main() -> loomtile::Result<()> {
    let cli = Cli::parse();
    let mut job = RenderJob::new(cli);
    job.run()
}
