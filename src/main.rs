//! CLI entry point for the polyomino packing checker

use clap::Parser;
use polypack::io::cli::{Cli, PuzzleRunner};

fn main() -> polypack::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.process().map(|_| ())
}
