//! CLI entry point for the icon sheet segmentation tool

use clap::Parser;
use iconcarve::io::cli::{Cli, SheetProcessor};

fn main() -> iconcarve::Result<()> {
    let cli = Cli::parse();
    let mut processor = SheetProcessor::new(cli);
    processor.process()
}
