//! CLI entry point for the seeded bot generator

use botforge::io::cli::{BotProcessor, Cli};
use clap::Parser;

fn main() -> botforge::Result<()> {
    let cli = Cli::parse();
    let mut processor = BotProcessor::new(cli)?;
    processor.process()
}
