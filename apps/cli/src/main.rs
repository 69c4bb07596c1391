//! IndustryKB CLI — knowledge-base synthesis for the IndustryHub platform.
//!
//! Merges the curated industry taxonomy with the indexed website content
//! and writes the structured knowledge base plus the AI context summary.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
