//! Command-line interface for repo-wordlist

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;

pub use generate::{failure_message, GenerateArgs};

/// Build a path wordlist from a local directory or a GitHub repository
#[derive(Parser)]
#[command(name = "repo-wordlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    generate::run(cli.generate)
}
