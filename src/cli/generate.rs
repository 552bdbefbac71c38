//! Wordlist generation command

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::SortOrder;
use crate::error::WordlistError;
use crate::pipeline::generate;
use crate::render::{OutputSink, QuietSink, StdoutSink};
use crate::resolve::ResolveOptions;

#[derive(Args)]
pub struct GenerateArgs {
    /// Local directory path OR GitHub repo URL (https://github.com/owner/repo)
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Output file [default: wordlist.txt]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not recurse into subdirectories (local mode only)
    #[arg(short = 'n', long)]
    pub non_recursive: bool,

    /// Treat the source as local; do not attempt GitHub fetches
    #[arg(long)]
    pub local_only: bool,

    /// Allow GitHub network fetches even if source looks like a local path
    #[arg(long)]
    pub allow_github: bool,

    /// Branch to list instead of the repository's default branch
    #[arg(long = "ref", value_name = "BRANCH")]
    pub ref_: Option<String>,

    /// Ordering inside the files and directories blocks
    #[arg(long, value_enum, value_name = "ORDER")]
    pub sort: Option<SortOrder>,

    /// Only print the final summary, not every path
    #[arg(short, long)]
    pub quiet: bool,

    /// HTTP timeout for GitHub requests, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to config file (repo-wordlist.toml or .repo-wordlist.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;

    let cli_overrides = CliOverrides {
        output: args.output.clone(),
        recursive: if args.non_recursive { Some(false) } else { None },
        sort: args.sort,
        ref_: args.ref_.clone(),
        quiet: if args.quiet { Some(true) } else { None },
        timeout_secs: args.timeout,
    };
    let config = merge_cli_with_config(file_config, cli_overrides);
    debug!(?config, "effective configuration");

    let options = ResolveOptions { local_only: args.local_only, allow_github: args.allow_github };
    let mut sink: Box<dyn OutputSink> =
        if config.quiet { Box::new(QuietSink) } else { Box::new(StdoutSink) };

    generate(&args.source, options, &config, sink.as_mut())?;
    Ok(())
}

/// User-facing message for a failed run.
///
/// Transport failures get their own prefix; anything that is not a
/// [`WordlistError`] is reported as unexpected.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<WordlistError>() {
        Some(e) if e.is_transport() => format!("Network error while contacting GitHub: {e}"),
        Some(WordlistError::Io(e)) => format!("Error: could not write wordlist: {e}"),
        Some(e) => format!("Error: {e}"),
        None => format!("Unexpected error: {err:#}"),
    }
}
