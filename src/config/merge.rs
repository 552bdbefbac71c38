//! CLI argument merging with config

use crate::domain::{Config, SortOrder};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub recursive: Option<bool>,
    pub sort: Option<SortOrder>,
    pub ref_: Option<String>,
    pub quiet: Option<bool>,
    pub timeout_secs: Option<u64>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(output) = cli.output {
        base_config.output = output;
    }
    if let Some(recursive) = cli.recursive {
        base_config.recursive = recursive;
    }
    if let Some(sort) = cli.sort {
        base_config.sort = sort;
    }
    if let Some(ref_) = cli.ref_ {
        base_config.ref_ = Some(ref_);
    }
    if let Some(quiet) = cli.quiet {
        base_config.quiet = quiet;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        base_config.timeout_secs = timeout_secs;
    }

    base_config
}
