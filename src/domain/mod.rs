//! Core domain types and models
//!
//! Defines PathEntry, Source, SortOrder and the layered Config.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "wordlist.txt";

/// Default GitHub REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Whether a listed path is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single path discovered by either source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathEntry {
    /// Relative path with `/` separators and no leading slash.
    pub path: String,

    pub kind: EntryKind,
}

impl PathEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: EntryKind::File }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: EntryKind::Directory }
    }

    /// Wordlist form: `/a/b` for files, `/a/b/` for directories.
    pub fn display_path(&self) -> String {
        let trimmed = self.path.trim_matches('/');
        match self.kind {
            EntryKind::File => format!("/{trimmed}"),
            EntryKind::Directory => format!("/{trimmed}/"),
        }
    }
}

/// Ordering applied inside the files block and the directories block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Stable sort by number of `/` characters.
    #[default]
    Depth,
    /// Lexicographic by display path.
    Alpha,
}

/// Where the entries come from, as decided by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    GitHub { owner: String, repo: String },
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_true")]
    pub recursive: bool,

    #[serde(default)]
    pub sort: SortOrder,

    /// Branch to list instead of the repository's default branch.
    #[serde(default, rename = "ref")]
    pub ref_: Option<String>,

    #[serde(default)]
    pub quiet: bool,

    // GitHub client options
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            recursive: true,
            sort: SortOrder::default(),
            ref_: None,
            quiet: false,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_true() -> bool {
    true
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_suffixes_directories_only() {
        assert_eq!(PathEntry::file("src/main.rs").display_path(), "/src/main.rs");
        assert_eq!(PathEntry::directory("src/bin").display_path(), "/src/bin/");
    }

    #[test]
    fn display_path_does_not_double_slashes() {
        assert_eq!(PathEntry::directory("/docs/").display_path(), "/docs/");
    }

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("wordlist.txt"));
        assert!(config.recursive);
        assert_eq!(config.sort, SortOrder::Depth);
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("repo-wordlist/"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"sort":"alpha","ref":"dev"}"#).expect("parse config");
        assert_eq!(config.sort, SortOrder::Alpha);
        assert_eq!(config.ref_.as_deref(), Some("dev"));
        assert_eq!(config.timeout_secs, 30);
    }
}
