//! Repo-Wordlist: build path wordlists from local trees or GitHub repositories
//!
//! A source is resolved to either a local directory or a GitHub repository,
//! its entries are collected, then formatted into `/file` and `/dir/` lines
//! and written to a text file.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod utils;

pub use domain::{Config, EntryKind, PathEntry, SortOrder, Source};
pub use error::{Result, WordlistError};
