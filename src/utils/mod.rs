//! Utility functions

pub mod paths;

pub use paths::{normalize_path, path_depth};
