//! Path normalization helpers

use std::path::{Component, Path};

/// Convert a relative path to a `/`-separated string.
///
/// Non-UTF-8 components are converted lossily so a single odd file name
/// cannot abort the whole listing.
pub fn normalize_path(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().replace('\\', "/")),
            _ => None,
        })
        .collect();
    parts.join("/")
}

/// Number of `/` characters in a wordlist line.
pub fn path_depth(display_path: &str) -> usize {
    display_path.matches('/').count()
}
