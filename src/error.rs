//! Error types for wordlist generation.
//!
//! Library operations return [`Result<T>`]; the CLI wraps these in `anyhow`
//! and sorts them into user-facing message families at the process boundary.

use std::path::PathBuf;

/// Unified error type for resolving, fetching, walking and writing.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    /// The source argument or flag combination cannot be used.
    #[error("{0}")]
    Usage(String),

    /// The source looked like a URL but is not a GitHub repository URL.
    #[error("{0}")]
    InvalidGithubUrl(String),

    /// The local base path is missing or is not a directory.
    #[error("Local path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The filesystem walk failed part way (permission denied, vanished entry, ...).
    #[error("failed to walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// GitHub answered with a non-200 status.
    #[error("Failed to get {stage}: {status} - {body}")]
    Api { stage: FetchStage, status: u16, body: String },

    /// The request never produced an HTTP response.
    #[error("request for {stage} failed: {message}")]
    Transport { stage: FetchStage, message: String },

    /// The response body did not match the expected shape.
    #[error("could not decode {stage} response: {message}")]
    Decode { stage: FetchStage, message: String },

    /// GitHub cut the recursive listing short.
    #[error("tree listing for {owner}/{repo} was truncated by GitHub; refusing to write a partial wordlist")]
    TruncatedTree { owner: String, repo: String },

    /// Configuration could not be loaded or merged.
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WordlistError {
    /// True for failures below HTTP: DNS, connect, timeout.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// One of the three sequential GitHub calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Repository,
    Branch,
    Tree,
}

impl std::fmt::Display for FetchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Repository => "repository info",
            Self::Branch => "branch info",
            Self::Tree => "tree",
        };
        f.write_str(label)
    }
}

pub type Result<T> = std::result::Result<T, WordlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = WordlistError::Api {
            stage: FetchStage::Branch,
            status: 404,
            body: "{\"message\":\"Branch not found\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to get branch info: 404 - {\"message\":\"Branch not found\"}"
        );
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = WordlistError::NotADirectory(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Local path is not a directory: /missing/dir");
    }

    #[test]
    fn only_transport_errors_are_transport() {
        let transport =
            WordlistError::Transport { stage: FetchStage::Tree, message: "timed out".to_string() };
        let api = WordlistError::Api { stage: FetchStage::Tree, status: 500, body: String::new() };
        assert!(transport.is_transport());
        assert!(!api.is_transport());
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: WordlistError = io_err.into();
        assert!(matches!(err, WordlistError::Io(_)));
        assert!(err.to_string().contains("nope"));
    }
}
