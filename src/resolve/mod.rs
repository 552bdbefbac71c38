//! Source resolution
//!
//! Decides whether the command-line source is a local directory or a
//! GitHub repository URL. Only `is_dir` checks touch the filesystem.

use crate::domain::Source;
use crate::error::{Result, WordlistError};
use reqwest::Url;
use std::path::Path;
use tracing::debug;

/// Flags that steer resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Never go to the network.
    pub local_only: bool,
    /// Prefer GitHub even when the source names an existing directory.
    pub allow_github: bool,
}

/// Classify `source` as a local directory or a GitHub repository.
pub fn resolve_source(source: &str, options: ResolveOptions) -> Result<Source> {
    let is_dir = Path::new(source).is_dir();

    if is_dir && !options.allow_github {
        debug!(source, "source is an existing directory; using local mode");
        return Ok(Source::Local(source.into()));
    }

    if options.local_only {
        if !is_dir {
            return Err(WordlistError::Usage(
                "--local-only specified but source is not an existing directory.".to_string(),
            ));
        }
        return Ok(Source::Local(source.into()));
    }

    match parse_github_url(source) {
        Ok((owner, repo)) => {
            debug!(%owner, %repo, "source is a GitHub repository");
            Ok(Source::GitHub { owner, repo })
        }
        Err(err) if is_dir => {
            debug!(source, error = %err, "not a GitHub URL; falling back to local mode");
            Ok(Source::Local(source.into()))
        }
        Err(err) => Err(WordlistError::Usage(format!(
            "source is neither an existing directory nor a valid GitHub repository URL ({err})"
        ))),
    }
}

/// Split `https://github.com/<owner>/<repo>` into owner and repo.
///
/// Extra path segments (`/tree/main/...`) are ignored and a trailing `.git`
/// is stripped from the repository name.
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let parsed = Url::parse(url).map_err(|_| {
        WordlistError::InvalidGithubUrl("URL must be a GitHub repository URL (github.com)".into())
    })?;

    if parsed.host_str() != Some("github.com") {
        return Err(WordlistError::InvalidGithubUrl(
            "URL must be a GitHub repository URL (github.com)".to_string(),
        ));
    }

    let segments: Vec<&str> =
        parsed.path().trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return Err(WordlistError::InvalidGithubUrl(
            "Invalid GitHub repository URL; expected https://github.com/owner/repo".to_string(),
        ));
    }

    let owner = segments[0].to_string();
    let repo = segments[1].strip_suffix(".git").unwrap_or(segments[1]).to_string();
    if repo.is_empty() {
        return Err(WordlistError::InvalidGithubUrl(
            "Invalid GitHub repository URL; expected https://github.com/owner/repo".to_string(),
        ));
    }
    Ok((owner, repo))
}
