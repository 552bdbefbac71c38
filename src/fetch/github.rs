//! GitHub tree fetcher
//!
//! Lists a repository with three sequential calls: repository info for the
//! default branch, branch info for the head commit, then the recursive tree
//! for that commit. Each stage fails independently and nothing is retried.

use super::{HttpResponse, HttpTransport};
use crate::domain::PathEntry;
use crate::error::{FetchStage, Result, WordlistError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct RepoInfo {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct BranchInfo {
    commit: CommitRef,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeItem>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Fetches the full path listing of a GitHub repository.
pub struct GitHubFetcher<T: HttpTransport> {
    transport: T,
    api_base_url: String,
}

impl<T: HttpTransport> GitHubFetcher<T> {
    pub fn new(transport: T, api_base_url: &str) -> Self {
        Self { transport, api_base_url: api_base_url.trim_end_matches('/').to_string() }
    }

    /// List every blob and tree in the repository.
    ///
    /// With `branch` set the repository lookup is skipped and that branch is
    /// listed instead of the default one.
    pub fn fetch_entries(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
    ) -> Result<Vec<PathEntry>> {
        let branch = match branch {
            Some(branch) => branch.to_string(),
            None => self.default_branch(owner, repo)?,
        };
        let sha = self.branch_head(owner, repo, &branch)?;
        let entries = self.tree_entries(owner, repo, &sha)?;
        info!(owner, repo, branch = %branch, entries = entries.len(), "fetched repository tree");
        Ok(entries)
    }

    pub fn default_branch(&self, owner: &str, repo: &str) -> Result<String> {
        let url = format!("{}/repos/{owner}/{repo}", self.api_base_url);
        let info: RepoInfo = self.get_json(&url, FetchStage::Repository)?;
        debug!(owner, repo, branch = %info.default_branch, "resolved default branch");
        Ok(info.default_branch)
    }

    pub fn branch_head(&self, owner: &str, repo: &str, branch: &str) -> Result<String> {
        let url = format!("{}/repos/{owner}/{repo}/branches/{branch}", self.api_base_url);
        let info: BranchInfo = self.get_json(&url, FetchStage::Branch)?;
        debug!(branch, sha = %info.commit.sha, "resolved branch head");
        Ok(info.commit.sha)
    }

    pub fn tree_entries(&self, owner: &str, repo: &str, sha: &str) -> Result<Vec<PathEntry>> {
        let url = format!("{}/repos/{owner}/{repo}/git/trees/{sha}?recursive=1", self.api_base_url);
        let tree: TreeResponse = self.get_json(&url, FetchStage::Tree)?;

        if tree.truncated {
            return Err(WordlistError::TruncatedTree {
                owner: owner.to_string(),
                repo: repo.to_string(),
            });
        }

        let entries = tree
            .tree
            .into_iter()
            .filter_map(|item| match item.kind.as_str() {
                "blob" => Some(PathEntry::file(item.path)),
                "tree" => Some(PathEntry::directory(item.path)),
                other => {
                    debug!(path = %item.path, kind = other, "skipping tree item");
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    fn get_json<R: DeserializeOwned>(&self, url: &str, stage: FetchStage) -> Result<R> {
        debug!(url, %stage, "GET");
        let HttpResponse { status, body } = self.transport.get(url, stage)?;
        if status != 200 {
            return Err(WordlistError::Api { stage, status, body });
        }
        serde_json::from_str(&body)
            .map_err(|e| WordlistError::Decode { stage, message: e.to_string() })
    }
}
