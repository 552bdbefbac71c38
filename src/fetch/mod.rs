//! Remote tree fetching
//!
//! The GitHub fetcher talks HTTP through [`HttpTransport`] so tests can
//! replay canned responses instead of hitting the network.

use crate::domain::Config;
use crate::error::{FetchStage, Result, WordlistError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

pub mod github;

pub use github::GitHubFetcher;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Status code and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking GET used by the fetchers.
pub trait HttpTransport {
    /// Returns the response for any status; only transport failures are errors.
    fn get(&self, url: &str, stage: FetchStage) -> Result<HttpResponse>;
}

/// [`HttpTransport`] backed by a blocking `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WordlistError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, stage: FetchStage) -> Result<HttpResponse> {
        let transport_err = |e: reqwest::Error| WordlistError::Transport {
            stage,
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport_err)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_err)?;
        Ok(HttpResponse { status, body })
    }
}
