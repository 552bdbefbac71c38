//! Resolve → collect → format → write, shared by both sources.

use crate::domain::{Config, PathEntry, Source};
use crate::error::Result;
use crate::fetch::{GitHubFetcher, HttpTransport, ReqwestTransport};
use crate::render::{format_entries, write_wordlist, OutputSink};
use crate::resolve::{resolve_source, ResolveOptions};
use crate::scan::collect_local_entries;
use tracing::info;

/// Entries for an already resolved source.
pub fn collect_entries<T: HttpTransport>(
    source: &Source,
    config: &Config,
    transport: T,
) -> Result<Vec<PathEntry>> {
    match source {
        Source::Local(path) => collect_local_entries(path, config.recursive),
        Source::GitHub { owner, repo } => GitHubFetcher::new(transport, &config.api_base_url)
            .fetch_entries(owner, repo, config.ref_.as_deref()),
    }
}

/// Resolve `source`, build the wordlist, and write it to `config.output`.
///
/// The output file is only created once every entry has been collected.
pub fn generate_with<T: HttpTransport>(
    source: &str,
    options: ResolveOptions,
    config: &Config,
    transport: T,
    sink: &mut dyn OutputSink,
) -> Result<usize> {
    let resolved = resolve_source(source, options)?;
    info!(?resolved, "resolved source");

    let entries = collect_entries(&resolved, config, transport)?;
    let lines = format_entries(&entries, config.sort);
    Ok(write_wordlist(&lines, &config.output, sink)?)
}

/// [`generate_with`] over the real GitHub API.
pub fn generate(
    source: &str,
    options: ResolveOptions,
    config: &Config,
    sink: &mut dyn OutputSink,
) -> Result<usize> {
    let transport = ReqwestTransport::new(config)?;
    generate_with(source, options, config, transport, sink)
}
