//! Wordlist formatting and writing
//!
//! Both sources produce [`PathEntry`] lists; this module turns them into the
//! final line order and writes them out, echoing through an [`OutputSink`].

use crate::domain::{EntryKind, PathEntry, SortOrder};
use crate::utils::path_depth;
use std::collections::HashSet;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Receives user-facing progress output while a wordlist is written.
pub trait OutputSink {
    /// Called once per line, in file order.
    fn line(&mut self, line: &str);

    /// Called once after the file is flushed.
    fn summary(&mut self, message: &str);
}

/// Echoes every line and the summary to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }

    fn summary(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Prints only the summary.
#[derive(Debug, Default)]
pub struct QuietSink;

impl OutputSink for QuietSink {
    fn line(&mut self, _line: &str) {}

    fn summary(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Keeps everything in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<String>,
    pub summaries: Vec<String>,
}

#[cfg(test)]
impl OutputSink for CollectingSink {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn summary(&mut self, message: &str) {
        self.summaries.push(message.to_string());
    }
}

/// Files block then directories block, each ordered by `order`.
///
/// Directory lines are deduplicated keeping the first occurrence; file
/// lines are kept as given.
pub fn format_entries(entries: &[PathEntry], order: SortOrder) -> Vec<String> {
    let mut files = Vec::new();
    let mut directories = Vec::new();
    let mut seen_dirs = HashSet::new();

    for entry in entries {
        let line = entry.display_path();
        match entry.kind {
            EntryKind::File => files.push(line),
            EntryKind::Directory => {
                if seen_dirs.insert(line.clone()) {
                    directories.push(line);
                }
            }
        }
    }

    sort_block(&mut files, order);
    sort_block(&mut directories, order);

    files.extend(directories);
    files
}

fn sort_block(lines: &mut [String], order: SortOrder) {
    match order {
        // sort_by_key is stable: equal depths keep discovery order.
        SortOrder::Depth => lines.sort_by_key(|line| path_depth(line)),
        SortOrder::Alpha => lines.sort(),
    }
}

/// Write `lines` to `path`, one per line, echoing each through `sink`.
///
/// Lines go to a temporary file next to `path` which is renamed over it
/// once complete, so a failed write never leaves a partial wordlist.
/// Returns the number of lines written.
pub fn write_wordlist(
    lines: &[String],
    path: &Path,
    sink: &mut dyn OutputSink,
) -> std::io::Result<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
    for line in lines {
        sink.line(line);
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    let staged = writer.into_inner().map_err(|e| e.into_error())?;
    staged.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), lines = lines.len(), "wordlist written");

    sink.summary(&format!("Wordlist saved to {} ({} entries).", path.display(), lines.len()));
    Ok(lines.len())
}
