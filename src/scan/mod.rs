//! Local directory walking

use crate::domain::PathEntry;
use crate::error::{Result, WordlistError};
use crate::utils::normalize_path;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Lists files and directories under a local base directory.
pub struct LocalWalker {
    root: PathBuf,
    recursive: bool,
}

impl LocalWalker {
    /// Resolve `base` to an absolute directory.
    pub fn new(base: &Path, recursive: bool) -> Result<Self> {
        let root = std::path::absolute(base).unwrap_or_else(|_| base.to_path_buf());
        if !root.is_dir() {
            return Err(WordlistError::NotADirectory(root));
        }
        Ok(Self { root, recursive })
    }

    /// Entries in discovery order: files in the order they were found,
    /// directories once each in the order they were first seen.
    pub fn walk(&self) -> Result<Vec<PathEntry>> {
        let entries = if self.recursive { self.walk_recursive()? } else { self.list_children()? };
        info!(
            root = %self.root.display(),
            recursive = self.recursive,
            entries = entries.len(),
            "walked local tree"
        );
        Ok(entries)
    }

    fn walk_recursive(&self) -> Result<Vec<PathEntry>> {
        let mut files = Vec::new();
        let mut directories = Vec::new();
        let mut seen_dirs = HashSet::new();

        let walker =
            WalkDir::new(&self.root).min_depth(1).follow_links(false).sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| WordlistError::Walk {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone()),
                message: e.to_string(),
            })?;

            let relative = self.relative(entry.path());
            if relative.is_empty() {
                continue;
            }

            // A symlink to a directory is listed as a directory but never entered.
            let is_dir = entry.file_type().is_dir()
                || (entry.path_is_symlink() && entry.path().is_dir());
            if is_dir {
                if seen_dirs.insert(relative.clone()) {
                    directories.push(PathEntry::directory(relative));
                }
            } else {
                files.push(PathEntry::file(relative));
            }
        }

        debug!(files = files.len(), directories = directories.len(), "recursive walk complete");
        files.extend(directories);
        Ok(files)
    }

    fn list_children(&self) -> Result<Vec<PathEntry>> {
        let read_err = |e: std::io::Error| WordlistError::Walk {
            path: self.root.clone(),
            message: e.to_string(),
        };

        let mut children: Vec<PathBuf> = fs::read_dir(&self.root)
            .map_err(read_err)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()
            .map_err(read_err)?;
        children.sort();

        let mut entries = Vec::with_capacity(children.len());
        for child in children {
            let relative = self.relative(&child);
            if child.is_dir() {
                entries.push(PathEntry::directory(relative));
            } else if child.is_file() {
                entries.push(PathEntry::file(relative));
            } else {
                debug!(path = %child.display(), "skipping entry that is neither file nor directory");
            }
        }
        Ok(entries)
    }

    fn relative(&self, path: &Path) -> String {
        normalize_path(path.strip_prefix(&self.root).unwrap_or(path))
    }
}

/// Walk `base` and return its entries.
pub fn collect_local_entries(base: &Path, recursive: bool) -> Result<Vec<PathEntry>> {
    LocalWalker::new(base, recursive)?.walk()
}
