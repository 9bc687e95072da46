/*!
 * Directory walking and file selection
 */

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{CtxDumpError, Result};
use crate::types::{FileEntry, FileOutcome, ReadFailure};
use crate::utils::display_path;

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Output file name, excluded from the walk
    output_name: Option<String>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        let output_name = config.output_name();
        Self {
            config,
            output_name,
        }
    }

    /// Absolute, canonical scan root
    pub fn root(&self) -> Result<PathBuf> {
        fs::canonicalize(&self.config.target_dir)
            .map_err(|e| CtxDumpError::io(&self.config.target_dir, e))
    }

    /// Walk `root` depth-first and yield every eligible file
    ///
    /// Within a directory, files come before subdirectories and both are
    /// sorted by name. Ignored directories are pruned before descent.
    /// Failing to read `root` itself is an error; unreadable
    /// subdirectories are logged and skipped.
    pub fn walk<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = Result<FileEntry>> + 'a {
        WalkDir::new(root)
            .follow_links(false)
            .sort_by(compare_entries)
            .into_iter()
            .filter_entry(move |entry| !self.should_prune(entry))
            .filter_map(move |result| match result {
                Ok(entry) => self.to_file_entry(&entry, root).map(Ok),
                Err(err) if err.depth() == 0 || err.path() == Some(root) => {
                    Some(Err(CtxDumpError::Walk(err)))
                }
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
    }

    /// Whether a directory entry is an ignored directory below the root
    pub fn should_prune(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        let prune = self.config.ignore_dirs.contains(name.as_ref());
        if prune {
            debug!("Pruning ignored directory {}", entry.path().display());
        }
        prune
    }

    /// Eligibility predicate on a file name
    pub fn is_eligible(&self, file_name: &str) -> bool {
        let allowed = self
            .config
            .extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()));

        allowed
            && self.config.script_name.as_deref() != Some(file_name)
            && self.output_name.as_deref() != Some(file_name)
    }

    /// Read a file fully as UTF-8 text
    pub fn read_file(&self, path: &Path) -> FileOutcome {
        if let Some(limit) = self.config.max_file_size {
            match fs::metadata(path) {
                Ok(metadata) if metadata.len() > limit => {
                    return FileOutcome::Failed(ReadFailure::TooLarge {
                        size: metadata.len(),
                        limit,
                    });
                }
                Ok(_) => {}
                Err(e) => return FileOutcome::Failed(e.into()),
            }
        }

        match fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => FileOutcome::Read(content),
                Err(e) => FileOutcome::Failed(e.utf8_error().into()),
            },
            Err(e) => FileOutcome::Failed(e.into()),
        }
    }

    fn to_file_entry(&self, entry: &DirEntry, root: &Path) -> Option<FileEntry> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return None;
        }

        // Symlinks count only when they resolve to a regular file
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            debug!("Skipping non-regular entry {}", entry.path().display());
            return None;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !self.is_eligible(&name) {
            return None;
        }

        Some(FileEntry {
            display_path: display_path(entry.path(), root),
            path: entry.path().to_path_buf(),
            name,
        })
    }
}

/// Files first, then directories; each group by name
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
