use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use super::matcher::PatternSet;
use crate::error::ScanError;
use crate::result::{ScanResult, ScanSummary};

/// Filesystem scanner that flags deletion candidates by filename.
///
/// Holds the pattern set for its lifetime; each [`Scanner::scan`] call is
/// independent and purely read-only.
#[derive(Debug, Clone)]
pub struct Scanner {
    patterns: PatternSet,
}

impl Scanner {
    /// Create a scanner with the given patterns. An empty list falls back
    /// to the default pattern set.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: PatternSet::new(patterns),
        }
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Scan a directory and collect deletion suggestions.
    ///
    /// Never fails: an invalid or unreadable root is reported through
    /// `ScanResult::error` with zeroed counts. With `recursive` false only
    /// direct children of `path` are visited.
    pub fn scan(&self, path: impl AsRef<Path>, recursive: bool) -> ScanResult {
        let root = path.as_ref();

        if let Err(err) = check_root(root) {
            return ScanResult::failed(err);
        }

        let mut suggestions: Vec<PathBuf> = Vec::new();
        let mut total_files: u64 = 0;

        // Serial traversal with sorted entries keeps suggestion order
        // deterministic for a fixed filesystem state.
        let walker = WalkDir::new(root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(Parallelism::Serial);

        let walker = if recursive { walker } else { walker.max_depth(1) };

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                // Unreadable subtree: skip it, keep scanning the rest
                Err(_) => continue,
            };

            // Directories and symlinks are never matched or counted
            if !entry.file_type().is_file() {
                continue;
            }

            total_files += 1;

            let path = entry.path();
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            if self.patterns.matches(&name) {
                suggestions.push(path);
            }
        }

        ScanResult {
            summary: ScanSummary {
                total_files_scanned: total_files,
                files_suggested: suggestions.len() as u64,
            },
            suggestions,
            error: None,
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

/// Validate the scan root before walking it
fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::PathNotFound(root.to_path_buf()));
        }
        Err(_) => return Err(ScanError::PermissionDenied(root.to_path_buf())),
    };

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    // The walker absorbs per-entry errors, so an unreadable root would
    // otherwise look like an empty scan. Probe it up front.
    if fs::read_dir(root).is_err() {
        return Err(ScanError::PermissionDenied(root.to_path_buf()));
    }

    Ok(())
}
