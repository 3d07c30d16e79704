use std::path::PathBuf;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Root-level scan failures. Errors deeper in the tree are absorbed
/// during traversal and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
}

// Serialized as the display message, matching the text report.
impl Serialize for ScanError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
