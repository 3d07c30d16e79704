use std::path::PathBuf;

use serde::Serialize;

use crate::error::ScanError;

/// Aggregate counters for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Regular files visited, matched or not
    pub total_files_scanned: u64,
    /// Files whose names matched at least one pattern
    pub files_suggested: u64,
}

/// Outcome of a single scan invocation.
///
/// A scan always produces one of these, even when the root path was
/// invalid; callers check `error` rather than unwinding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Paths suggested for deletion, in traversal order
    pub suggestions: Vec<PathBuf>,
    pub summary: ScanSummary,
    /// Set only when the root itself was invalid or unreadable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ScanError>,
}

impl ScanResult {
    /// Result for a scan that could not start: empty suggestions, zero
    /// counts, error set
    pub fn failed(error: ScanError) -> Self {
        Self {
            suggestions: Vec::new(),
            summary: ScanSummary::default(),
            error: Some(error),
        }
    }
}
