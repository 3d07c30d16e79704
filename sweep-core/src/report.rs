use crate::result::ScanResult;

const BANNER_WIDTH: usize = 60;

/// Render a scan result as a fixed-layout text report.
///
/// The layout is stable so scripts and tests can split it on newlines and
/// match field labels. A failed scan renders as a single `Error:` line
/// instead of statistics.
pub fn format_report(result: &ScanResult) -> String {
    if let Some(error) = &result.error {
        return format!("Error: {error}");
    }

    let banner = "=".repeat(BANNER_WIDTH);

    let mut lines = vec![
        banner.clone(),
        "SWEEP SCAN REPORT".to_string(),
        banner.clone(),
        format!(
            "Total files scanned: {}",
            result.summary.total_files_scanned
        ),
        format!(
            "Files suggested for deletion: {}",
            result.summary.files_suggested
        ),
        String::new(),
    ];

    if result.suggestions.is_empty() {
        lines.push("No files suggested for deletion.".to_string());
    } else {
        lines.push("Suggested files to delete:".to_string());
        lines.push("-".repeat(BANNER_WIDTH));
        for suggestion in &result.suggestions {
            lines.push(format!("  - {}", suggestion.display()));
        }
    }

    lines.push(banner);
    lines.join("\n")
}
