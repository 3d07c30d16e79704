// Run with: cargo run --example scan_report -- /path/to/scan [pattern ...]
// Add to sweep-core/Cargo.toml: [[example]] name = "scan_report" path = "../scan_report.rs"

use std::path::PathBuf;

use sweep_core::{Scanner, format_report};

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let patterns: Vec<String> = args.collect();

    let scanner = Scanner::new(patterns);
    let result = scanner.scan(&path, true);

    println!("{}", format_report(&result));
    println!();
    println!(
        "scanned={} suggested={} patterns={:?}",
        result.summary.total_files_scanned,
        result.summary.files_suggested,
        scanner.patterns().as_slice(),
    );
}
