use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use sweep_core::{Scanner, format_report};

/// Sweep - flags files to delete based on name patterns
#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Scans a directory and suggests files to delete based on name patterns")]
#[command(version)]
struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Patterns to match against file names (default: test)
    #[arg(short, long, num_args = 1.., value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Don't scan subdirectories recursively
    #[arg(long)]
    no_recursive: bool,

    /// Print the raw scan result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // An empty pattern list resolves to the default set in the scanner
    let scanner = Scanner::new(args.patterns);
    let result = scanner.scan(&args.path, !args.no_recursive);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_report(&result));
    }

    // The report text is the primary error surface; the exit status
    // mirrors it for scripting.
    if result.error.is_some() {
        std::process::exit(1);
    }

    Ok(())
}
