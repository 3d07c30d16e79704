pub mod error;
pub mod report;
pub mod result;
pub mod scanner;

pub use error::ScanError;
pub use report::format_report;
pub use result::{ScanResult, ScanSummary};
pub use scanner::{DEFAULT_PATTERN, PatternSet, Scanner};
