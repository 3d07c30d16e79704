mod matcher;
mod walker;

pub use matcher::{DEFAULT_PATTERN, PatternSet};
pub use walker::Scanner;
