/// Pattern applied when the caller supplies none
pub const DEFAULT_PATTERN: &str = "test";

/// An ordered set of substring patterns matched case-insensitively
/// against bare filenames.
///
/// Patterns are lowercased once at construction; matching lowercases the
/// candidate name and tests containment, so `"test"` flags `TEST.txt`,
/// `my_test.py` and `latest.log` alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Build a pattern set. An empty input falls back to [`DEFAULT_PATTERN`].
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.into().to_lowercase())
            .collect();

        if patterns.is_empty() {
            return Self {
                patterns: vec![DEFAULT_PATTERN.to_string()],
            };
        }

        Self { patterns }
    }

    /// True if the filename contains any pattern
    pub fn matches(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }

    /// Normalized patterns, in the order given at construction
    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
