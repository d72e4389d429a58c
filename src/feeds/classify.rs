use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context as _;
use regex::Regex;

use crate::foundation::error::{PerspectiveError, PerspectiveResult};

/// Pattern for a missing explanation: empty or all-whitespace reason text.
const BLANK_REASON: &str = r"^\s*$";

/// Maps free-text failure reasons onto failure status codes.
///
/// Pattern `i` yields code `i + 1`; the first match wins. Pattern 0 is always the blank-reason
/// matcher, so failures without an explanation stay distinguishable even without a config. A
/// reason matching nothing gets the code one past the last pattern.
#[derive(Clone, Debug)]
pub struct ErrorClassifier {
    patterns: Vec<Regex>,
}

impl ErrorClassifier {
    /// Highest number of patterns whose codes (plus the fallback) still fit in an `i8` status.
    pub const MAX_PATTERNS: usize = i8::MAX as usize - 1;

    /// Classifier with only the implicit blank-reason pattern.
    pub fn new() -> PerspectiveResult<Self> {
        Self::with_patterns(std::iter::empty::<&str>())
    }

    /// Classifier with the blank-reason pattern followed by `patterns`, in order.
    pub fn with_patterns<I, S>(patterns: I) -> PerspectiveResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = vec![compile(BLANK_REASON)?];
        for p in patterns {
            compiled.push(compile(p.as_ref())?);
        }
        if compiled.len() > Self::MAX_PATTERNS {
            return Err(PerspectiveError::config(format!(
                "{} error-reason patterns configured; at most {} fit in a status code",
                compiled.len(),
                Self::MAX_PATTERNS
            )));
        }
        Ok(Self { patterns: compiled })
    }

    /// Load extra patterns from a pipe-delimited config.
    ///
    /// The first field of each row is the regex (surrounding whitespace is ignored, so the file
    /// can be laid out as a table); any further fields are free-form annotations.
    pub fn from_config_reader<R: Read>(r: R) -> PerspectiveResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(r);

        let mut patterns = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("read filter config row {}", row + 1))?;
            let field = record.get(0).ok_or_else(|| {
                PerspectiveError::config(format!("filter config row {} has no fields", row + 1))
            })?;
            patterns.push(field.trim().to_string());
        }
        tracing::debug!(patterns = patterns.len(), "loaded error-reason filter config");
        Self::with_patterns(patterns)
    }

    /// Load extra patterns from a pipe-delimited config file.
    pub fn from_config_file(path: impl AsRef<Path>) -> PerspectiveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open error-reason filter config '{}'", path.display()))?;
        Self::from_config_reader(BufReader::new(f))
    }

    /// Number of patterns, the implicit blank-reason pattern included.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false: the blank-reason pattern is always present.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Failure status code for `reason`.
    pub fn classify(&self, reason: &str) -> i8 {
        let idx = self
            .patterns
            .iter()
            .position(|re| re.is_match(reason))
            .unwrap_or(self.patterns.len());
        // Bounded by MAX_PATTERNS at construction.
        (idx + 1) as i8
    }
}

fn compile(pattern: &str) -> PerspectiveResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| PerspectiveError::config(format!("failed to compile regex '{pattern}': {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/feeds/classify.rs"]
mod tests;
