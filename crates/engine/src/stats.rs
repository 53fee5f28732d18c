use crate::config::ExclusionRules;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One collected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the root, `/`-separated.
    pub relative_path: String,
    /// Text content, possibly truncated.
    pub content: String,
    /// Character count of `content`.
    pub size_chars: usize,
    /// Lowercase extension with its leading dot, or empty.
    pub extension: String,
}

impl FileRecord {
    pub fn new(relative_path: impl Into<String>, extension: impl Into<String>, content: String) -> Self {
        let size_chars = content.chars().count();
        Self {
            relative_path: relative_path.into(),
            content,
            size_chars,
            extension: extension.into(),
        }
    }
}

/// Outcome of one scan: the ordered records plus visit counters.
///
/// `included() + skipped == total` always holds.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub root: PathBuf,
    pub project_name: String,
    pub requirements: Option<String>,
    pub records: Vec<FileRecord>,
    pub skipped: usize,
    pub total: usize,
}

impl RunResult {
    #[must_use]
    pub fn included(&self) -> usize {
        self.records.len()
    }

    /// Included files per extension, most frequent first.
    ///
    /// Ties are ordered by extension. Extensionless files are grouped under
    /// an empty key.
    #[must_use]
    pub fn extension_histogram(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.extension.as_str()).or_default() += 1;
        }
        let mut histogram: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(ext, count)| (ext.to_string(), count))
            .collect();
        histogram.sort_by(|a, b| b.1.cmp(&a.1));
        histogram
    }

    /// Number of included files with a known source-code extension.
    #[must_use]
    pub fn code_files(&self, rules: &ExclusionRules) -> usize {
        self.records
            .iter()
            .filter(|r| rules.is_code_extension(&r.extension))
            .count()
    }
}
