//! Snapshot ordering: project configuration first, then docs, then code by
//! language family.

use crate::stats::FileRecord;

const PRIMARY_CONFIG_FRAGMENTS: &[&str] =
    &["package.json", "tsconfig", "next.config", "tailwind.config"];
const MARKDOWN: &str = ".md";
const TYPED_SCRIPT: &[&str] = &[".ts", ".tsx"];
const PLAIN_SCRIPT: &[&str] = &[".js", ".jsx"];
const STYLESHEET: &[&str] = &[".css", ".scss"];

/// Priority bucket of a record, lower sorts first.
#[must_use]
pub fn sort_priority(record: &FileRecord) -> u8 {
    let path = record.relative_path.to_lowercase();
    let ext = record.extension.as_str();

    if PRIMARY_CONFIG_FRAGMENTS.iter().any(|f| path.contains(f)) {
        0
    } else if path.contains("readme") || ext == MARKDOWN {
        1
    } else if TYPED_SCRIPT.contains(&ext) {
        2
    } else if PLAIN_SCRIPT.contains(&ext) {
        3
    } else if STYLESHEET.contains(&ext) {
        4
    } else {
        5
    }
}

/// Sort by priority, then lowercased path, then raw path.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by_cached_key(|r| {
        (
            sort_priority(r),
            r.relative_path.to_lowercase(),
            r.relative_path.clone(),
        )
    });
}
