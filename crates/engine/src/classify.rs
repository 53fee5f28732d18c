//! Directory and file classification.
//!
//! Both classifiers answer "leave this out?". Filesystem failures never
//! propagate: a failed `stat` keeps the file, a failed shebang peek drops it.

use crate::config::ExclusionRules;
use crate::rules::SHEBANG;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Component, Path};

/// Returns `true` when the directory called `name` must be skipped with its
/// whole subtree.
#[must_use]
pub fn should_skip_dir(name: &str, rules: &ExclusionRules) -> bool {
    if name.starts_with('.') && !rules.hidden_dir_exceptions.contains(&name) {
        return true;
    }

    let lower = name.to_lowercase();
    if rules.ignore_dirs.contains(&lower.as_str()) {
        return true;
    }

    rules
        .ignore_dir_patterns
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Returns `true` when any directory between the root and the file named by
/// `relative` is skipped.
#[must_use]
pub fn has_skipped_ancestor(relative: &Path, rules: &ExclusionRules) -> bool {
    let Some(parent) = relative.parent() else {
        return false;
    };
    parent.components().any(|component| match component {
        Component::Normal(name) => should_skip_dir(&name.to_string_lossy(), rules),
        _ => false,
    })
}

/// Returns `true` when the file at `path` must not be collected.
///
/// First matching rule wins:
/// force-exclude name, force-include name, denied suffix, size limit,
/// temporary-name pattern, extensionless without allowlist or shebang.
#[must_use]
pub fn should_exclude_file(path: &Path, rules: &ExclusionRules, max_file_size: u64) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if rules.force_exclude_files.contains(&name.as_str()) {
        return true;
    }

    if rules.force_include_files.contains(&name.as_str()) {
        return false;
    }

    if rules.ignore_extensions.iter().any(|ext| name.ends_with(ext)) {
        return true;
    }

    if let Ok(meta) = fs::metadata(path)
        && meta.len() > max_file_size
    {
        return true;
    }

    if rules
        .ignore_file_patterns
        .iter()
        .any(|pattern| name.contains(pattern))
    {
        return true;
    }

    if extension_of(path).is_empty() {
        return !rules.extensionless_allow.contains(&name.as_str()) && !starts_with_shebang(path);
    }

    false
}

/// Lowercase extension with its leading dot, or an empty string.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

fn starts_with_shebang(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut first_line = Vec::new();
    if BufReader::new(file)
        .read_until(b'\n', &mut first_line)
        .is_err()
    {
        return false;
    }
    String::from_utf8_lossy(&first_line)
        .trim()
        .starts_with(SHEBANG)
}
