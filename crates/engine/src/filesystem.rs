use crate::classify::{extension_of, has_skipped_ancestor, should_exclude_file};
use crate::config::Config;
use crate::reader::read_content;
use crate::stats::{FileRecord, RunResult};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Progress notifications emitted while collecting.
#[derive(Debug)]
pub enum ScanEvent<'a> {
    Included(&'a FileRecord),
    Failed(&'a ignore::Error),
}

/// Sequential recursive walk under `config.root`.
///
/// Every regular file is counted, including symlinks that resolve to one;
/// directory links are not followed. Files below a skipped directory or
/// rejected by [`should_exclude_file`] count as skipped; the rest are read
/// and returned unordered. Entries the walker cannot access are logged and
/// counted as skipped. The snapshot output file itself is ignored.
pub fn collect<F>(config: &Config, mut on_event: F) -> RunResult
where
    F: FnMut(ScanEvent<'_>),
{
    let rules = &config.rules;
    let output = OutputFile::new(&config.output_path);
    let mut result = RunResult {
        root: config.root.clone(),
        ..RunResult::default()
    };

    let mut builder = WalkBuilder::new(&config.root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                record_failure(&mut result, &err, &mut on_event);
                continue;
            }
        };

        let path = entry.path();
        if !is_regular_file(&entry) {
            continue;
        }
        if output.matches(path) {
            continue;
        }

        result.total += 1;
        let relative = path.strip_prefix(&config.root).unwrap_or(path);

        if has_skipped_ancestor(relative, rules) {
            result.skipped += 1;
            continue;
        }
        if should_exclude_file(path, rules, config.max_file_size) {
            log::debug!("Excluded {}", relative.display());
            result.skipped += 1;
            continue;
        }

        let content = read_content(path, config.max_content_chars);
        let record = FileRecord::new(slash_path(relative), extension_of(path), content);
        on_event(ScanEvent::Included(&record));
        result.records.push(record);
    }

    result
}

/// Counts an entry the walker could not access as visited and skipped.
fn record_failure<F>(result: &mut RunResult, err: &ignore::Error, on_event: &mut F)
where
    F: FnMut(ScanEvent<'_>),
{
    log::debug!("Skipping inaccessible entry: {err}");
    result.total += 1;
    result.skipped += 1;
    on_event(ScanEvent::Failed(err));
}

fn is_regular_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
        _ => false,
    }
}

/// Relative path with `/` separators regardless of platform.
#[must_use]
pub fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Identifies the artifact being written so a rerun never collects it.
struct OutputFile {
    name: Option<std::ffi::OsString>,
    canonical: Option<PathBuf>,
}

impl OutputFile {
    fn new(path: &Path) -> Self {
        Self {
            name: path.file_name().map(ToOwned::to_owned),
            canonical: canonical_target(path),
        }
    }

    fn matches(&self, candidate: &Path) -> bool {
        if self.name.as_deref() != candidate.file_name() {
            return false;
        }
        match (&self.canonical, candidate.canonicalize()) {
            (Some(target), Ok(found)) => *target == found,
            _ => false,
        }
    }
}

/// Canonical form of a path that may not exist yet.
fn canonical_target(path: &Path) -> Option<PathBuf> {
    if let Ok(existing) = path.canonicalize() {
        return Some(existing);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.canonicalize().ok()?,
        _ => std::env::current_dir().ok()?,
    };
    Some(parent.join(name))
}
