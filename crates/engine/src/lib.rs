// crates/engine/src/lib.rs
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod order;
pub mod reader;
pub mod render;
pub mod rules;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::ScanEvent;
use crate::stats::RunResult;

/// Collect the snapshot described by `config`.
///
/// # Errors
///
/// Fails when the root is missing or not a directory, or when the
/// requirements document cannot be read. Per-file problems never fail the
/// run; they are counted as skipped or replaced by placeholder content.
pub fn run(config: &Config) -> Result<RunResult> {
    run_with_progress(config, |_| {})
}

/// Like [`run`], reporting each included file and walk failure to `on_event`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_progress<F>(config: &Config, on_event: F) -> Result<RunResult>
where
    F: FnMut(ScanEvent<'_>),
{
    if !config.root.exists() {
        return Err(EngineError::RootNotFound(config.root.clone()));
    }
    if !config.root.is_dir() {
        return Err(EngineError::Config(format!(
            "'{}' is not a directory",
            config.root.display()
        )));
    }

    let requirements = load_requirements(config.requirements.as_deref())?;

    let mut result = filesystem::collect(config, on_event);
    result.project_name = project_name(&config.root);
    result.requirements = requirements;
    order::sort_records(&mut result.records);

    debug_assert_eq!(result.included() + result.skipped, result.total);
    Ok(result)
}

/// Write `result` to `path`, replacing any existing file.
///
/// Returns the size of the written file in bytes.
///
/// # Errors
///
/// Any I/O failure aborts the write. A partially written file is left as is.
pub fn write_snapshot(result: &RunResult, path: &Path) -> Result<u64> {
    let write_err = |source| EngineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    render::render(&mut writer, result).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    let file = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
    Ok(file.metadata().map_err(write_err)?.len())
}

fn load_requirements(path: Option<&Path>) -> Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text = fs::read_to_string(path).map_err(|source| EngineError::Requirements {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((!text.trim().is_empty()).then_some(text))
}

fn project_name(root: &Path) -> String {
    root.file_name()
        .map(ToOwned::to_owned)
        .or_else(|| root.canonicalize().ok()?.file_name().map(ToOwned::to_owned))
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
