//! Plain-text snapshot serialization.
//!
//! Layout: optional requirements block, header with counters and the
//! per-extension histogram, then one framed section per record.

use crate::stats::RunResult;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;
const HISTOGRAM_RULE_WIDTH: usize = 40;

pub const REQUIREMENTS_BEGIN: &str = "--- PROJECT REQUIREMENTS DOCUMENT ---";
pub const REQUIREMENTS_END: &str = "--- END PROJECT REQUIREMENTS DOCUMENT ---";
pub const NO_EXTENSION: &str = "none";

/// Write the whole snapshot to `out`.
///
/// # Errors
/// Propagates the first write error.
pub fn render<W: Write>(out: &mut W, result: &RunResult) -> io::Result<()> {
    if let Some(requirements) = &result.requirements {
        writeln!(out, "{REQUIREMENTS_BEGIN}")?;
        out.write_all(requirements.as_bytes())?;
        writeln!(out, "\n{REQUIREMENTS_END}\n")?;
    }
    render_header(out, result)?;
    render_files(out, result)
}

fn render_header<W: Write>(out: &mut W, result: &RunResult) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "PROJECT SOURCE CODE")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Project: {}", result.project_name)?;
    writeln!(out, "Path: {}", result.root.display())?;
    writeln!(out, "Included files: {}", result.included())?;
    writeln!(out, "Skipped files: {}", result.skipped)?;
    writeln!(out, "Total files: {}", result.total)?;
    writeln!(out, "{rule}\n")?;

    writeln!(out, "FILE TYPES:")?;
    writeln!(out, "{}", "-".repeat(HISTOGRAM_RULE_WIDTH))?;
    for (ext, count) in result.extension_histogram() {
        writeln!(out, "{:<20} {count:>3} file(s)", extension_label(&ext))?;
    }
    writeln!(out, "\n{rule}\n")
}

fn render_files<W: Write>(out: &mut W, result: &RunResult) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let total = result.included();

    for (i, record) in result.records.iter().enumerate() {
        writeln!(out, "\n{rule}")?;
        writeln!(out, "FILE {}/{total}: {}", i + 1, record.relative_path)?;
        writeln!(out, "Size: {} chars", group_thousands(record.size_chars))?;
        writeln!(out, "Type: {}", extension_label(&record.extension))?;
        writeln!(out, "{rule}")?;
        out.write_all(record.content.as_bytes())?;
        out.write_all(b"\n\n")?;
    }
    Ok(())
}

/// The extension, or [`NO_EXTENSION`] when empty.
#[must_use]
pub fn extension_label(ext: &str) -> &str {
    if ext.is_empty() { NO_EXTENSION } else { ext }
}

/// Format `n` with `,` thousands separators.
#[must_use]
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
