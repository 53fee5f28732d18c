//! Best-effort text loading for collected files.

use encoding_rs::UTF_8;
use std::fs;
use std::path::Path;

/// Appended to content cut at the character limit.
pub const TRUNCATION_MARKER: &str = "\n\n... (file truncated, too long)";
/// Stands in for content that could not be read at all.
pub const UNREADABLE_PLACEHOLDER: &str = "// Unable to read file";

/// Read `path` as text, never failing.
///
/// Line endings are normalised to `\n` and content longer than `max_chars`
/// characters is truncated and marked. An I/O failure yields
/// [`UNREADABLE_PLACEHOLDER`].
#[must_use]
pub fn read_content(path: &Path, max_chars: usize) -> String {
    match fs::read(path) {
        Ok(bytes) => truncate(normalize_newlines(decode(&bytes)), max_chars),
        Err(e) => {
            log::warn!("Could not read {}: {e}", path.display());
            UNREADABLE_PLACEHOLDER.to_string()
        }
    }
}

/// UTF-8 with malformed sequences replaced; a leading BOM is stripped.
fn decode(bytes: &[u8]) -> String {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        log::debug!("Replaced malformed UTF-8 sequences");
    }
    text.into_owned()
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

fn truncate(mut text: String, max_chars: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(max_chars) {
        text.truncate(cut);
        text.push_str(TRUNCATION_MARKER);
    }
    text
}
