use crate::rules;
use derive_builder::Builder;
use std::path::PathBuf;

/// Default artifact file name.
pub const DEFAULT_OUTPUT: &str = "project_code.txt";
/// Files larger than this are never collected.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 512 * 1024;
/// Collected content is cut after this many characters.
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 100_000;

/// Name and extension tables driving directory and file classification.
///
/// The default value borrows the built-in tables from [`crate::rules`].
/// Every entry is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionRules {
    pub ignore_dirs: &'static [&'static str],
    pub ignore_dir_patterns: &'static [&'static str],
    pub hidden_dir_exceptions: &'static [&'static str],
    pub force_exclude_files: &'static [&'static str],
    pub force_include_files: &'static [&'static str],
    pub ignore_extensions: &'static [&'static str],
    pub ignore_file_patterns: &'static [&'static str],
    pub extensionless_allow: &'static [&'static str],
    pub code_extensions: &'static [&'static str],
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            ignore_dirs: rules::IGNORE_DIRS,
            ignore_dir_patterns: rules::IGNORE_DIR_PATTERNS,
            hidden_dir_exceptions: rules::HIDDEN_DIR_EXCEPTIONS,
            force_exclude_files: rules::FORCE_EXCLUDE_FILES,
            force_include_files: rules::FORCE_INCLUDE_FILES,
            ignore_extensions: rules::IGNORE_EXTENSIONS,
            ignore_file_patterns: rules::IGNORE_FILE_PATTERNS,
            extensionless_allow: rules::EXTENSIONLESS_ALLOW,
            code_extensions: rules::CODE_EXTENSIONS,
        }
    }
}

impl ExclusionRules {
    /// Whether `ext` (lowercase, with leading dot) is a known source extension.
    #[must_use]
    pub fn is_code_extension(&self, ext: &str) -> bool {
        self.code_extensions.contains(&ext)
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output_path: PathBuf,
    /// Document written in front of the snapshot header.
    #[builder(default)]
    pub requirements: Option<PathBuf>,
    #[builder(default = "DEFAULT_MAX_FILE_SIZE")]
    pub max_file_size: u64,
    #[builder(default = "DEFAULT_MAX_CONTENT_CHARS")]
    pub max_content_chars: usize,
    #[builder(default)]
    pub rules: ExclusionRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            requirements: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            rules: ExclusionRules::default(),
        }
    }
}
