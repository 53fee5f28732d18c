// src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use project_snapshot_engine::config::{Config, ConfigBuilder, ExclusionRules};
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let root = match args.directory {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        ConfigBuilder::default()
            .root(root)
            .output_path(args.output)
            .requirements(args.requirements)
            .max_file_size(args.max_size.0)
            .max_content_chars(args.max_chars)
            .rules(ExclusionRules::default())
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

/// Root as shown to the user: canonical when it resolves.
#[must_use]
pub fn display_root(config: &Config) -> PathBuf {
    config
        .root
        .canonicalize()
        .unwrap_or_else(|_| config.root.clone())
}
