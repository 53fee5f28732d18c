// src/args.rs
use crate::parsers::{self, SizeArg};
use clap::{Parser, ValueHint};
use project_snapshot_engine::config::{DEFAULT_MAX_CONTENT_CHARS, DEFAULT_OUTPUT};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  project_snapshot                          # current directory
  project_snapshot -d /path/to/project      # another directory
  project_snapshot -o my_code.txt           # custom output file
  project_snapshot -d ~/app -r PRD.md       # prefix a requirements document

Secrets (.env files), lockfiles, dependency folders, media and binaries
are never collected.";

#[derive(Parser, Debug)]
#[command(
    name = "project_snapshot",
    version,
    about = "Collects a project's source files into a single text file",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Project directory (default: current directory)
    #[arg(short = 'd', long, value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Requirements document written before the collected files
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub requirements: Option<PathBuf>,

    /// Skip files larger than this (e.g. 512K, 2M)
    #[arg(long, default_value = "512K")]
    pub max_size: SizeArg,

    /// Truncate file content after this many characters
    #[arg(long, default_value_t = DEFAULT_MAX_CONTENT_CHARS, value_parser = parsers::parse_positive_usize)]
    pub max_chars: usize,
}
