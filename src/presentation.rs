// src/presentation.rs
use crate::config::Config;
use project_snapshot_engine::config::ExclusionRules;
use project_snapshot_engine::filesystem::ScanEvent;
use project_snapshot_engine::render::extension_label;
use project_snapshot_engine::stats::RunResult;
use std::path::Path;

const CONSOLE_RULE_WIDTH: usize = 60;
const TOP_TYPES: usize = 5;

pub fn print_scan_start(config: &Config) {
    println!("Scanning project: {}", crate::config::display_root(config).display());
    println!("Snapshot will be written to: {}", config.output_path.display());
    println!("{}", "=".repeat(CONSOLE_RULE_WIDTH));
}

pub fn print_event(event: &ScanEvent<'_>) {
    match event {
        ScanEvent::Included(record) => println!("Included: {}", record.relative_path),
        ScanEvent::Failed(err) => eprintln!("Skipped unreadable entry: {err}"),
    }
}

pub fn print_summary(result: &RunResult, output: &Path, output_size: u64, rules: &ExclusionRules) {
    println!("{}", "=".repeat(CONSOLE_RULE_WIDTH));
    println!("Done! Files collected into: {}", output.display());
    println!("Included files: {}", result.included());
    println!("Skipped files: {}", result.skipped);
    println!("Total files: {}", result.total);
    println!("Output size: {}", format_size(output_size));
    println!("Source code files: {}", result.code_files(rules));

    let histogram = result.extension_histogram();
    if histogram.is_empty() {
        return;
    }
    println!();
    println!("Included file types:");
    for (ext, count) in histogram.iter().take(TOP_TYPES) {
        println!("   {}: {count} file(s)", extension_label(ext));
    }
}

/// Human readable size: KB below one MiB, MB from there on.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let value = bytes as f64;
    if value > MIB {
        format!("{:.1} MB", value / MIB)
    } else {
        format!("{:.1} KB", value / KIB)
    }
}
