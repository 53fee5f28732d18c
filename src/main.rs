use clap::Parser;
use project_snapshot::args::Args;
use project_snapshot::config::Config;
use project_snapshot::error::Result;
use project_snapshot::presentation;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    presentation::print_scan_start(&config);

    let result = project_snapshot_engine::run_with_progress(&config, |event| {
        presentation::print_event(&event);
    })?;
    let size = project_snapshot_engine::write_snapshot(&result, &config.output_path)?;
    log::debug!("Wrote {size} bytes to {}", config.output_path.display());

    presentation::print_summary(&result, &config.output_path, size, &config.rules);
    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
