//! student-records binary: interactive menu over stdin/stdout.
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use student_records::config::Config;
use student_records::shell::{SessionEnd, Shell};
use student_records::store::RecordStore;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(end) => {
            tracing::info!(?end, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("student-records: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<SessionEnd> {
    let config = Config::from_env().context("failed to read configuration")?;
    tracing::info!(
        data_file = %config.data_file.display(),
        format = %config.format,
        "student-records starting up"
    );

    let mut store = RecordStore::with_format(config.format);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&mut store, config.data_file, stdin.lock(), stdout.lock());

    shell.restore().context("failed to write to the terminal")?;
    let end = shell.run().context("terminal I/O failed")?;
    Ok(end)
}
