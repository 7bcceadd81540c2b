use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize logging with human-readable output format on stderr.
///
/// Uses the `RUST_LOG` environment variable if set, otherwise falls back
/// to `default_level` (e.g. "info", "debug", "cc_core=debug,warn").
///
/// Safe to call multiple times (e.g. in tests) -- subsequent calls are no-ops.
pub fn init_logging(service_name: &str, default_level: &str) {
    fmt()
        .with_env_filter(filter(default_level))
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .try_init()
        .ok();

    tracing::info!(service = service_name, "logging initialised (human-readable)");
}

/// Initialize logging with JSON output format on stderr.
///
/// Safe to call multiple times -- subsequent calls are no-ops.
pub fn init_logging_json(service_name: &str, default_level: &str) {
    fmt()
        .json()
        .with_env_filter(filter(default_level))
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .try_init()
        .ok();

    tracing::info!(service = service_name, "logging initialised (json)");
}

/// Initialize logging into `path` (appending), without ANSI colours.
///
/// Used while the TUI owns the terminal. Returns the error only when the
/// file cannot be opened; an already-installed subscriber is not an error.
pub fn init_logging_to_file(
    service_name: &str,
    default_level: &str,
    path: &Path,
    json: bool,
) -> io::Result<()> {
    let file: File = OpenOptions::new().create(true).append(true).open(path)?;
    let writer = Mutex::new(file);

    let builder = fmt()
        .with_env_filter(filter(default_level))
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true);

    if json {
        builder.json().with_writer(writer).try_init().ok();
    } else {
        builder.with_writer(writer).try_init().ok();
    }

    tracing::info!(
        service = service_name,
        path = %path.display(),
        "logging initialised (file)"
    );
    Ok(())
}
