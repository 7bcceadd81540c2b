//! Logging setup shared by the command center binaries.
//!
//! Wraps `tracing-subscriber` so every entry point initialises output the
//! same way: an `EnvFilter` driven by `RUST_LOG` with a configurable
//! fallback, rendered either human-readable, as JSON, or into a file when
//! the terminal itself is busy drawing the dashboard.

pub mod logging;
