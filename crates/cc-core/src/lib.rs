//! Core model for the command center dashboard.
//!
//! Everything here is UI-agnostic: fixture data, the status palette, the
//! command console state machine and its async executor, the clock ticker
//! and configuration loading. The terminal front end lives in `cc-tui`.

pub mod clock;
pub mod config;
pub mod console;
pub mod executor;
pub mod fixtures;
pub mod status;
pub mod types;
