//! Scriptable command surface for headless mode.
//!
//! Two input forms are accepted, one per line:
//! - **JSON**: `{"cmd":"submit","args":["status"]}`
//! - **Text**: `:submit status`, `:quick 1`, `:query transcript`. A line
//!   without a leading `:` is submitted to the console as-is.
//!
//! Query commands return serialized state as JSON strings so that scripts
//! can inspect the dashboard without a terminal.

use serde::Serialize;

use cc_core::console::{TranscriptLine, QUICK_ACTIONS};
use cc_core::executor::ResponseTable;
use cc_core::types::{Agent, InfraComponent, McpServer, Project, SystemMetrics};

use crate::app::App;

// ---------------------------------------------------------------------------
// AppCommand enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Put text in the prompt and submit it.
    Submit(String),
    /// Put text in the prompt without submitting.
    Type(String),
    /// Press a quick-action button (1-based).
    QuickAction(usize),

    QueryTranscript,
    QueryState,

    Help,
    Quit,
}

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command string.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim();
    let input = input.strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(|s| s.trim());

    match verb {
        "submit" | "s" => {
            let text = arg?;
            if text.is_empty() {
                return None;
            }
            Some(AppCommand::Submit(text.to_string()))
        }
        "type" | "t" => Some(AppCommand::Type(arg.unwrap_or_default().to_string())),
        "quick" | "action" => {
            let idx: usize = arg?.parse().ok()?;
            Some(AppCommand::QuickAction(idx))
        }
        "query" => match arg? {
            "transcript" => Some(AppCommand::QueryTranscript),
            "state" => Some(AppCommand::QueryState),
            _ => None,
        },
        "help" | "?" => Some(AppCommand::Help),
        "quit" | "q" => Some(AppCommand::Quit),
        _ => None,
    }
}

/// Parse a JSON command, e.g. `{"cmd":"quick_action","args":[1]}`.
pub fn parse_json_command(json: &str) -> Option<AppCommand> {
    let v: serde_json::Value = serde_json::from_str(json).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args");

    let arg_usize =
        |idx: usize| -> Option<usize> { args?.as_array()?.get(idx)?.as_u64().map(|n| n as usize) };
    let arg_str = |idx: usize| -> Option<&str> { args?.as_array()?.get(idx)?.as_str() };

    match cmd {
        "submit" => Some(AppCommand::Submit(arg_str(0)?.to_string())),
        "type" => Some(AppCommand::Type(arg_str(0).unwrap_or_default().to_string())),
        "quick_action" => Some(AppCommand::QuickAction(arg_usize(0)?)),
        "query_transcript" => Some(AppCommand::QueryTranscript),
        "query_state" => Some(AppCommand::QueryState),
        "help" => Some(AppCommand::Help),
        "quit" => Some(AppCommand::Quit),
        _ => None,
    }
}

/// Parse one headless input line in any accepted form.
///
/// Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<AppCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }
    let trimmed = line.trim_start();
    if trimmed.starts_with('{') {
        parse_json_command(trimmed)
    } else if trimmed.starts_with(':') {
        parse_command(trimmed)
    } else {
        Some(AppCommand::Submit(line.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TranscriptSnapshot<'a> {
    lines: Vec<&'a TranscriptLine>,
    evicted: u64,
    pending: usize,
}

#[derive(Serialize)]
struct StateSnapshot<'a> {
    title: &'a str,
    clock: String,
    input: String,
    pending: usize,
    agents: &'a [Agent],
    mcp_servers: &'a [McpServer],
    projects: &'a [Project],
    infrastructure: &'a [InfraComponent],
    metrics: &'a SystemMetrics,
}

/// Execute a command against the application state.
///
/// Returns `Some(json_string)` for queries and help, `None` otherwise.
/// Submitted commands are queued on the app; the caller dispatches them.
pub fn execute_command(app: &mut App, cmd: AppCommand) -> Option<String> {
    match cmd {
        AppCommand::Submit(text) => {
            app.console.input.set(&text);
            app.submit();
            None
        }
        AppCommand::Type(text) => {
            app.console.input.set(&text);
            None
        }
        AppCommand::QuickAction(n) => {
            if n == 0 || !app.quick_action(n - 1) {
                tracing::debug!(index = n, "quick action out of range");
            }
            None
        }
        AppCommand::QueryTranscript => {
            let transcript = app.console.transcript();
            let snapshot = TranscriptSnapshot {
                lines: transcript.iter().collect(),
                evicted: transcript.evicted(),
                pending: app.console.pending_count(),
            };
            serde_json::to_string(&snapshot).ok()
        }
        AppCommand::QueryState => {
            let snapshot = StateSnapshot {
                title: &app.title,
                clock: app.clock_text(),
                input: app.console.input.text(),
                pending: app.console.pending_count(),
                agents: &app.data.agents,
                mcp_servers: &app.data.mcp_servers,
                projects: &app.data.projects,
                infrastructure: &app.data.infrastructure,
                metrics: &app.data.metrics,
            };
            serde_json::to_string(&snapshot).ok()
        }
        AppCommand::Help => {
            let table = ResponseTable::default();
            let help = serde_json::json!({
                "event": "help",
                "commands": table.keys(),
                "quick_actions": QUICK_ACTIONS,
                "control": [
                    ":submit <text>",
                    ":type <text>",
                    ":quick <n>",
                    ":query transcript",
                    ":query state",
                    ":help",
                    ":quit",
                ],
            });
            Some(help.to_string())
        }
        AppCommand::Quit => {
            app.should_quit = true;
            None
        }
    }
}
