//! Async execution of console commands.
//!
//! The UI thread never awaits anything: it hands a [`PendingCommand`] to the
//! [`Dispatcher`], which runs the [`CommandExecutor`] on the tokio runtime
//! and sends the [`Resolution`] back over a flume channel.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::console::PendingCommand;

/// Failure reported by an executor for a single command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExecError {
    pub message: String,
}

impl ExecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of one submitted command, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub seq: u64,
    pub command: String,
    pub outcome: Result<String, ExecError>,
}

#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &str) -> Result<String, ExecError>;
}

// ---------------------------------------------------------------------------
// Response table
// ---------------------------------------------------------------------------

/// Fixed command -> response lookup. Keys are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: HashMap<String, String>,
}

impl ResponseTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with(mut self, key: &str, response: &str) -> Self {
        self.entries.insert(key.to_lowercase(), response.to_string());
        self
    }

    pub fn get(&self, command: &str) -> Option<&str> {
        self.entries.get(&command.to_lowercase()).map(String::as_str)
    }

    /// The mapped response, or the generic acknowledgement.
    pub fn respond(&self, command: &str) -> String {
        match self.get(command) {
            Some(text) => text.to_string(),
            None => format!("Command executed: {command}"),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::new()
            .with(
                "status",
                "All systems operational. RSI: 4/4 pillars active. MCP: 6 servers connected.",
            )
            .with(
                "agents",
                "Forager: idle, Forge: idle, Crucible: idle, Warden: idle",
            )
            .with(
                "help",
                "Available commands: status, agents, mcp, projects, clear",
            )
    }
}

// ---------------------------------------------------------------------------
// CannedExecutor
// ---------------------------------------------------------------------------

/// Waits a fixed delay, then answers from the [`ResponseTable`].
#[derive(Debug, Clone)]
pub struct CannedExecutor {
    table: ResponseTable,
    delay: Duration,
}

impl CannedExecutor {
    pub fn new(table: ResponseTable, delay: Duration) -> Self {
        Self { table, delay }
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }
}

#[async_trait]
impl CommandExecutor for CannedExecutor {
    async fn execute(&self, command: &str) -> Result<String, ExecError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.table.respond(command))
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Spawns one task per submitted command on a tokio runtime.
///
/// Tasks are neither cancelled nor coalesced; each one sends exactly one
/// [`Resolution`] unless the receiving side has gone away.
#[derive(Clone)]
pub struct Dispatcher {
    handle: Handle,
    executor: Arc<dyn CommandExecutor>,
    tx: flume::Sender<Resolution>,
}

impl Dispatcher {
    pub fn new(
        handle: Handle,
        executor: Arc<dyn CommandExecutor>,
    ) -> (Self, flume::Receiver<Resolution>) {
        let (tx, rx) = flume::unbounded();
        (
            Self {
                handle,
                executor,
                tx,
            },
            rx,
        )
    }

    pub fn dispatch(&self, pending: PendingCommand) -> JoinHandle<()> {
        let executor = Arc::clone(&self.executor);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let PendingCommand { seq, command } = pending;
            let outcome = executor.execute(&command).await;
            if let Err(ref e) = outcome {
                tracing::warn!(seq, command = %command, error = %e, "command failed");
            } else {
                tracing::debug!(seq, command = %command, "command resolved");
            }
            if tx.send(Resolution { seq, command, outcome }).is_err() {
                tracing::debug!(seq, "resolution dropped: console closed");
            }
        })
    }
}
