use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cc_core::console::{Console, LineKind};
use cc_core::executor::{CannedExecutor, CommandExecutor, Dispatcher, ExecError, ResponseTable};
use tokio::runtime::Handle;
use tokio::time::Instant;

const STATUS_RESPONSE: &str =
    "All systems operational. RSI: 4/4 pillars active. MCP: 6 servers connected.";

fn canned() -> Arc<dyn CommandExecutor> {
    Arc::new(CannedExecutor::new(
        ResponseTable::default(),
        Duration::from_millis(500),
    ))
}

fn type_text(console: &mut Console, text: &str) {
    console.input.set(text);
}

#[test]
fn response_table_lookup() {
    let table = ResponseTable::default();
    assert_eq!(table.respond("status"), STATUS_RESPONSE);
    assert_eq!(table.respond("Help"), table.respond("help"));
    assert_eq!(table.respond("AGENTS"), table.respond("agents"));
    assert_eq!(table.respond("unknown_xyz"), "Command executed: unknown_xyz");
    // Fallback keeps the original casing.
    assert_eq!(table.respond("Deploy Now"), "Command executed: Deploy Now");
    assert_eq!(table.keys(), ["agents", "help", "status"]);
}

#[tokio::test(start_paused = true)]
async fn status_resolves_after_fixed_delay() {
    let mut console = Console::default();
    let (dispatcher, rx) = Dispatcher::new(Handle::current(), canned());

    type_text(&mut console, "status");
    let pending = console.submit().expect("pending");
    let start = Instant::now();
    dispatcher.dispatch(pending);

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert!(rx.try_recv().is_err(), "response must not arrive early");
    assert_eq!(console.pending_count(), 1);

    let resolution = rx.recv_async().await.expect("resolution");
    assert!(start.elapsed() >= Duration::from_millis(500));
    let appended = console.resolve(resolution);

    assert_eq!(appended.len(), 1);
    assert_eq!(appended[0].kind, LineKind::Response);
    let texts = console.transcript().texts();
    assert_eq!(
        &texts[2..],
        &["> status", "Executing: status...", STATUS_RESPONSE]
    );
    assert_eq!(console.pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn unknown_command_gets_generic_ack() {
    let mut console = Console::default();
    let (dispatcher, rx) = Dispatcher::new(Handle::current(), canned());

    type_text(&mut console, "unknown_xyz");
    dispatcher.dispatch(console.submit().unwrap());
    assert_eq!(console.transcript().texts()[2], "> unknown_xyz");

    console.resolve(rx.recv_async().await.unwrap());
    assert_eq!(
        console.transcript().texts().last(),
        Some(&"Command executed: unknown_xyz")
    );
}

#[tokio::test(start_paused = true)]
async fn mixed_case_help_matches_help() {
    let mut console = Console::default();
    let (dispatcher, rx) = Dispatcher::new(Handle::current(), canned());

    for cmd in ["Help", "help"] {
        type_text(&mut console, cmd);
        dispatcher.dispatch(console.submit().unwrap());
    }
    console.resolve(rx.recv_async().await.unwrap());
    console.resolve(rx.recv_async().await.unwrap());

    let texts = console.transcript().texts();
    let responses: Vec<_> = console
        .transcript()
        .iter()
        .filter(|l| l.kind == LineKind::Response)
        .map(|l| l.text.clone())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0], responses[1]);
    assert_eq!(texts.last(), Some(&"Available commands: status, agents, mcp, projects, clear"));
}

#[tokio::test(start_paused = true)]
async fn rapid_submissions_resolve_in_order() {
    let mut console = Console::default();
    let (dispatcher, rx) = Dispatcher::new(Handle::current(), canned());

    for cmd in ["status", "agents", "help", "other"] {
        type_text(&mut console, cmd);
        dispatcher.dispatch(console.submit().unwrap());
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(console.pending_count(), 4);

    while console.pending_count() > 0 {
        let res = rx.recv_async().await.unwrap();
        console.resolve(res);
    }

    let responses: Vec<_> = console
        .transcript()
        .iter()
        .filter(|l| l.kind == LineKind::Response)
        .map(|l| l.text.as_str().to_owned())
        .collect();
    assert_eq!(responses[0], STATUS_RESPONSE);
    assert!(responses[1].starts_with("Forager: idle"));
    assert!(responses[2].starts_with("Available commands"));
    assert_eq!(responses[3], "Command executed: other");
}

/// Finishes commands in reverse order of their numeric suffix.
struct SkewedExecutor;

#[async_trait]
impl CommandExecutor for SkewedExecutor {
    async fn execute(&self, command: &str) -> Result<String, ExecError> {
        let n: u64 = command.trim_start_matches("job").parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(1000 - n * 100)).await;
        if command == "job3" {
            return Err(ExecError::new("worker crashed"));
        }
        Ok(format!("{command} done"))
    }
}

#[tokio::test(start_paused = true)]
async fn late_finishers_do_not_reorder_transcript() {
    let mut console = Console::default();
    let (dispatcher, rx) = Dispatcher::new(Handle::current(), Arc::new(SkewedExecutor));

    for i in 1..=4 {
        type_text(&mut console, &format!("job{i}"));
        dispatcher.dispatch(console.submit().unwrap());
    }

    // job4 finishes first but is held until job1..job3 have been applied.
    let first = rx.recv_async().await.unwrap();
    assert_eq!(first.command, "job4");
    assert!(console.resolve(first).is_empty());

    while console.pending_count() > 0 {
        console.resolve(rx.recv_async().await.unwrap());
    }

    let tail: Vec<_> = console
        .transcript()
        .iter()
        .filter(|l| matches!(l.kind, LineKind::Response | LineKind::Failure))
        .map(|l| l.text.clone())
        .collect();
    assert_eq!(
        tail,
        [
            "job1 done",
            "job2 done",
            "Command failed: job3 (worker crashed)",
            "job4 done",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn dropped_console_does_not_panic_dispatcher() {
    let (dispatcher, rx) = Dispatcher::new(Handle::current(), canned());
    drop(rx);
    let task = dispatcher.dispatch(cc_core::console::PendingCommand {
        seq: 0,
        command: "status".into(),
    });
    task.await.expect("task completes cleanly");
}
