use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

// We reference types from the binary crate by including modules directly.
#[path = "../src/app.rs"]
mod app;
#[path = "../src/command.rs"]
mod command;
#[path = "../src/panels/mod.rs"]
mod panels;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

use cc_core::executor::{Resolution, ResponseTable};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn type_str(app: &mut app::App, text: &str) {
    for c in text.chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
}

/// Resolve every queued command synchronously with the canned table.
fn resolve_all(app: &mut app::App) {
    let table = ResponseTable::default();
    for pending in app.take_submitted() {
        let outcome = Ok(table.respond(&pending.command));
        app.apply_resolution(Resolution {
            seq: pending.seq,
            command: pending.command,
            outcome,
        });
    }
}

#[test]
fn test_app_new_creates_valid_state() {
    let app = app::App::demo();
    assert!(!app.should_quit);
    assert!(!app.show_help);
    assert_eq!(app.title, "PHNX COMMAND CENTER");
    assert_eq!(app.data.agents.len(), 4);
    assert_eq!(app.data.mcp_servers.len(), 6);
    assert_eq!(app.console.transcript().len(), 2);
    assert!(app.console.input.is_empty());
}

#[test]
fn test_typing_fills_prompt() {
    let mut app = app::App::demo();
    type_str(&mut app, "status");
    assert_eq!(app.console.input.text(), "status");
    app.on_key(key(KeyCode::Backspace));
    assert_eq!(app.console.input.text(), "statu");
    app.on_key(key(KeyCode::Esc));
    assert!(app.console.input.is_empty());
}

#[test]
fn test_plain_q_is_text_not_quit() {
    let mut app = app::App::demo();
    app.on_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.console.input.text(), "q");
}

#[test]
fn test_ctrl_c_and_ctrl_q_quit() {
    let mut app = app::App::demo();
    app.on_key(ctrl('c'));
    assert!(app.should_quit);

    let mut app = app::App::demo();
    app.on_key(ctrl('q'));
    assert!(app.should_quit);
}

#[test]
fn test_enter_on_blank_prompt_does_nothing() {
    let mut app = app::App::demo();
    app.on_key(key(KeyCode::Enter));
    type_str(&mut app, "   ");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.console.transcript().len(), 2);
    assert!(app.take_submitted().is_empty());
}

#[test]
fn test_submit_status_round_trip() {
    let mut app = app::App::demo();
    type_str(&mut app, "status");
    app.on_key(key(KeyCode::Enter));

    assert!(app.console.input.is_empty(), "prompt clears on submit");
    assert_eq!(
        &app.console.transcript().texts()[2..],
        &["> status", "Executing: status..."]
    );
    assert_eq!(app.console.pending_count(), 1);

    resolve_all(&mut app);
    assert_eq!(
        app.console.transcript().texts().last(),
        Some(&"All systems operational. RSI: 4/4 pillars active. MCP: 6 servers connected.")
    );
    assert_eq!(app.console.pending_count(), 0);
}

#[test]
fn test_unknown_and_mixed_case_commands() {
    let mut app = app::App::demo();
    type_str(&mut app, "unknown_xyz");
    app.on_key(key(KeyCode::Enter));
    type_str(&mut app, "Help");
    app.on_key(key(KeyCode::Enter));
    resolve_all(&mut app);

    let texts = app.console.transcript().texts();
    assert_eq!(texts[2], "> unknown_xyz");
    assert_eq!(texts[4], "> Help");
    assert_eq!(texts[6], "Command executed: unknown_xyz");
    assert_eq!(texts[7], "Available commands: status, agents, mcp, projects, clear");
}

#[test]
fn test_quick_action_populates_without_submitting() {
    let mut app = app::App::demo();
    app.on_key(key(KeyCode::F(2)));
    assert_eq!(app.console.input.text(), "run_forager");
    assert_eq!(app.console.transcript().len(), 2);
    assert!(app.take_submitted().is_empty());

    app.on_key(key(KeyCode::F(5)));
    assert_eq!(app.console.input.text(), "system_health");

    // Explicit submit sends it.
    app.on_key(key(KeyCode::Enter));
    resolve_all(&mut app);
    assert_eq!(
        app.console.transcript().texts().last(),
        Some(&"Command executed: system_health")
    );
}

#[test]
fn test_history_recall_with_arrows() {
    let mut app = app::App::demo();
    for cmd in ["status", "agents"] {
        type_str(&mut app, cmd);
        app.on_key(key(KeyCode::Enter));
    }
    app.on_key(key(KeyCode::Up));
    assert_eq!(app.console.input.text(), "agents");
    app.on_key(key(KeyCode::Up));
    assert_eq!(app.console.input.text(), "status");
    app.on_key(key(KeyCode::Down));
    app.on_key(key(KeyCode::Down));
    assert!(app.console.input.is_empty());
}

#[test]
fn test_cursor_editing() {
    let mut app = app::App::demo();
    type_str(&mut app, "stats");
    app.on_key(key(KeyCode::Left));
    app.on_key(key(KeyCode::Left));
    type_str(&mut app, "tu");
    assert_eq!(app.console.input.text(), "statuts");
    app.on_key(key(KeyCode::Delete));
    assert_eq!(app.console.input.text(), "statuss");
    app.on_key(key(KeyCode::End));
    app.on_key(key(KeyCode::Backspace));
    assert_eq!(app.console.input.text(), "status");
    app.on_key(key(KeyCode::Home));
    assert_eq!(app.console.input.cursor(), 0);
}

#[test]
fn test_help_modal_swallows_keys() {
    let mut app = app::App::demo();
    app.on_key(key(KeyCode::F(1)));
    assert!(app.show_help);

    type_str(&mut app, "abc");
    app.on_key(key(KeyCode::Enter));
    assert!(app.console.input.is_empty());
    assert!(app.take_submitted().is_empty());

    app.on_key(key(KeyCode::Esc));
    assert!(!app.show_help);
}

#[test]
fn test_release_events_ignored() {
    let mut app = app::App::demo();
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;
    app.on_key(release);
    assert!(app.console.input.is_empty());
}

#[test]
fn test_transcript_scroll_clamps() {
    let mut app = app::App::demo();
    for _ in 0..10 {
        app.on_key(key(KeyCode::PageUp));
    }
    // Two banner lines: can scroll at most one line up.
    assert_eq!(app.transcript_scroll, 1);

    app.on_key(key(KeyCode::PageDown));
    assert_eq!(app.transcript_scroll, 0);

    app.transcript_scroll = 1;
    type_str(&mut app, "status");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.transcript_scroll, 0, "submitting jumps back to the tail");
}

#[test]
fn test_headless_script_flow() {
    let mut app = app::App::demo();
    for line in [":quick 1", ":type", "status", r#"{"cmd":"submit","args":["agents"]}"#] {
        let cmd = command::parse_line(line).expect("parses");
        command::execute_command(&mut app, cmd);
    }
    assert_eq!(app.console.pending_count(), 2);
    resolve_all(&mut app);

    let json = command::execute_command(&mut app, command::AppCommand::QueryTranscript).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    let lines = v["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[7]["text"], "Forager: idle, Forge: idle, Crucible: idle, Warden: idle");
    assert_eq!(lines[7]["kind"], "response");
    assert_eq!(v["pending"], 0);
}
