//! Headless mode: commands in, JSON events out.
//!
//! Input lines and command resolutions arrive on two flume channels and are
//! handled in whichever order they become ready, so a response is emitted
//! as soon as its command finishes even while the input stays idle.
//!
//! Usage: `echo status | command-center --headless`

use std::io::{self, BufRead, Write};

use cc_core::executor::{Dispatcher, Resolution};

use crate::app::App;
use crate::command;

enum Event {
    Input(Result<String, flume::RecvError>),
    Resolved(Result<Resolution, flume::RecvError>),
}

/// Forward stdin lines over a channel from a dedicated reader thread.
///
/// The channel disconnects at EOF or on a read error.
pub fn spawn_stdin_reader() -> io::Result<flume::Receiver<String>> {
    let (tx, rx) = flume::unbounded();
    std::thread::Builder::new()
        .name("cc-stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Run until the input closes (or `:quit`) and every outstanding command
/// has resolved. Each transcript line is written to `out` as it appears.
pub fn run<W: Write>(
    mut app: App,
    dispatcher: &Dispatcher,
    input: &flume::Receiver<String>,
    resolutions: &flume::Receiver<Resolution>,
    out: &mut W,
) -> io::Result<()> {
    emit_event(
        out,
        &serde_json::json!({
            "event": "started",
            "title": app.title,
            "transcript": app.console.transcript().texts(),
        }),
    )?;
    let mut mark = app.console.transcript().total_pushed();
    let mut input_open = true;

    loop {
        if !input_open && app.console.pending_count() == 0 {
            break;
        }

        let event = if input_open {
            flume::Selector::new()
                .recv(input, Event::Input)
                .recv(resolutions, Event::Resolved)
                .wait()
        } else {
            Event::Resolved(resolutions.recv())
        };

        match event {
            Event::Input(Ok(line)) => {
                handle_line(&mut app, dispatcher, &line, out)?;
                if app.should_quit {
                    input_open = false;
                }
            }
            Event::Input(Err(_)) => input_open = false,
            Event::Resolved(Ok(resolution)) => {
                app.apply_resolution(resolution);
            }
            Event::Resolved(Err(_)) => {
                tracing::warn!(
                    pending = app.console.pending_count(),
                    "resolution channel closed"
                );
                break;
            }
        }
        mark = emit_new_lines(out, &app, mark)?;
    }

    emit_event(out, &serde_json::json!({"event": "quit"}))
}

fn handle_line<W: Write>(
    app: &mut App,
    dispatcher: &Dispatcher,
    line: &str,
    out: &mut W,
) -> io::Result<()> {
    let Some(cmd) = command::parse_line(line) else {
        if !line.trim().is_empty() {
            emit_event(
                out,
                &serde_json::json!({
                    "event": "error",
                    "message": format!("unknown command: {}", line.trim()),
                }),
            )?;
        }
        return Ok(());
    };

    if let Some(json_str) = command::execute_command(app, cmd) {
        writeln!(out, "{json_str}")?;
        out.flush()?;
    }
    for pending in app.take_submitted() {
        dispatcher.dispatch(pending);
    }
    Ok(())
}

/// Emit transcript lines appended since `mark`; returns the new mark.
fn emit_new_lines<W: Write>(out: &mut W, app: &App, mark: u64) -> io::Result<u64> {
    let transcript = app.console.transcript();
    for line in transcript.since(mark) {
        emit_event(
            out,
            &serde_json::json!({
                "event": "line",
                "kind": line.kind,
                "text": line.text,
            }),
        )?;
    }
    Ok(transcript.total_pushed())
}

fn emit_event<W: Write>(out: &mut W, value: &serde_json::Value) -> io::Result<()> {
    writeln!(out, "{value}")?;
    out.flush()
}
