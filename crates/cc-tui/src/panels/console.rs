use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use cc_core::console::{LineKind, TranscriptLine, ECHO_PREFIX, QUICK_ACTIONS};

use crate::app::App;
use crate::widgets::card::card;

const PLACEHOLDER: &str = "Enter command (try: status, agents, help)";

/// Command Interface: transcript, prompt and quick-action hints.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = card("Command Interface", Color::Yellow);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_transcript(frame, app, chunks[0]);
    render_prompt(frame, app, chunks[1]);
    render_quick_actions(frame, chunks[2]);
}

/// Indices `start..end` of the transcript lines visible in `height` rows.
pub fn visible_window(total: usize, height: usize, scroll: usize) -> (usize, usize) {
    let end = total.saturating_sub(scroll);
    (end.saturating_sub(height), end)
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let transcript = app.console.transcript();
    let (start, end) = visible_window(
        transcript.len(),
        area.height as usize,
        app.transcript_scroll,
    );
    let lines: Vec<Line> = transcript
        .iter()
        .skip(start)
        .take(end - start)
        .map(styled_line)
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn styled_line(line: &TranscriptLine) -> Line<'_> {
    let style = if line.is_echo() {
        Style::default().fg(Color::Cyan)
    } else {
        match line.kind {
            LineKind::Progress => Style::default().fg(Color::DarkGray),
            LineKind::Failure => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Gray),
        }
    };
    Line::from(Span::styled(line.text.as_str(), style))
}

fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let input = &app.console.input;
    let body = if input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input.text(), Style::default().fg(Color::White))
    };
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(
            ECHO_PREFIX,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        body,
    ]));
    frame.render_widget(prompt, area);

    if !app.show_help && area.height > 0 {
        let offset = (ECHO_PREFIX.width() + input.before_cursor().width()) as u16;
        let x = area.x + offset.min(area.width.saturating_sub(1));
        frame.set_cursor_position((x, area.y));
    }
}

fn render_quick_actions(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        spans.push(Span::styled(
            format!("[F{}]", i + 2),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {action}  ")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
