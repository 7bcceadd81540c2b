use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cc_core::status::IndicatorSize;
use cc_core::types::McpServer;

use crate::app::App;
use crate::panels::projects::heading;
use crate::widgets::{card::card, status_dot};

/// MCP Servers: one tile per server with icon, status and optional details.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(heading("MCP Servers"), chunks[0]);

    let servers = &app.data.mcp_servers;
    if servers.is_empty() {
        return;
    }

    let count = servers.len() as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(servers.iter().map(|_| Constraint::Ratio(1, count)))
        .split(chunks[1]);

    let opacity = app.pulse_opacity();
    for (server, col) in servers.iter().zip(cols.iter()) {
        render_tile(frame, server, *col, opacity);
    }
}

fn render_tile(frame: &mut Frame, server: &McpServer, area: Rect, opacity: f32) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", server.icon.glyph()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                server.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            status_dot::dot(server.status.as_str(), IndicatorSize::Small, opacity),
            Span::styled(
                format!(" {}", server.status.as_str()),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];
    if let Some(details) = &server.details {
        lines.push(Line::from(Span::styled(
            details.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let tile = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card("", Color::White));
    frame.render_widget(tile, area);
}
