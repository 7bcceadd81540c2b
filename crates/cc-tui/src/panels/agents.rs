use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use cc_core::status::IndicatorSize;

use crate::app::App;
use crate::widgets::{card::card, status_dot};

/// Agent Swarm card: name, queue depth, last run and a status dot.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let opacity = app.pulse_opacity();
    let rows: Vec<Row> = app
        .data
        .agents
        .iter()
        .map(|a| {
            Row::new(vec![
                Cell::from(a.emoji.as_str()),
                Cell::from(a.name.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(format!("Queue: {}", a.queue_count))
                    .style(Style::default().fg(Color::Gray)),
                Cell::from(a.last_run.as_str()).style(Style::default().fg(Color::Gray)),
                Cell::from(status_dot::dot(a.status.as_str(), IndicatorSize::Medium, opacity)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(2),
    ];
    let table = Table::new(rows, widths).block(card("Agent Swarm", Color::Magenta));
    frame.render_widget(table, area);
}
