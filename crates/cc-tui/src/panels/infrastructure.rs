use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use cc_core::status::IndicatorSize;

use crate::app::App;
use crate::widgets::{card::card, status_dot};

/// Infrastructure Health card: one row per core component.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let opacity = app.pulse_opacity();
    let rows: Vec<Row> = app
        .data
        .infrastructure
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.icon.glyph()).style(Style::default().fg(Color::Cyan)),
                Cell::from(c.name.as_str()),
                Cell::from(status_dot::dot(&c.status, IndicatorSize::Medium, opacity)),
            ])
        })
        .collect();

    let widths = [Constraint::Length(2), Constraint::Min(10), Constraint::Length(2)];
    let table = Table::new(rows, widths).block(card("Infrastructure Health", Color::Cyan));
    frame.render_widget(table, area);
}
