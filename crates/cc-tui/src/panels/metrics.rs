use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::widgets::card::{card, render_metric_box};

/// Real-time Metrics card: 2x2 metric boxes plus queue depth.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = card("Real-time Metrics", Color::Green);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let m = &app.data.metrics;
    let cpu = m.cpu_percent.to_string();
    let memory = format!("{:.1}", m.memory_gb);
    let tasks = m.active_tasks.to_string();
    let boxes: [(&str, &str, Option<&str>); 4] = [
        ("CPU", cpu.as_str(), Some("%")),
        ("Memory", memory.as_str(), Some("GB")),
        ("Uptime", m.uptime.as_str(), None),
        ("Tasks", tasks.as_str(), None),
    ];

    for (row, pair) in boxes.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        for (col, (label, value, unit)) in pair.iter().enumerate() {
            render_metric_box(frame, cols[col], label, value, *unit);
        }
    }

    let queue = Paragraph::new(Line::from(vec![
        Span::styled(" Queue Depth: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} items", m.queue_depth),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    frame.render_widget(queue, rows[2]);
}
