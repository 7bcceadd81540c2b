use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cc_core::status::IndicatorSize;
use cc_core::types::Project;

use crate::app::App;
use crate::widgets::{card::card, gauge_bar, status_dot};

/// Project Dashboard: section heading and one card per project.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(heading("Project Dashboard"), chunks[0]);

    let projects = &app.data.projects;
    if projects.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("  no projects", Style::default().fg(Color::DarkGray))),
            chunks[1],
        );
        return;
    }

    let count = projects.len() as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(projects.iter().map(|_| Constraint::Ratio(1, count)))
        .split(chunks[1]);

    let opacity = app.pulse_opacity();
    for (project, col) in projects.iter().zip(cols.iter()) {
        render_project(frame, project, *col, opacity);
    }
}

fn render_project(frame: &mut Frame, project: &Project, area: Rect, opacity: f32) {
    let block = card(&project.name, Color::White);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            status_dot::dot(project.status.as_str(), IndicatorSize::Small, opacity),
            Span::styled(
                format!(" {}", project.status.as_str()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", project.metric), Style::default().fg(Color::Gray)),
            Span::styled(project.value.clone(), Style::default().fg(Color::Cyan)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height >= 3 {
        let gauge_area = Rect {
            y: inner.y + 2,
            height: 1,
            ..inner
        };
        gauge_bar::render_gauge(frame, gauge_area, "Health", project.health, Color::Green);
    }
}

pub fn heading(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(" ◈ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
}
