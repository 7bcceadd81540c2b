use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use cc_core::status::IndicatorSize;

use crate::app::App;
use crate::widgets::status_dot;

/// Title on the left, operational indicator and clock on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(32)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ◈ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, cols[0]);

    let status = Paragraph::new(Line::from(vec![
        status_dot::dot("active", IndicatorSize::Medium, app.pulse_opacity()),
        Span::styled(" OPERATIONAL  ", Style::default().fg(Color::Green)),
        Span::styled(app.clock_text(), Style::default().fg(Color::Gray)),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(status, cols[1]);
}
