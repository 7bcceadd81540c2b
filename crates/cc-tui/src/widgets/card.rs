use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Rounded container used by every dashboard card.
pub fn card(title: &str, accent: Color) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    if title.is_empty() {
        return block;
    }
    block.title(Line::from(Span::styled(
        format!(" {title} "),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )))
}

/// A labelled value with an optional unit, e.g. `CPU  23 %`.
pub fn render_metric_box(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    unit: Option<&str>,
) {
    let mut spans = vec![Span::styled(
        value.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if let Some(unit) = unit {
        spans.push(Span::styled(format!(" {unit}"), Style::default().fg(Color::Gray)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(format!(" {label} "), Style::default().fg(Color::Gray)));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
