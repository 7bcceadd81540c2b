use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Render the bottom status bar: key hints left, console state right.
pub fn render(frame: &mut Frame, area: Rect, pending: usize, scroll: usize) {
    let left = vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Submit  "),
        Span::styled("[F2-F5]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quick action  "),
        Span::styled("[F1]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[Ctrl-c]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    let mut right_text = format!("pending: {pending} ");
    if scroll > 0 {
        right_text = format!("scrolled +{scroll}  {right_text}");
    }

    // Left hints and right-aligned state share one line; pad the middle.
    let left_len: usize = left.iter().map(|s| s.content.width()).sum();
    let total_width = area.width as usize;
    let padding = if total_width > left_len + right_text.len() {
        total_width - left_len - right_text.len()
    } else {
        1
    };

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right_text, Style::default().fg(Color::Gray)));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(bar, area);
}
