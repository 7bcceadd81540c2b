use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Build a one-line horizontal gauge `width` cells wide.
///
/// Example output: `Health ██████████ 100%`
///
/// The filled portion uses `color`; the empty portion is dark gray.
pub fn gauge_line(label: &str, progress: u8, width: u16, color: Color) -> Line<'static> {
    let progress = progress.min(100);
    let pct_text = format!(" {progress}%");
    let label_display = format!("{label} ");

    let overhead = label_display.chars().count() + pct_text.len();
    let bar_width = (width as usize).saturating_sub(overhead);

    let filled_count = bar_width * progress as usize / 100;
    let empty_count = bar_width.saturating_sub(filled_count);

    Line::from(vec![
        Span::styled(label_display, Style::default().fg(Color::Gray)),
        Span::styled("\u{2588}".repeat(filled_count), Style::default().fg(color)),
        Span::styled("\u{2591}".repeat(empty_count), Style::default().fg(Color::DarkGray)),
        Span::styled(pct_text, Style::default().fg(color)),
    ])
}

/// Render a gauge filling the first row of `area`.
pub fn render_gauge(frame: &mut Frame, area: Rect, label: &str, progress: u8, color: Color) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let line = gauge_line(label, progress, area.width, color);
    frame.render_widget(Paragraph::new(line), Rect { height: 1, ..area });
}
