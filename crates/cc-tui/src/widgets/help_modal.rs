use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use cc_core::console::QUICK_ACTIONS;

/// Render a centered help modal overlay.
pub fn render(frame: &mut Frame, commands: &[&str]) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the area behind the popup.
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "  Keybindings",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_line("Enter", "Submit command"),
        help_line("Up / Down", "Previous / next command"),
        help_line("Left / Right", "Move cursor"),
        help_line("Home / End", "Start / end of line"),
        help_line("Esc", "Clear prompt / close help"),
        help_line("PgUp / PgDn", "Scroll transcript"),
        help_line("F1", "Toggle this help"),
    ];
    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        lines.push(help_line(&format!("F{}", i + 2), action));
    }
    lines.push(help_line("Ctrl-c / Ctrl-q", "Quit"));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Commands: ", Style::default().fg(Color::Yellow)),
        Span::raw(commands.join(", ")),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press F1 or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{:<20}", key),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(desc.to_string()),
    ])
}

/// A `percent_x` by `percent_y` rectangle centered in `parent`.
fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(parent);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    area
}
