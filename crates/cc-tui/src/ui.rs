use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use cc_core::executor::ResponseTable;

use crate::app::App;
use crate::panels;
use crate::widgets::{help_modal, status_bar};

/// Master render function: header, card rows, console, status bar.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(9), // infrastructure / agents / metrics
            Constraint::Length(6), // projects
            Constraint::Length(6), // mcp servers
            Constraint::Min(6),    // command interface
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    panels::header::render(frame, app, chunks[0]);
    render_top_cards(frame, app, chunks[1]);
    panels::projects::render(frame, app, chunks[2]);
    panels::mcp::render(frame, app, chunks[3]);
    panels::console::render(frame, app, chunks[4]);
    status_bar::render(
        frame,
        chunks[5],
        app.console.pending_count(),
        app.transcript_scroll,
    );

    if app.show_help {
        let table = ResponseTable::default();
        help_modal::render(frame, &table.keys());
    }
}

fn render_top_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    panels::infrastructure::render(frame, app, cols[0]);
    panels::agents::render(frame, app, cols[1]);
    panels::metrics::render(frame, app, cols[2]);
}
