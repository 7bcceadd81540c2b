use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use cc_core::config::Config;
use cc_core::console::{Console, PendingCommand, TranscriptLine, QUICK_ACTIONS};
use cc_core::executor::Resolution;
use cc_core::fixtures::DashboardData;
use cc_core::status::pulse_opacity;

/// Root UI state. Lives on the main thread only; async results reach it
/// through [`App::apply_resolution`] and [`App::set_time`].
pub struct App {
    pub title: String,
    pub data: DashboardData,
    pub console: Console,
    pub now: DateTime<Local>,
    pub time_format: String,
    pub started: Instant,
    pub pulse_period: Duration,
    pub show_help: bool,
    pub should_quit: bool,
    /// Lines scrolled up from the bottom of the transcript.
    pub transcript_scroll: usize,
    submitted: Vec<PendingCommand>,
}

impl App {
    pub fn new(data: DashboardData, config: &Config) -> Self {
        Self {
            title: config.general.title.clone(),
            data,
            console: Console::new(
                config.console.transcript_capacity,
                config.console.history_size,
            ),
            now: Local::now(),
            time_format: config.clock.time_format.clone(),
            started: Instant::now(),
            pulse_period: config.ui.pulse_period(),
            show_help: false,
            should_quit: false,
            transcript_scroll: 0,
            submitted: Vec::new(),
        }
    }

    /// Demo fixtures with default configuration.
    #[allow(dead_code)]
    pub fn demo() -> Self {
        Self::new(DashboardData::demo(), &Config::default())
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Help modal intercepts everything except quit.
        if self.show_help {
            match key.code {
                KeyCode::F(1) | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            // Quit
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
            }

            KeyCode::F(1) => self.show_help = true,
            KeyCode::F(n @ 2..=5) => {
                self.quick_action((n - 2) as usize);
            }

            // Prompt
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Esc => self.console.input.clear(),
            KeyCode::Backspace => self.console.input.delete_back(),
            KeyCode::Delete => self.console.input.delete_forward(),
            KeyCode::Left => self.console.input.move_left(),
            KeyCode::Right => self.console.input.move_right(),
            KeyCode::Home => self.console.input.move_home(),
            KeyCode::End => self.console.input.move_end(),
            KeyCode::Up => self.console.input.history_prev(),
            KeyCode::Down => self.console.input.history_next(),

            // Transcript scrolling
            KeyCode::PageUp => {
                let max = self.console.transcript().len().saturating_sub(1);
                self.transcript_scroll = (self.transcript_scroll + 5).min(max);
            }
            KeyCode::PageDown => {
                self.transcript_scroll = self.transcript_scroll.saturating_sub(5);
            }

            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.console.input.insert(c);
            }

            _ => {}
        }
    }

    /// Submit the prompt. The command is queued for the dispatcher; see
    /// [`App::take_submitted`].
    pub fn submit(&mut self) -> bool {
        match self.console.submit() {
            Some(pending) => {
                self.submitted.push(pending);
                self.transcript_scroll = 0;
                true
            }
            None => false,
        }
    }

    /// Fill the prompt from the quick action at `index` (0-based).
    pub fn quick_action(&mut self, index: usize) -> bool {
        match QUICK_ACTIONS.get(index) {
            Some(label) => {
                self.console.quick_action(label);
                true
            }
            None => false,
        }
    }

    /// Commands submitted since the last call, oldest first.
    pub fn take_submitted(&mut self) -> Vec<PendingCommand> {
        std::mem::take(&mut self.submitted)
    }

    pub fn apply_resolution(&mut self, resolution: Resolution) -> Vec<TranscriptLine> {
        self.console.resolve(resolution)
    }

    pub fn set_time(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    pub fn clock_text(&self) -> String {
        self.now.format(&self.time_format).to_string()
    }

    /// Current opacity shared by every status dot.
    pub fn pulse_opacity(&self) -> f32 {
        pulse_opacity(self.started.elapsed(), self.pulse_period)
    }
}
