//! Command console state: input line, transcript and the per-command
//! pending/resolved state machine.
//!
//! The console itself never waits. [`Console::submit`] echoes the command
//! and hands back a [`PendingCommand`]; whoever runs the async side (see
//! [`crate::executor::Dispatcher`]) later feeds the [`Resolution`] into
//! [`Console::resolve`]. Resolutions are applied strictly in submission
//! order: one that arrives early is held until every earlier command has
//! resolved.

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use crate::executor::Resolution;

/// Lines shown when the console is first created.
pub const BANNER: [&str; 2] = [
    "PHNX Command Center v2.0 initialized...",
    "All systems operational.",
];

/// Labels of the quick-action buttons below the prompt.
pub const QUICK_ACTIONS: [&str; 4] = [
    "Run Forager",
    "Check Status",
    "View Reports",
    "System Health",
];

/// Prefix that marks a transcript line as an echoed command.
pub const ECHO_PREFIX: &str = "> ";

/// Input text a quick-action button writes into the prompt.
///
/// `"Run Forager"` becomes `"run_forager"`.
pub fn quick_action_command(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Banner,
    Echo,
    Progress,
    Response,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn is_echo(&self) -> bool {
        self.text.starts_with(ECHO_PREFIX)
    }
}

/// Append-only line buffer with a fixed capacity.
///
/// Once full, every push evicts the oldest line.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: VecDeque<TranscriptLine>,
    capacity: usize,
    evicted: u64,
}

impl Transcript {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            evicted: 0,
        }
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) -> &TranscriptLine {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
            self.evicted += 1;
        }
        self.lines.push_back(TranscriptLine {
            kind,
            text: text.into(),
        });
        // Just pushed, so never empty.
        &self.lines[self.lines.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lines dropped so far to stay within capacity.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Lines ever pushed, including evicted ones.
    pub fn total_pushed(&self) -> u64 {
        self.evicted + self.lines.len() as u64
    }

    /// Lines pushed after the point where [`Transcript::total_pushed`]
    /// returned `mark`, skipping any already evicted.
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &TranscriptLine> {
        let skip = mark.saturating_sub(self.evicted) as usize;
        self.lines.iter().skip(skip)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TranscriptLine> + ExactSizeIterator {
        self.lines.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// InputLine
// ---------------------------------------------------------------------------

/// Single-line editor with cursor movement and in-session history.
///
/// The buffer is a `Vec<char>` so cursor operations stay on character
/// boundaries.
#[derive(Debug, Clone)]
pub struct InputLine {
    buffer: Vec<char>,
    cursor: usize,
    history: VecDeque<String>,
    history_limit: usize,
    history_pos: Option<usize>,
    saved_input: String,
}

impl InputLine {
    pub fn new(history_limit: usize) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            history: VecDeque::new(),
            history_limit,
            history_pos: None,
            saved_input: String::new(),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Text left of the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> String {
        self.buffer[..self.cursor].iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the whole buffer and put the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
        self.history_pos = None;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_pos = None;
    }

    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Recall the previous (older) history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            None => {
                self.saved_input = self.text();
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(p) => p - 1,
        };
        self.history_pos = Some(pos);
        self.load(self.history[pos].clone());
    }

    /// Move toward newer entries; past the newest restores the unsent input.
    pub fn history_next(&mut self) {
        let Some(pos) = self.history_pos else {
            return;
        };
        if pos + 1 < self.history.len() {
            self.history_pos = Some(pos + 1);
            self.load(self.history[pos + 1].clone());
        } else {
            self.history_pos = None;
            let saved = std::mem::take(&mut self.saved_input);
            self.load(saved);
        }
    }

    /// Take the current text, record it in history and clear the buffer.
    fn commit(&mut self) -> String {
        let text = self.text();
        if self.history_limit > 0 && self.history.back() != Some(&text) {
            self.history.push_back(text.clone());
            while self.history.len() > self.history_limit {
                self.history.pop_front();
            }
        }
        self.clear();
        self.saved_input.clear();
        text
    }

    fn load(&mut self, text: String) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
    }
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new(50)
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// A submitted command whose response has not been appended yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommand {
    pub seq: u64,
    pub command: String,
}

#[derive(Debug, Clone)]
pub struct Console {
    pub input: InputLine,
    transcript: Transcript,
    next_seq: u64,
    next_to_apply: u64,
    held: BTreeMap<u64, Resolution>,
}

impl Console {
    pub fn new(transcript_capacity: usize, history_size: usize) -> Self {
        let mut transcript = Transcript::new(transcript_capacity);
        for line in BANNER {
            transcript.push(LineKind::Banner, line);
        }
        Self {
            input: InputLine::new(history_size),
            transcript,
            next_seq: 0,
            next_to_apply: 0,
            held: BTreeMap::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Commands submitted but not yet resolved into the transcript.
    pub fn pending_count(&self) -> usize {
        (self.next_seq - self.next_to_apply) as usize
    }

    /// Fill the prompt with a quick-action preset. Does not submit.
    pub fn quick_action(&mut self, label: &str) {
        self.input.set(&quick_action_command(label));
    }

    /// Submit whatever is in the prompt.
    ///
    /// Blank input is ignored. Otherwise the echo and progress lines are
    /// appended, the prompt is cleared, and the returned command must be
    /// executed and later passed back through [`Console::resolve`].
    pub fn submit(&mut self) -> Option<PendingCommand> {
        if self.input.text().trim().is_empty() {
            return None;
        }
        let command = self.input.commit();
        self.transcript
            .push(LineKind::Echo, format!("{ECHO_PREFIX}{command}"));
        self.transcript
            .push(LineKind::Progress, format!("Executing: {command}..."));

        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::debug!(seq, command = %command, "command submitted");
        Some(PendingCommand { seq, command })
    }

    /// Apply a finished command. Returns the lines appended by this call,
    /// which may include held-back resolutions of later commands or be
    /// empty when earlier commands are still outstanding.
    pub fn resolve(&mut self, resolution: Resolution) -> Vec<TranscriptLine> {
        let seq = resolution.seq;
        if seq < self.next_to_apply || seq >= self.next_seq || self.held.contains_key(&seq) {
            tracing::warn!(seq, "ignoring resolution for unknown or already applied command");
            return Vec::new();
        }
        self.held.insert(seq, resolution);

        let mut appended = Vec::new();
        while let Some(next) = self.held.remove(&self.next_to_apply) {
            let line = match next.outcome {
                Ok(text) => self.transcript.push(LineKind::Response, text),
                Err(e) => self.transcript.push(
                    LineKind::Failure,
                    format!("Command failed: {} ({e})", next.command),
                ),
            };
            appended.push(line.clone());
            self.next_to_apply += 1;
        }
        if appended.is_empty() {
            tracing::debug!(seq, waiting_on = self.next_to_apply, "resolution held");
        }
        appended
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(500, 50)
    }
}
