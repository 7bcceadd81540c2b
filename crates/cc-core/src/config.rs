use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration loaded from `~/.command-center/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from `~/.command-center/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.console.validate()?;
        if self.clock.tick_ms == 0 {
            return Err(ConfigError::Validation("clock.tick_ms must be > 0".into()));
        }
        if StrftimeItems::new(&self.clock.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Validation(format!(
                "clock.time_format '{}' is not a valid strftime pattern",
                self.clock.time_format
            )));
        }
        if self.ui.poll_ms == 0 {
            return Err(ConfigError::Validation("ui.poll_ms must be > 0".into()));
        }
        if self.ui.pulse_period_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.pulse_period_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".command-center")
            .join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "PHNX COMMAND CENTER".into()
}
fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Fixed delay before a canned response is appended.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    /// Maximum transcript lines kept; the oldest are evicted first.
    #[serde(default = "default_transcript_capacity")]
    pub transcript_capacity: usize,
    /// Submitted commands remembered for Up/Down recall.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl ConsoleConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.response_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "console.response_delay_ms must be > 0".into(),
            ));
        }
        if self.transcript_capacity < 2 {
            return Err(ConfigError::Validation(format!(
                "console.transcript_capacity must be >= 2, got {}",
                self.transcript_capacity
            )));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            transcript_capacity: default_transcript_capacity(),
            history_size: default_history_size(),
        }
    }
}

fn default_response_delay_ms() -> u64 {
    500
}
fn default_transcript_capacity() -> usize {
    500
}
fn default_history_size() -> usize {
    50
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// `chrono` strftime pattern for the header clock.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

impl ClockConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            time_format: default_time_format(),
        }
    }
}

fn default_tick_ms() -> u64 {
    1000
}
fn default_time_format() -> String {
    "%H:%M:%S".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the main loop waits for a key before redrawing.
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
    #[serde(default = "default_pulse_period_ms")]
    pub pulse_period_ms: u64,
}

impl UiConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn pulse_period(&self) -> Duration {
        Duration::from_millis(self.pulse_period_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_ms: default_poll_ms(),
            pulse_period_ms: default_pulse_period_ms(),
        }
    }
}

fn default_poll_ms() -> u64 {
    250
}
fn default_pulse_period_ms() -> u64 {
    2000
}
