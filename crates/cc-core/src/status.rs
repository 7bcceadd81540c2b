//! Status palette shared by every status dot on the dashboard.
//!
//! Labels are plain strings so that any fixture value can be rendered;
//! unknown labels degrade to [`StatusTone::Gray`] instead of failing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Period of one full pulse (full -> half -> full opacity).
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Below this opacity the renderer draws the dot dimmed.
pub const DIM_THRESHOLD: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

/// Map a status label to its dot colour.
pub fn status_tone(label: &str) -> StatusTone {
    match label {
        "active" | "connected" => StatusTone::Green,
        "idle" => StatusTone::Yellow,
        "error" => StatusTone::Red,
        "complete" => StatusTone::Blue,
        _ => StatusTone::Gray,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IndicatorSize {
    pub fn glyph(&self) -> &'static str {
        match self {
            IndicatorSize::Small => "•",
            IndicatorSize::Medium => "●",
            IndicatorSize::Large => "⬤",
        }
    }
}

/// Opacity of a pulsing dot `elapsed` after it was first shown.
///
/// Triangle wave over `period`: 1.0 at the start, 0.5 at the midpoint,
/// back to 1.0 at the end. Repeats forever.
pub fn pulse_opacity(elapsed: Duration, period: Duration) -> f32 {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return 1.0;
    }
    let phase = (elapsed.as_millis() % period_ms) as f32 / period_ms as f32;
    let distance = if phase < 0.5 { phase } else { 1.0 - phase };
    1.0 - distance
}

/// Whether a dot at this opacity is drawn dimmed.
pub fn is_dimmed(opacity: f32) -> bool {
    opacity < DIM_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(status_tone("active"), StatusTone::Green);
        assert_eq!(status_tone("connected"), StatusTone::Green);
        assert_eq!(status_tone("idle"), StatusTone::Yellow);
        assert_eq!(status_tone("error"), StatusTone::Red);
        assert_eq!(status_tone("complete"), StatusTone::Blue);
    }

    #[test]
    fn unknown_labels_fall_back_to_gray() {
        for label in ["", "disconnected", "ACTIVE", "warning", "in_progress", "🤖"] {
            assert_eq!(status_tone(label), StatusTone::Gray, "label {label:?}");
        }
    }

    #[test]
    fn default_size_is_medium() {
        assert_eq!(IndicatorSize::default(), IndicatorSize::Medium);
    }

    #[test]
    fn pulse_cycle() {
        let p = PULSE_PERIOD;
        assert!((pulse_opacity(Duration::ZERO, p) - 1.0).abs() < f32::EPSILON);
        assert!((pulse_opacity(Duration::from_millis(1000), p) - 0.5).abs() < 1e-6);
        assert!((pulse_opacity(Duration::from_millis(500), p) - 0.75).abs() < 1e-6);
        // Wraps around after a full period.
        assert!((pulse_opacity(Duration::from_millis(2000), p) - 1.0).abs() < 1e-6);
        assert!((pulse_opacity(Duration::from_millis(7000), p) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn pulse_stays_between_half_and_full() {
        for ms in (0..10_000).step_by(37) {
            let o = pulse_opacity(Duration::from_millis(ms), PULSE_PERIOD);
            assert!((0.5..=1.0).contains(&o), "opacity {o} at {ms}ms");
        }
    }

    #[test]
    fn zero_period_never_dims() {
        assert!(!is_dimmed(pulse_opacity(Duration::from_secs(3), Duration::ZERO)));
    }
}
