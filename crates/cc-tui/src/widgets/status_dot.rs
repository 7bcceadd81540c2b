use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use cc_core::status::{is_dimmed, status_tone, IndicatorSize, StatusTone};

pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Green => Color::Green,
        StatusTone::Yellow => Color::Yellow,
        StatusTone::Red => Color::Red,
        StatusTone::Blue => Color::Blue,
        StatusTone::Gray => Color::DarkGray,
    }
}

/// A status dot for `label`, dimmed during the low half of the pulse.
pub fn dot(label: &str, size: IndicatorSize, opacity: f32) -> Span<'static> {
    let mut style = Style::default().fg(tone_color(status_tone(label)));
    style = if is_dimmed(opacity) {
        style.add_modifier(Modifier::DIM)
    } else {
        style.add_modifier(Modifier::BOLD)
    };
    Span::styled(size.glyph(), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_is_gray() {
        let span = dot("mystery", IndicatorSize::Medium, 1.0);
        assert_eq!(span.style.fg, Some(Color::DarkGray));
        assert_eq!(span.content, "●");
    }

    #[test]
    fn dims_at_half_opacity() {
        let bright = dot("active", IndicatorSize::Small, 1.0);
        let dim = dot("active", IndicatorSize::Small, 0.5);
        assert!(bright.style.add_modifier.contains(Modifier::BOLD));
        assert!(dim.style.add_modifier.contains(Modifier::DIM));
        assert_eq!(dim.style.fg, Some(Color::Green));
    }

    #[test]
    fn complete_is_blue() {
        assert_eq!(dot("complete", IndicatorSize::Large, 1.0).style.fg, Some(Color::Blue));
    }
}
