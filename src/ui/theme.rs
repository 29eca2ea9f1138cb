use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0xd4, 0xff);
pub const ACCENT_SECONDARY: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0a, 0x0f);

/// Lowest opacity a fading item is drawn at, so the slot is never blank.
pub const MIN_VISIBLE_OPACITY: f32 = 0.15;

/// Blend `color` toward the background by `opacity`.
///
/// Non-RGB colors are returned unchanged.
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(MIN_VISIBLE_OPACITY, 1.0);
    match (color, BACKGROUND) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            blend(br, r, opacity),
            blend(bg, g, opacity),
            blend(bb, b, opacity),
        ),
        _ => color,
    }
}

fn blend(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_opacity_keeps_color() {
        assert_eq!(fade(HEADER_TEXT, 1.0), HEADER_TEXT);
    }

    #[test]
    fn zero_opacity_is_floored() {
        assert_ne!(fade(HEADER_TEXT, 0.0), BACKGROUND);
        assert_eq!(fade(HEADER_TEXT, 0.0), fade(HEADER_TEXT, MIN_VISIBLE_OPACITY));
    }

    #[test]
    fn named_colors_pass_through() {
        assert_eq!(fade(Color::Red, 0.3), Color::Red);
    }
}
