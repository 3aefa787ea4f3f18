//! Color parsing utilities for chart rendering.
//!
//! Colors stay CSS strings end to end, since both Chart.js and Canvas 2D take
//! them directly. Parsing is only needed to validate configured colors and to
//! derive tints.

/// RGB color with u8 components for color manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse any color accepted by [`parse_color_rgba`], dropping alpha.
    pub fn from_css(s: &str) -> Option<Self> {
        let (r, g, b, _) = parse_color_rgba(s)?;
        Some(Self { r, g, b })
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Lighten the color by blending with white.
    /// Factor of 0.0 = no change, 1.0 = pure white.
    pub fn lighten(self, factor: f64) -> Self {
        Self {
            r: Self::blend_component(self.r, 255, factor),
            g: Self::blend_component(self.g, 255, factor),
            b: Self::blend_component(self.b, 255, factor),
        }
    }

    /// Blend a single color component toward a target.
    /// The cast is safe because we clamp to [0, 255] before converting.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn blend_component(from: u8, to: u8, factor: f64) -> u8 {
        let from = f64::from(from);
        let to = f64::from(to);
        let blended = from + (to - from) * factor.clamp(0.0, 1.0);
        blended.clamp(0.0, 255.0).round() as u8
    }
}

/// Whether `s` is a color this crate understands.
///
/// Supports formats:
/// - "#RRGGBB" and "#RGB"
/// - "RRGGBB" (hex without # prefix)
/// - "rgb(r, g, b)"
/// - "rgba(r, g, b, a)"
pub fn is_color(s: &str) -> bool {
    parse_color_rgba(s).is_some()
}

/// Parse color and return RGBA components (0-255 for RGB, 0.0-1.0 for alpha)
pub fn parse_color_rgba(s: &str) -> Option<(u8, u8, u8, f64)> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        parse_hex_rgba(hex)
    } else if s.starts_with("rgba(") {
        parse_rgba_string(s)
    } else if s.starts_with("rgb(") {
        parse_rgb_string(s)
    } else {
        // Try as plain hex
        parse_hex_rgba(s)
    }
}

fn parse_hex_rgba(hex: &str) -> Option<(u8, u8, u8, f64)> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some((r, g, b, 1.0))
        }
        3 => {
            // #RGB expands each digit: #1e7 == #11EE77
            let r = u8::from_str_radix(hex.get(0..1)?, 16).ok()? * 17;
            let g = u8::from_str_radix(hex.get(1..2)?, 16).ok()? * 17;
            let b = u8::from_str_radix(hex.get(2..3)?, 16).ok()? * 17;
            Some((r, g, b, 1.0))
        }
        _ => None,
    }
}

fn parse_rgb_string(s: &str) -> Option<(u8, u8, u8, f64)> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim());
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b, 1.0))
}

fn parse_rgba_string(s: &str) -> Option<(u8, u8, u8, f64)> {
    let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim());
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    let a: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some((r, g, b, a))
}

/// Neutral colors used by the built-in canvas backend (CSS format)
pub mod palette {
    pub const WHITE: &str = "#FFFFFF";

    /// Vertical grid lines
    pub const GRID_LINE: &str = "rgba(0, 0, 0, 0.1)";

    /// Tick labels and axis title
    pub const TICK_TEXT: &str = "#666666";

    /// How far the bar color is lightened for the unfilled track
    pub const TRACK_TINT: f64 = 0.85;
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        let (r, g, b, a) = parse_color_rgba("#28a745").unwrap();
        assert_eq!((r, g, b), (0x28, 0xA7, 0x45));
        assert!((a - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_hex_3() {
        let (r, g, b, _) = parse_color_rgba("#1e7").unwrap();
        assert_eq!((r, g, b), (0x11, 0xEE, 0x77));
    }

    #[test]
    fn test_parse_rgb() {
        let (r, g, b, _) = parse_color_rgba(" rgb(255, 128, 64) ").unwrap();
        assert_eq!((r, g, b), (255, 128, 64));
    }

    #[test]
    fn test_parse_rgba() {
        let (_, _, _, a) = parse_color_rgba("rgba(255, 128, 64, 0.5)").unwrap();
        assert!((a - 0.5).abs() < 0.001);
        assert!(!is_color("rgba(255, 128, 64, 2)"));
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(Rgb::from_css("FF0000"), Some(Rgb { r: 255, g: 0, b: 0 }));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_color("green-ish"));
        assert!(!is_color("rgb(300, 0, 0)"));
        assert!(!is_color("#12345"));
        assert!(!is_color(""));
    }

    #[test]
    fn test_lighten_toward_white() {
        let green = Rgb::from_css("#28a745").unwrap();
        assert_eq!(green.lighten(0.0), green);
        assert_eq!(green.lighten(1.0), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(green.lighten(palette::TRACK_TINT).to_hex(), "#DFF2E3");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb { r: 40, g: 167, b: 69 }.to_hex(), "#28A745");
    }
}
