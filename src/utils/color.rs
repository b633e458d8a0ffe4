//! Color parsing utilities
//!
//! Turns the color strings found in configuration files into cell colors.

use crate::canvas::Color;

/// Parse an `RRGGBB` or `RGB` hex triplet, with or without a leading `#`.
///
/// Short triplets expand each digit, so "f80" is (255, 136, 0).
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    let channel = |shift: u32, bits: u32| ((value >> shift) & ((1 << bits) - 1)) as u8;
    match hex.len() {
        6 => Some((channel(16, 8), channel(8, 8), channel(0, 8))),
        3 => Some((channel(8, 4) * 17, channel(4, 4) * 17, channel(0, 4) * 17)),
        _ => None,
    }
}

/// Parse a color specification.
///
/// Supported formats:
/// - "" or "default" (terminal default color)
/// - 0-255 (256-color palette index)
/// - RRGGBB / #RRGGBB / RGB / #RGB (true color)
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    if spec.is_empty() || spec.eq_ignore_ascii_case("default") {
        return Some(Color::Default);
    }
    // Hex takes priority over index only when prefixed or 6 digits long
    if !spec.starts_with('#') && spec.len() != 6 {
        if let Ok(idx) = spec.parse::<u8>() {
            return Some(Color::Indexed(idx));
        }
    }
    parse_hex_color(spec).map(|(r, g, b)| Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Some((0, 255, 0)));
        assert_eq!(parse_hex_color("#0000ff"), Some((0, 0, 255)));
        assert_eq!(parse_hex_color("f00"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("#f00"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("f80"), Some((255, 136, 0)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("+12345"), None);
        assert_eq!(parse_hex_color("1234"), None);
        assert_eq!(parse_hex_color("ééé"), None);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(""), Some(Color::Default));
        assert_eq!(parse_color("Default"), Some(Color::Default));
        assert_eq!(parse_color("196"), Some(Color::Indexed(196)));
        assert_eq!(parse_color("#123"), Some(Color::Rgb(0x11, 0x22, 0x33)));
        assert_eq!(parse_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_color("300"), Some(Color::Rgb(0x33, 0, 0)));
        assert_eq!(parse_color("bogus"), None);
    }
}
