//! Character table
//!
//! Maps the printable ASCII characters the display can show onto the
//! segments that must be lit to render them. The table is a `match`
//! resolved at compile time; a character without an arm is unsupported.
//!
//! Glyph shapes follow the common 16-segment ASCII font, see
//! <https://www.partsnotincluded.com/electronics/segmented-led-display-ascii-library>

use super::Segment::{self, *};

/// Segments needed to display the character, `None` if unsupported
pub fn character_segments(c: char) -> Option<&'static [Segment]> {
    let segs: &'static [Segment] = match c {
        ' ' => &[],
        '!' => &[B, C],
        '"' => &[J, B],
        '#' => &[J, B, G1, G2, M, C, D1, D2],
        '$' => &[A1, A2, F, J, G1, G2, M, C, D1, D2],
        '%' => &[A1, F, J, K, G1, G2, N, M, C, D2],
        '&' => &[A1, H, J, G1, E, L, D1, D2],
        '\'' => &[J],
        '(' => &[K, L],
        ')' => &[H, N],
        '*' => &[H, J, K, G1, G2, N, M, L],
        '+' => &[J, G1, G2, M],
        ',' => &[N],
        '-' => &[G1, G2],
        '/' => &[N, K],

        '0' => &[A1, A2, F, K, B, E, N, C, D1, D2],
        '1' => &[K, B, C],
        '2' => &[A1, A2, B, G1, G2, E, D1, D2],
        '3' => &[A1, A2, B, G2, C, D1, D2],
        '4' => &[F, B, G1, G2, C],
        '5' => &[A1, A2, F, G1, L, D1, D2],
        '6' => &[A1, A2, F, G1, G2, E, C, D1, D2],
        '7' => &[A1, A2, B, C],
        '8' => &[A1, A2, F, B, G1, G2, E, C, D1, D2],
        '9' => &[A1, A2, F, B, G1, G2, C, D1, D2],

        ':' => &[J, M],
        ';' => &[J, N],
        '<' => &[K, G1, L],
        '=' => &[G1, G2, D1, D2],
        '>' => &[H, G2, N],
        '?' => &[A1, A2, B, G2, M],
        '@' => &[A1, A2, F, J, B, G2, E, D1, D2],

        'A' => &[A1, A2, F, B, G1, G2, E, C],
        'B' => &[A1, A2, J, B, G2, M, C, D1, D2],
        'C' => &[A1, A2, F, E, D1, D2],
        'D' => &[A1, A2, J, B, M, C, D1, D2],
        'E' => &[A1, A2, F, G1, E, D1, D2],
        'F' => &[A1, A2, F, G1, E],
        'G' => &[A1, A2, F, G2, E, C, D1, D2],
        'H' => &[F, B, G1, G2, E, C],
        'I' => &[A1, A2, J, M, D1, D2],
        'J' => &[B, E, C, D1, D2],
        'K' => &[F, K, G1, E, L],
        'L' => &[F, E, D1, D2],
        'M' => &[F, H, K, B, E, C],
        'N' => &[F, H, B, E, L, C],
        'O' => &[A1, A2, F, B, E, C, D1, D2],
        'P' => &[A1, A2, F, B, G1, G2, E],
        'Q' => &[A1, A2, F, B, E, L, C, D1, D2],
        'R' => &[A1, A2, F, B, G1, G2, E, L],
        'S' => &[A1, A2, F, G1, G2, C, D1, D2],
        'T' => &[A1, A2, J, M],
        'U' => &[F, B, E, C, D1, D2],
        'V' => &[F, K, E, N],
        'W' => &[F, E, N, L, C, B],
        'X' => &[H, K, N, L],
        'Y' => &[F, B, G1, G2, C, D1, D2],
        'Z' => &[A1, A2, K, N, D1, D2],

        '[' => &[A2, J, M, D2],
        '\\' => &[H, L],
        ']' => &[A1, J, M, D1],
        '^' => &[N, L],
        '_' => &[D1, D2],
        '`' => &[H],

        'a' => &[G1, E, M, D1, D2],
        'b' => &[F, G1, E, M, D1],
        'c' => &[G1, E, D1],
        'd' => &[B, G2, M, C, D2],
        'e' => &[G1, E, N, D1],
        'f' => &[A2, J, G1, G2, M],
        'g' => &[A1, F, J, G1, M, D1],
        'h' => &[F, G1, E, M],
        'i' => &[M],
        'j' => &[J, E, M, D1],
        'k' => &[J, K, M, L],
        'l' => &[F, E],
        'm' => &[G1, G2, E, M, C],
        'n' => &[G1, E, M],
        'o' => &[G1, E, M, D1],
        'p' => &[A1, F, J, G1, E],
        'q' => &[A1, F, J, G1, M],
        'r' => &[G1, E],
        's' => &[A1, F, G1, M, D1],
        't' => &[F, G1, E, D1],
        'u' => &[E, M, D1],
        'v' => &[E, N],
        'w' => &[E, N, L, C],
        'x' => &[H, K, N, L],
        'y' => &[J, B, G2, C, D2],
        'z' => &[G1, N, D1],

        '{' => &[A2, J, G1, M, D2],
        '|' => &[J, M],
        '}' => &[A1, J, G2, M, D1],
        '~' => &[K, G1, G2, N],

        _ => return None,
    };
    Some(segs)
}

/// Check if the character has an entry in the table
#[inline]
pub fn is_supported(c: char) -> bool {
    character_segments(c).is_some()
}

/// Check whether every character of `s` can be displayed.
///
/// Returns the unsupported characters once each, in order of first
/// appearance.
pub fn supports_chars(s: &str) -> (bool, Vec<char>) {
    let mut unsupported: Vec<char> = Vec::new();
    for c in s.chars() {
        if !is_supported(c) && !unsupported.contains(&c) {
            unsupported.push(c);
        }
    }
    (unsupported.is_empty(), unsupported)
}

/// Copy of `s` with every unsupported character replaced by a space
pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if is_supported(c) { c } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_printable_ascii_except_period() {
        for c in ' '..='~' {
            assert_eq!(is_supported(c), c != '.', "unexpected support for {:?}", c);
        }
        assert!(!is_supported('\n'));
        assert!(!is_supported('\u{7f}'));
        assert!(!is_supported('é'));
    }

    #[test]
    fn test_no_duplicate_segments() {
        for c in ' '..='~' {
            if let Some(segs) = character_segments(c) {
                for (i, s) in segs.iter().enumerate() {
                    assert!(!segs[i + 1..].contains(s), "{:?} lists {} twice", c, s);
                }
            }
        }
    }

    #[test]
    fn test_space_lights_nothing() {
        assert_eq!(character_segments(' '), Some(&[][..]));
    }

    #[test]
    fn test_supports_chars() {
        assert_eq!(supports_chars("Hi!"), (true, vec![]));
        assert_eq!(supports_chars("Hi😀"), (false, vec!['😀']));
        assert_eq!(supports_chars(""), (true, vec![]));
    }

    #[test]
    fn test_supports_chars_collapses_duplicates() {
        let (ok, unsupp) = supports_chars("a.b.c\u{e9}.");
        assert!(!ok);
        assert_eq!(unsupp, vec!['.', '\u{e9}']);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("1.5°C"), "1 5 C");
        assert_eq!(sanitize("ok"), "ok");
        assert_eq!(sanitize(""), "");
    }
}
