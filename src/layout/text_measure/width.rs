//! Display width of terminal text.
//!
//! Widths are counted in terminal cells: escape sequences count zero,
//! East Asian wide characters and emoji count two, combining marks and
//! control characters count zero.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;

/// Display width of a single codepoint.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Emoji blocks terminals render wide regardless of East Asian Width.
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF | 0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of one grapheme cluster.
///
/// ZWJ sequences, flags, skin tones and keycaps collapse to a single wide
/// cell pair; a base character with combining marks keeps the base width.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if chars.as_str().is_empty() {
        return char_width(first);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }
    if chars.any(|c| matches!(c as u32, 0x200D | 0xFE0F | 0x20E3 | 0x1F3FB..=0x1F3FF)) {
        return 2;
    }

    char_width(first)
}

/// Display width of a string after discarding ANSI escape sequences.
///
/// The input is never modified; this is what padding and wrap budgets are
/// computed from once text has been colorized.
pub fn display_width(s: &str) -> usize {
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| b >= 0x20 && b != 0x7F).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}
