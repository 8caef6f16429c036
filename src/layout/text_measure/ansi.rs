//! ANSI escape sequence stripping.
//!
//! Colorized block lines carry SGR sequences (`ESC [ ... m`) that take no
//! room on screen. Anything shaped like a CSI sequence is removed before
//! measuring; a lone `ESC` followed by another byte is dropped together
//! with that byte.

use std::borrow::Cow;

const ESC: u8 = 0x1B;

/// Strip ANSI escape sequences from a string.
///
/// Borrows when there is nothing to strip.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i..].iter().position(|&b| b == ESC) {
            Some(offset) => {
                // ESC is ASCII, so slicing right before it is a char boundary.
                out.push_str(&s[i..i + offset]);
                i = escape_end(bytes, i + offset);
            }
            None => {
                out.push_str(&s[i..]);
                break;
            }
        }
    }

    Cow::Owned(out)
}

/// Byte index right after the escape sequence that starts at `pos`.
fn escape_end(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos + 1) {
        None => bytes.len(),
        Some(b'[') => csi_end(bytes, pos + 2),
        Some(_) => pos + 2,
    }
}

/// CSI: parameter bytes (0x30-0x3F), intermediates (0x20-0x2F), final
/// byte (0x40-0x7E).
fn csi_end(bytes: &[u8], start: usize) -> usize {
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x3F).contains(&b) {
            return i;
        }
    }
    bytes.len()
}
