//! SGR escape sequences and colorization of block text.
//!
//! Colorizing wraps text in a color prefix and a trailing reset. Text that
//! was colorized before (a highlighted keyword inside a body line) carries
//! its own `ESC[0m` resets; each of those is followed by the outer prefix
//! again so the outer color resumes after the nested span.

use std::io::Write;

use crate::types::{Attr, Color, ColorSpec};

// =============================================================================
// Constants
// =============================================================================

/// Reset all attributes and colors.
pub const RESET: &str = "\x1b[0m";

/// Same effect as [`RESET`], but not rewritten by [`colorize`]. Used in
/// front of nested spans so they start from a clean state.
pub const HARD_RESET: &str = "\x1b[00m";

// =============================================================================
// Writers
// =============================================================================

/// Set foreground color.
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Color) -> std::io::Result<()> {
    write!(w, "\x1b[{}m", color.sgr())
}

/// Set text attributes from bitflags, as one combined sequence.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    const CODES: [(Attr, u8); 8] = [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
        (Attr::BLINK, 5),
        (Attr::INVERSE, 7),
        (Attr::HIDDEN, 8),
        (Attr::STRIKETHROUGH, 9),
    ];

    write!(w, "\x1b[")?;
    let mut first = true;
    for (flag, code) in CODES {
        if attr.contains(flag) {
            if !first {
                write!(w, ";")?;
            }
            write!(w, "{}", code)?;
            first = false;
        }
    }
    write!(w, "m")
}

/// Write the prefix selecting `spec`: attributes first, then the color.
pub fn style<W: Write>(w: &mut W, spec: ColorSpec) -> std::io::Result<()> {
    let Some(color) = spec.color else {
        return Ok(());
    };
    attrs(w, spec.attrs)?;
    fg(w, color)
}

// =============================================================================
// Colorization
// =============================================================================

/// The escape prefix for `spec`; empty for [`ColorSpec::NONE`].
pub fn color_prefix(spec: ColorSpec) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = style(&mut buf, spec);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Apply `spec` to `text`.
///
/// Returns `text` untouched for [`ColorSpec::NONE`]. Otherwise the result
/// is `prefix + text + RESET`, where every `RESET` already inside `text`
/// is followed by `prefix` again.
pub fn colorize(text: &str, spec: ColorSpec) -> String {
    if spec.is_none() {
        return text.to_string();
    }

    let prefix = color_prefix(spec);
    let resumed = format!("{RESET}{prefix}");
    format!("{prefix}{}{RESET}", text.replace(RESET, &resumed))
}
