//! Text measurement for fixed-width blocks.
//!
//! - **Width**: terminal cell width of text, ignoring ANSI escapes
//! - **ANSI stripping**: CSI and two-byte escapes are dropped before counting
//! - **Wrapping**: greedy word wrap with indents, measured in cells
//!
//! Built on `unicode-width` for East Asian Width tables and
//! `unicode-segmentation` for grapheme cluster boundaries.

mod ansi;
mod width;
mod wrap;

pub use ansi::strip_ansi;
pub use width::{char_width, display_width, grapheme_width};
pub use wrap::TextWrapper;
