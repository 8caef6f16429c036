//! Styling of block text: SGR colorization and keyword highlighting.
//!
//! Both are pure string transforms. Highlighting runs first so the body
//! color can resume after each highlighted match.

pub mod ansi;
mod highlight;

pub use ansi::{HARD_RESET, RESET, color_prefix, colorize};
pub use highlight::{KeywordRule, highlight};
