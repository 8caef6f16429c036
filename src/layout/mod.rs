//! Layout of a single block: measuring, wrapping and padding its text
//! into a fixed-width column of lines.

mod content;
pub mod text_measure;

pub use content::ContentBuilder;
pub use text_measure::{TextWrapper, display_width, strip_ansi};
