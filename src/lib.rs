//! # blockterm
//!
//! Block-grid text rendering for the terminal.
//!
//! Text is laid out in fixed-width rectangular blocks. Blocks are linked to
//! the block printed to their right and the block that follows them in the
//! same column, and the whole graph is printed row by row as side-by-side
//! columns of wrapped, padded, optionally colored text.
//!
//! ## Architecture
//!
//! Blocks and locks live in arenas inside a [`BlockGraph`] and are addressed
//! by [`BlockId`] and [`LockId`]. Printing is a single synchronous pass:
//! ```text
//! BlockSpec → BlockGraph → build_chain → advance_row (per visual row) → io::Write
//! ```
//!
//! Locks keep columns aligned. A block's print lock opens when the block
//! above it finishes; when several print locks share a master, every
//! block gated by that master waits until all of them are open. A vanish
//! lock makes a block disappear from its row once it has printed.
//!
//! ## Modules
//!
//! - [`types`] - Configuration types (ColorSpec, Padding, Heading, Body, BlockSpec)
//! - [`engine`] - Block graph, locks, chain building
//! - [`layout`] - Width measurement, wrapping, per-block content
//! - [`renderer`] - ANSI colorization and keyword highlighting
//! - [`pipeline`] - Print engine and drivers
//! - [`error`] - Crate error type
//!
//! ## Example
//!
//! ```
//! use blockterm::{BlockGraph, BlockSpec, Body, ColorSpec, Heading, Indent};
//!
//! let mut graph = BlockGraph::new();
//! let root = graph.add_block(
//!     BlockSpec::new(10)
//!         .heading(Heading::new("Hi", ColorSpec::NONE, false))
//!         .body(Body::new("hello world", ColorSpec::NONE, Indent::Fixed(0))),
//! );
//! let text = graph.render_chain_to_string(root)?;
//! assert_eq!(text, "Hihello   \nworld     \n");
//! # Ok::<(), blockterm::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{BlockGraph, BlockId, LockId, LockTable};

pub use error::{Error, Result};

pub use layout::{ContentBuilder, TextWrapper, display_width, strip_ansi};

pub use renderer::{KeywordRule, colorize, highlight};
