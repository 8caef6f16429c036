//! Block graph engine.
//!
//! Blocks and locks live in arenas owned by a [`BlockGraph`] and refer to
//! each other through [`BlockId`] and [`LockId`] handles:
//!
//! - [`lock`] - monotonic gates and master/subordinate barriers
//! - `block` - block nodes and their line cursors
//! - `graph` - construction and mutation API
//! - `chain` - building content for everything reachable from a root

mod block;
mod chain;
mod graph;
pub mod lock;

pub use block::BlockId;
pub(crate) use block::LineCursor;
pub use graph::BlockGraph;
pub use lock::{LockId, LockTable};
