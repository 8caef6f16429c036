//! Print Pipeline
//!
//! Drives the print engine over a block graph until every column has
//! printed its content.
//!
//! # Pipeline Architecture
//!
//! ```text
//! BlockSpec → BlockGraph → build_chain (lines per block) → advance_row (one visual row) → sink
//! ```
//!
//! ## Data Flow
//!
//! 1. **build_chain** - Runs the content builder over every block reachable from the root
//! 2. **advance_row** - Emits one visual row from the root, splicing and masquerading as it goes
//! 3. **sink** - Any `io::Write`: stdout for [`BlockGraph::print_chain`], a buffer for
//!    [`BlockGraph::render_chain_to_string`]
//!
//! Printing mutates the graph (splices, masquerades, opened locks). A graph is
//! printed once per build; rebuild before printing the same root again.

mod row;

use std::io::{self, Write};

use crate::engine::{BlockGraph, BlockId};
use crate::error::{Error, Result};

// =============================================================================
// Drivers
// =============================================================================

impl BlockGraph {
    /// Print the chain rooted at `root` to stdout, building content first
    /// if the root has not been built.
    pub fn print_chain(&mut self, root: BlockId) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.print_chain_to(root, &mut out)
    }

    /// Same as [`print_chain`](Self::print_chain), captured as text.
    pub fn render_chain_to_string(&mut self, root: BlockId) -> Result<String> {
        let mut buf = Vec::new();
        self.print_chain_to(root, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Print the chain rooted at `root` into `out`, one row per line.
    ///
    /// Fails with [`Error::Stalled`] when a column keeps waiting on a master
    /// lock that can never open.
    pub fn print_chain_to<W: Write>(&mut self, root: BlockId, out: &mut W) -> Result<()> {
        if !self.is_built(root) {
            self.build_chain(root)?;
        }

        let limit = self.row_limit();
        let mut rows = 0;
        loop {
            rows += 1;
            if !self.advance_row(root, out)? {
                break;
            }
            if rows >= limit {
                out.flush()?;
                return Err(Error::Stalled { rows });
            }
        }

        tracing::debug!(root = root.0, rows, "printed chain");
        out.flush()?;
        Ok(())
    }

    /// Upper bound on rows for a pass: every row either consumes a built
    /// line somewhere or is a filler row right after one.
    fn row_limit(&self) -> usize {
        let lines: usize = self
            .blocks
            .iter()
            .filter_map(|node| node.lines.as_ref())
            .map(|lines| lines.len())
            .sum();
        2 * (lines + self.blocks.len()) + 1
    }
}
