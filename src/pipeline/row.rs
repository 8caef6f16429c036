//! One row call of the print engine.
//!
//! A row call prints the current line of a block, then recursively the
//! current line of everything to its right, then a line break. When a
//! block has just printed its last line it either takes over its bottom
//! neighbor's identity (masquerade) or, while the bottom neighbor's
//! master lock is still closed, queues one blank filler row and re-checks
//! on the next call.

use std::io::Write;

use crossterm::queue;
use crossterm::style::Print;

use crate::engine::{BlockGraph, BlockId, LineCursor};
use crate::error::{Error, Result};

impl BlockGraph {
    /// Print one visual row starting at `id` and return whether any block
    /// still reachable from it has output pending.
    pub fn advance_row<W: Write>(&mut self, id: BlockId, out: &mut W) -> Result<bool> {
        let (line, is_last) = self.blocks[id.0]
            .cursor
            .next_line()
            .ok_or(Error::CursorExhausted(id))?;
        queue!(out, Print(&line))?;
        tracing::trace!(block = id.0, is_last, "row");

        if is_last {
            self.release(id);
        }

        self.skip_vanished(id);
        let right_pending = match self.blocks[id.0].right {
            Some(right) => self.advance_row(right, out)?,
            None => {
                queue!(out, Print("\n"))?;
                false
            }
        };

        if !is_last {
            return Ok(true);
        }

        let width = self.blocks[id.0].width;
        match self.blocks[id.0].bottom {
            Some(bottom) if self.is_released(bottom) => {
                self.masquerade(id, bottom);
                Ok(true)
            }
            Some(bottom) => {
                tracing::debug!(block = id.0, bottom = bottom.0, "waiting for master lock");
                self.blocks[id.0].cursor = LineCursor::filler(width);
                Ok(true)
            }
            None => {
                self.blocks[id.0].cursor = LineCursor::filler(width);
                Ok(right_pending)
            }
        }
    }

    /// The block just printed its last line: unlock the block below and
    /// the block's own vanish lock.
    fn release(&mut self, id: BlockId) {
        let node = &self.blocks[id.0];
        if let Some(bottom) = node.bottom {
            self.locks.open(self.blocks[bottom.0].print_lock);
        }
        if let Some(vanish) = node.vanish_lock {
            self.locks.open(vanish);
        }
    }

    /// Unlink every right neighbor whose vanish lock is open, up to the
    /// first one that stays.
    fn skip_vanished(&mut self, id: BlockId) {
        for _ in 0..self.blocks.len() {
            let Some(right) = self.blocks[id.0].right else {
                return;
            };
            let neighbor = &self.blocks[right.0];
            let vanished = neighbor
                .vanish_lock
                .is_some_and(|lock| self.locks.is_open(lock));
            if !vanished {
                return;
            }

            tracing::debug!(block = id.0, vanished = right.0, "splicing out vanished block");
            let next = neighbor.right;
            self.blocks[id.0].right = next;
        }
    }

    /// Whether `bottom` may take over: its print lock has no master, or
    /// that master is open.
    fn is_released(&self, bottom: BlockId) -> bool {
        let lock = self.blocks[bottom.0].print_lock;
        self.locks
            .master(lock)
            .is_none_or(|master| self.locks.is_open(master))
    }

    /// Replace `id`'s identity with `bottom`'s. Whatever stood right of `id`
    /// moves to the end of `bottom`'s row so it keeps printing.
    fn masquerade(&mut self, id: BlockId, bottom: BlockId) {
        tracing::debug!(block = id.0, bottom = bottom.0, "masquerading as bottom neighbor");

        let below = &self.blocks[bottom.0];
        let width = below.width;
        let padding = below.padding;
        let next_bottom = below.bottom;
        let print_lock = below.print_lock;
        let lines = below.lines.clone();
        let cursor = below.cursor.clone();

        let node = &mut self.blocks[id.0];
        node.width = width;
        node.padding = padding;
        node.bottom = next_bottom;
        node.print_lock = print_lock;
        node.lines = lines;
        node.cursor = cursor;

        if let Some(right) = self.blocks[id.0].right {
            self.append_rightmost(bottom, right);
        }
        self.blocks[id.0].right = self.blocks[bottom.0].right;
    }
}
