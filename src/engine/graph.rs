//! The block graph: an arena of blocks linked to the right and downwards,
//! plus the locks that synchronize them.
//!
//! Links are plain [`BlockId`]s, so splicing a block out of a row or
//! moving a right-hand chain under another block is an index rewrite.
//! Links are not ownership: one block may be the right or bottom
//! neighbor of several others.

use super::block::{BlockId, BlockNode, LineCursor};
use super::lock::{LockId, LockTable};
use crate::error::Result;
use crate::renderer::KeywordRule;
use crate::types::{Body, BlockSpec, ColorSpec, Heading, Padding};

#[derive(Debug, Clone, Copy)]
enum Axis {
    Right,
    Bottom,
}

impl Axis {
    fn link(self, node: &BlockNode) -> Option<BlockId> {
        match self {
            Self::Right => node.right,
            Self::Bottom => node.bottom,
        }
    }

    fn link_mut(self, node: &mut BlockNode) -> &mut Option<BlockId> {
        match self {
            Self::Right => &mut node.right,
            Self::Bottom => &mut node.bottom,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockGraph {
    pub(crate) blocks: Vec<BlockNode>,
    pub(crate) locks: LockTable,
}

impl BlockGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // =========================================================================
    // Locks
    // =========================================================================

    /// Create a free-standing lock, typically used as a shared master.
    pub fn add_lock(&mut self, open: bool) -> LockId {
        self.locks.create(open)
    }

    pub fn locks(&self) -> &LockTable {
        &self.locks
    }

    pub fn locks_mut(&mut self) -> &mut LockTable {
        &mut self.locks
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Add a block. Its print lock starts open only if `initially_open` is
    /// set; a vanish lock is only created when `vanish_master` is given,
    /// and always starts closed.
    pub fn add_block(&mut self, spec: BlockSpec) -> BlockId {
        let print_lock = match spec.print_master {
            Some(master) => self.locks.create_under(spec.initially_open, master),
            None => self.locks.create(spec.initially_open),
        };
        let vanish_lock = spec
            .vanish_master
            .map(|master| self.locks.create_under(false, master));

        let id = BlockId(self.blocks.len());
        self.blocks.push(BlockNode {
            heading: spec.heading,
            body: spec.body,
            keywords: Vec::new(),
            width: spec.width,
            padding: spec.padding,
            right: spec.right,
            bottom: spec.bottom,
            print_lock,
            vanish_lock,
            lines: None,
            cursor: LineCursor::Unbuilt,
        });
        id
    }

    /// A block without text, for spacing columns apart.
    pub fn create_empty_block(&mut self, width: usize) -> BlockId {
        self.add_block(BlockSpec {
            heading: Heading::new("", ColorSpec::NONE, false),
            body: Body::new("", ColorSpec::NONE, 0.into()),
            ..BlockSpec::new(width)
        })
    }

    pub fn set_right(&mut self, id: BlockId, right: Option<BlockId>) {
        self.blocks[id.0].right = right;
    }

    pub fn set_bottom(&mut self, id: BlockId, bottom: Option<BlockId>) {
        self.blocks[id.0].bottom = bottom;
    }

    /// Register the block's print lock under `master`.
    pub fn add_print_master(&mut self, id: BlockId, master: LockId) -> Result<()> {
        let lock = self.blocks[id.0].print_lock;
        self.locks.register_subordinate(lock, master)
    }

    /// Register the block's vanish lock under `master`, creating a closed
    /// vanish lock first if the block has none.
    pub fn add_vanish_master(&mut self, id: BlockId, master: LockId) -> Result<()> {
        match self.blocks[id.0].vanish_lock {
            Some(lock) => self.locks.register_subordinate(lock, master),
            None => {
                self.blocks[id.0].vanish_lock = Some(self.locks.create_under(false, master));
                Ok(())
            }
        }
    }

    /// Highlight matches of `pattern` in the block's body with `color`.
    /// Patterns that are not valid regular expressions are ignored.
    pub fn add_keyword_rule(&mut self, id: BlockId, pattern: &str, color: ColorSpec) {
        if let Some(rule) = KeywordRule::new(pattern, color) {
            self.blocks[id.0].keywords.push(rule);
        }
    }

    /// Copy a block's configuration into a new block.
    ///
    /// Heading, body, keyword rules, width and padding are always copied.
    /// Links are copied with `with_neighbors`; with `with_locks` the print
    /// and vanish locks are duplicated (same flag, same master), otherwise
    /// the copy gets a fresh closed print lock and no vanish lock. Content
    /// is never copied.
    pub fn clone_block(&mut self, id: BlockId, with_neighbors: bool, with_locks: bool) -> BlockId {
        let source = &self.blocks[id.0];
        let mut node = BlockNode {
            heading: source.heading.clone(),
            body: source.body.clone(),
            keywords: source.keywords.clone(),
            width: source.width,
            padding: source.padding,
            right: None,
            bottom: None,
            print_lock: source.print_lock,
            vanish_lock: None,
            lines: None,
            cursor: LineCursor::Unbuilt,
        };
        if with_neighbors {
            node.right = source.right;
            node.bottom = source.bottom;
        }

        let source_vanish = source.vanish_lock;
        if with_locks {
            node.print_lock = self.locks.duplicate(node.print_lock);
            node.vanish_lock = source_vanish.map(|lock| self.locks.duplicate(lock));
        } else {
            node.print_lock = self.locks.create(false);
        }

        let clone = BlockId(self.blocks.len());
        self.blocks.push(node);
        clone
    }

    /// Attach `block` to the right of the last block in `id`'s row.
    pub fn append_rightmost(&mut self, id: BlockId, block: BlockId) {
        self.append_to_end(Axis::Right, id, block);
    }

    /// Attach `block` below the last block in `id`'s column.
    pub fn append_bottommost(&mut self, id: BlockId, block: BlockId) {
        self.append_to_end(Axis::Bottom, id, block);
    }

    /// Link `block` after the end of `id`'s chain along `axis`, unless that
    /// would make the chain loop.
    fn append_to_end(&mut self, axis: Axis, id: BlockId, block: BlockId) {
        let (chain, terminated) = self.walk(axis, id);
        let (appended, _) = self.walk(axis, block);
        if !terminated || appended.iter().any(|b| chain.contains(b)) {
            tracing::debug!(?id, ?block, ?axis, "append would form a cycle, skipped");
            return;
        }
        if let Some(&last) = chain.last() {
            *axis.link_mut(&mut self.blocks[last.0]) = Some(block);
        }
    }

    /// Blocks reachable from `start` along `axis`, and whether the walk
    /// reached an end instead of looping.
    fn walk(&self, axis: Axis, start: BlockId) -> (Vec<BlockId>, bool) {
        let mut chain = vec![start];
        let mut current = start;
        while let Some(next) = axis.link(&self.blocks[current.0]) {
            if chain.contains(&next) {
                return (chain, false);
            }
            chain.push(next);
            current = next;
        }
        (chain, true)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn width(&self, id: BlockId) -> usize {
        self.blocks[id.0].width
    }

    pub fn padding(&self, id: BlockId) -> Padding {
        self.blocks[id.0].padding
    }

    pub fn right(&self, id: BlockId) -> Option<BlockId> {
        self.blocks[id.0].right
    }

    pub fn bottom(&self, id: BlockId) -> Option<BlockId> {
        self.blocks[id.0].bottom
    }

    pub fn print_lock(&self, id: BlockId) -> LockId {
        self.blocks[id.0].print_lock
    }

    pub fn vanish_lock(&self, id: BlockId) -> Option<LockId> {
        self.blocks[id.0].vanish_lock
    }

    pub fn keyword_rules(&self, id: BlockId) -> &[KeywordRule] {
        &self.blocks[id.0].keywords
    }

    /// Built lines of the block, if content has been built.
    pub fn lines(&self, id: BlockId) -> Option<&[String]> {
        self.blocks[id.0].lines.as_deref()
    }

    pub fn is_built(&self, id: BlockId) -> bool {
        self.blocks[id.0].lines.is_some()
    }

    /// The block's own lines joined by newlines, ignoring all neighbors.
    pub fn block_text(&self, id: BlockId) -> Option<String> {
        self.lines(id).map(|lines| lines.join("\n"))
    }
}
