//! Chain builder: builds content for every block reachable from a root.

use std::rc::Rc;

use super::block::{BlockId, LineCursor};
use super::graph::BlockGraph;
use crate::error::Result;

impl BlockGraph {
    /// Build the lines of `root` and of every block reachable through
    /// `right` and `bottom` links, depth-first, right before bottom.
    ///
    /// Each block is built once even if several links lead to it. Building
    /// resets the block's cursor to its first line.
    pub fn build_chain(&mut self, root: BlockId) -> Result<()> {
        let mut visited = vec![false; self.blocks.len()];
        let mut pending = vec![root];

        while let Some(id) = pending.pop() {
            if std::mem::replace(&mut visited[id.0], true) {
                continue;
            }
            self.build_block(id)?;

            let node = &self.blocks[id.0];
            pending.extend(node.bottom);
            pending.extend(node.right);
        }

        Ok(())
    }

    /// Build the lines of a single block.
    pub fn build_block(&mut self, id: BlockId) -> Result<()> {
        let node = &mut self.blocks[id.0];
        let lines: Rc<[String]> = node.content().build()?.into();
        tracing::debug!(block = id.0, lines = lines.len(), width = node.width, "built block");

        node.cursor = LineCursor::over(Rc::clone(&lines));
        node.lines = Some(lines);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::layout::display_width;
    use crate::types::{BlockSpec, Body, ColorSpec, Indent, Padding};

    fn block(graph: &mut BlockGraph, width: usize, text: &str) -> BlockId {
        graph.add_block(
            BlockSpec::new(width).body(Body::new(text, ColorSpec::NONE, Indent::Fixed(0))),
        )
    }

    #[test]
    fn builds_every_reachable_block() {
        let mut graph = BlockGraph::new();
        let root = block(&mut graph, 6, "root");
        let right = block(&mut graph, 6, "right");
        let below = block(&mut graph, 6, "below");
        let far = block(&mut graph, 6, "far");
        let unreachable = block(&mut graph, 6, "alone");
        graph.set_right(root, Some(right));
        graph.set_bottom(root, Some(below));
        graph.set_bottom(right, Some(far));

        graph.build_chain(root).unwrap();

        for id in [root, right, below, far] {
            assert!(graph.is_built(id));
        }
        assert!(!graph.is_built(unreachable));
        assert_eq!(graph.lines(right).unwrap(), &["right "]);
    }

    #[test]
    fn shared_blocks_are_built_once() {
        let mut graph = BlockGraph::new();
        let root = block(&mut graph, 4, "a");
        let right = block(&mut graph, 4, "b");
        let shared = block(&mut graph, 4, "c");
        graph.set_right(root, Some(right));
        graph.set_bottom(root, Some(shared));
        graph.set_bottom(right, Some(shared));

        graph.build_chain(root).unwrap();
        assert_eq!(graph.lines(shared).unwrap(), &["c   "]);
    }

    #[test]
    fn every_line_has_block_width() {
        let mut graph = BlockGraph::new();
        let root = graph.add_block(
            BlockSpec::new(20)
                .padding(Padding::new(1, 2, 1, 3))
                .body(Body::new(
                    "a longer body text that wraps a few times",
                    "green".parse().unwrap(),
                    Indent::Fixed(2),
                )),
        );
        let right = block(&mut graph, 7, "x\n\ny z");
        graph.set_right(root, Some(right));

        graph.build_chain(root).unwrap();
        for id in [root, right] {
            for line in graph.lines(id).unwrap() {
                assert_eq!(display_width(line), graph.width(id));
            }
        }
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let mut graph = BlockGraph::new();
        let root = block(&mut graph, 8, "some words to wrap");
        graph.build_chain(root).unwrap();
        let first = graph.block_text(root);
        graph.build_chain(root).unwrap();
        assert_eq!(graph.block_text(root), first);
    }

    #[test]
    fn configuration_errors_surface() {
        let mut graph = BlockGraph::new();
        let root = block(&mut graph, 4, "ok");
        let bad = graph.add_block(BlockSpec::new(2).padding(Padding::new(0, 1, 0, 1)));
        graph.set_bottom(root, Some(bad));

        assert!(matches!(graph.build_chain(root), Err(Error::WrapWidth { width: 2, .. })));
    }
}
