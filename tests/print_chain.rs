//! Row-by-row behavior of the print engine on small graphs.

use blockterm::{BlockGraph, BlockId, BlockSpec, Body, ColorSpec, Error, Heading, Indent, Padding};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn block(graph: &mut BlockGraph, width: usize, text: &str) -> BlockId {
    graph.add_block(BlockSpec::new(width).body(Body::new(text, ColorSpec::NONE, Indent::Fixed(0))))
}

fn rows(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn heading_and_body_share_the_first_row() {
    init_tracing();
    let mut graph = BlockGraph::new();
    let root = graph.add_block(
        BlockSpec::new(10)
            .heading(Heading::new("Hi", ColorSpec::NONE, false))
            .body(Body::new("hello world", ColorSpec::NONE, Indent::Fixed(0))),
    );

    let text = graph.render_chain_to_string(root).unwrap();
    assert_eq!(rows(&text), vec!["Hihello   ", "world     "]);
}

#[test]
fn shared_master_holds_bottom_blocks_until_both_columns_finish() {
    init_tracing();
    let mut graph = BlockGraph::new();
    let master = graph.add_lock(true);

    let tall = block(&mut graph, 4, "a1 a2 a3");
    let short = block(&mut graph, 4, "b1");
    let below_tall = graph.add_block(
        BlockSpec::new(4)
            .body(Body::new("c1", ColorSpec::NONE, Indent::Fixed(0)))
            .print_master(master),
    );
    let below_short = graph.add_block(
        BlockSpec::new(4)
            .body(Body::new("d1", ColorSpec::NONE, Indent::Fixed(0)))
            .print_master(master),
    );
    graph.set_right(tall, Some(short));
    graph.set_bottom(tall, Some(below_tall));
    graph.set_bottom(short, Some(below_short));

    let text = graph.render_chain_to_string(tall).unwrap();
    assert_eq!(
        rows(&text),
        vec!["a1  b1  ", "a2      ", "a3      ", "c1  d1  "]
    );
    assert!(graph.locks().is_open(master));
}

#[test]
fn without_a_master_the_short_column_moves_on() {
    let mut graph = BlockGraph::new();
    let tall = block(&mut graph, 4, "a1 a2 a3");
    let short = block(&mut graph, 4, "b1");
    let below_tall = block(&mut graph, 4, "c1");
    let below_short = block(&mut graph, 4, "d1");
    graph.set_right(tall, Some(short));
    graph.set_bottom(tall, Some(below_tall));
    graph.set_bottom(short, Some(below_short));

    let text = graph.render_chain_to_string(tall).unwrap();
    assert_eq!(
        rows(&text),
        vec!["a1  b1  ", "a2  d1  ", "a3      ", "c1      "]
    );
}

#[test]
fn block_vanishes_after_its_last_line() {
    init_tracing();
    let mut graph = BlockGraph::new();
    let master = graph.add_lock(true);
    let left = block(&mut graph, 4, "l1 l2 l3");
    let vanishing = graph.add_block(
        BlockSpec::new(4)
            .body(Body::new("v1", ColorSpec::NONE, Indent::Fixed(0)))
            .vanish_master(master),
    );
    let right = block(&mut graph, 4, "r1 r2 r3");
    graph.set_right(left, Some(vanishing));
    graph.set_right(vanishing, Some(right));

    let text = graph.render_chain_to_string(left).unwrap();
    assert_eq!(rows(&text), vec!["l1  v1  r1  ", "l2  r2  ", "l3  r3  "]);
    assert_eq!(graph.right(left), Some(right));
}

#[test]
fn open_vanish_lock_hides_the_block_entirely() {
    let mut graph = BlockGraph::new();
    let master = graph.add_lock(true);
    let left = block(&mut graph, 4, "l1");
    let hidden = graph.add_block(
        BlockSpec::new(4)
            .body(Body::new("xx", ColorSpec::NONE, Indent::Fixed(0)))
            .vanish_master(master),
    );
    let right = block(&mut graph, 4, "r1");
    graph.set_right(left, Some(hidden));
    graph.set_right(hidden, Some(right));

    if let Some(lock) = graph.vanish_lock(hidden) {
        graph.locks_mut().open(lock);
    }

    let text = graph.render_chain_to_string(left).unwrap();
    assert_eq!(text, "l1  r1  \n");
    assert!(!text.contains("xx"));
}

#[test]
fn run_of_vanished_blocks_is_skipped_in_one_row() {
    let mut graph = BlockGraph::new();
    let master = graph.add_lock(true);
    let left = block(&mut graph, 3, "l");
    let first = graph.add_block(BlockSpec::new(3).vanish_master(master));
    let second = graph.add_block(BlockSpec::new(3).vanish_master(master));
    let right = block(&mut graph, 3, "r");
    graph.set_right(left, Some(first));
    graph.set_right(first, Some(second));
    graph.set_right(second, Some(right));

    for id in [first, second] {
        if let Some(lock) = graph.vanish_lock(id) {
            graph.locks_mut().open(lock);
        }
    }

    assert_eq!(graph.render_chain_to_string(left).unwrap(), "l  r  \n");
}

#[test]
fn bottom_block_continues_directly_below() {
    init_tracing();
    let mut graph = BlockGraph::new();
    let top = block(&mut graph, 4, "a1 a2");
    let bottom = block(&mut graph, 4, "b1 b2");
    let side = block(&mut graph, 4, "r1 r2 r3 r4 r5");
    graph.set_bottom(top, Some(bottom));
    graph.set_right(top, Some(side));

    let text = graph.render_chain_to_string(top).unwrap();
    assert_eq!(
        rows(&text),
        vec!["a1  r1  ", "a2  r2  ", "b1  r3  ", "b2  r4  ", "    r5  "]
    );
}

#[test]
fn appended_blocks_print_like_linked_ones() {
    let mut graph = BlockGraph::new();
    let first = block(&mut graph, 3, "a");
    let second = block(&mut graph, 3, "b");
    let third = block(&mut graph, 3, "c");
    let below = block(&mut graph, 9, "d");
    graph.append_rightmost(first, second);
    graph.append_rightmost(first, third);
    graph.append_bottommost(first, below);

    // The row that reached its end stays to the right of the new block as
    // blank fillers.
    let text = graph.render_chain_to_string(first).unwrap();
    assert_eq!(rows(&text), vec!["a  b  c  ".to_string(), format!("d{}", " ".repeat(14))]);
}

#[test]
fn padding_frames_the_text() {
    let mut graph = BlockGraph::new();
    let root = graph.add_block(
        BlockSpec::new(6)
            .padding(Padding::new(1, 1, 1, 2))
            .body(Body::new("ab", ColorSpec::NONE, Indent::Fixed(0))),
    );

    let text = graph.render_chain_to_string(root).unwrap();
    assert_eq!(rows(&text), vec!["      ", "  ab  ", "      "]);
}

#[test]
fn bad_padding_is_reported_before_printing() {
    let mut graph = BlockGraph::new();
    let root = graph.add_block(BlockSpec::new(4).padding(Padding::new(0, 2, 0, 2)));

    let mut buf = Vec::new();
    let err = graph.print_chain_to(root, &mut buf).unwrap_err();
    assert!(matches!(err, Error::WrapWidth { width: 4, left: 2, right: 2 }));
    assert!(buf.is_empty());
}
