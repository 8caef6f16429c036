//! Block nodes and their line cursors.

use std::rc::Rc;

use super::lock::LockId;
use crate::layout::ContentBuilder;
use crate::renderer::KeywordRule;
use crate::types::{Body, Heading, Padding};

/// Handle of a block inside a [`BlockGraph`](super::BlockGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One rectangular panel plus its links.
///
/// `width`, `padding`, `bottom`, `print_lock`, `lines` and `cursor` are
/// replaced wholesale when the block takes over its bottom neighbor's
/// identity during printing; heading, body and keywords are only read when
/// content is built.
#[derive(Debug, Clone)]
pub(crate) struct BlockNode {
    pub heading: Heading,
    pub body: Body,
    pub keywords: Vec<KeywordRule>,
    pub width: usize,
    pub padding: Padding,
    pub right: Option<BlockId>,
    pub bottom: Option<BlockId>,
    pub print_lock: LockId,
    pub vanish_lock: Option<LockId>,
    pub lines: Option<Rc<[String]>>,
    pub cursor: LineCursor,
}

impl BlockNode {
    pub fn content(&self) -> ContentBuilder<'_> {
        ContentBuilder {
            width: self.width,
            padding: self.padding,
            heading: &self.heading,
            body: &self.body,
            keywords: &self.keywords,
        }
    }
}

/// Resettable walk over a block's lines.
///
/// Every pull yields the line and whether it is the last one. After the
/// last line the cursor is spent until the engine installs a new one.
#[derive(Debug, Clone, Default)]
pub(crate) enum LineCursor {
    /// Content not built yet.
    #[default]
    Unbuilt,
    Lines { lines: Rc<[String]>, next: usize },
    /// A single blank row, used while a column waits or after it is done.
    Filler { width: usize, spent: bool },
}

impl LineCursor {
    pub fn over(lines: Rc<[String]>) -> Self {
        Self::Lines { lines, next: 0 }
    }

    pub fn filler(width: usize) -> Self {
        Self::Filler {
            width,
            spent: false,
        }
    }

    /// Next line and its last-line flag, or `None` once spent.
    pub fn next_line(&mut self) -> Option<(String, bool)> {
        match self {
            Self::Unbuilt => None,
            Self::Lines { lines, next } => {
                let line = lines.get(*next)?.clone();
                *next += 1;
                Some((line, *next == lines.len()))
            }
            Self::Filler { width, spent } => {
                if *spent {
                    return None;
                }
                *spent = true;
                Some((" ".repeat(*width), true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_marks_only_the_last_line() {
        let lines: Rc<[String]> = vec!["a".to_string(), "b".to_string(), "c".to_string()].into();
        let mut cursor = LineCursor::over(lines);
        assert_eq!(cursor.next_line(), Some(("a".to_string(), false)));
        assert_eq!(cursor.next_line(), Some(("b".to_string(), false)));
        assert_eq!(cursor.next_line(), Some(("c".to_string(), true)));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn single_line_is_last() {
        let mut cursor = LineCursor::over(vec![String::new()].into());
        assert_eq!(cursor.next_line(), Some((String::new(), true)));
    }

    #[test]
    fn filler_yields_one_blank_row() {
        let mut cursor = LineCursor::filler(3);
        assert_eq!(cursor.next_line(), Some(("   ".to_string(), true)));
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn unbuilt_cursor_is_empty() {
        assert_eq!(LineCursor::default().next_line(), None);
    }
}
