//! Content builder: turns one block's heading and body into the padded,
//! colorized lines the print engine walks through.
//!
//! # Steps
//!
//! 1. Resolve the body indent (`Auto` = heading length modulo block width)
//! 2. Split heading and body on line breaks, wrap every paragraph on its own
//! 3. Colorize heading lines
//! 4. Unless the heading breaks, continue the last heading line with the
//!    start of the first body paragraph
//! 5. Wrap the rest of the body with the indent, highlight keywords, colorize
//! 6. Substitute a single empty line for empty content
//! 7. Pad: blank lines above and below, spaces on the left, fill on the right
//!
//! Every returned line has a display width of exactly `width`.

use std::collections::VecDeque;

use super::text_measure::{TextWrapper, display_width};
use crate::error::{Error, Result};
use crate::renderer::{KeywordRule, colorize, highlight};
use crate::types::{Body, Heading, Indent, Padding};

/// Borrowed view of everything that determines a block's lines.
#[derive(Debug, Clone, Copy)]
pub struct ContentBuilder<'a> {
    pub width: usize,
    pub padding: Padding,
    pub heading: &'a Heading,
    pub body: &'a Body,
    pub keywords: &'a [KeywordRule],
}

impl ContentBuilder<'_> {
    /// Build the block's lines. Pure: the same configuration always yields
    /// the same lines.
    pub fn build(&self) -> Result<Vec<String>> {
        let wrap_width = self.wrap_width()?;
        let indent = self.indent();

        let heading_wrapper = TextWrapper::new(wrap_width).subsequent_indent(indent);
        let mut lines = Vec::new();
        for paragraph in split_paragraphs(&self.heading.text) {
            let wrapped = heading_wrapper.wrap(paragraph);
            if wrapped.len() > 1 {
                check_indent(indent, wrap_width)?;
            }
            lines.extend(wrapped.iter().map(|line| colorize(line, self.heading.color)));
        }

        let mut paragraphs: VecDeque<String> = split_paragraphs(&self.body.text)
            .into_iter()
            .map(str::to_string)
            .collect();
        if !self.heading.break_after && !paragraphs.is_empty() {
            self.continue_heading(&mut lines, &mut paragraphs, indent, wrap_width);
        }

        let body_wrapper = TextWrapper::new(wrap_width)
            .initial_indent(indent)
            .subsequent_indent(indent);
        let body: Vec<String> = paragraphs
            .iter()
            .flat_map(|paragraph| body_wrapper.wrap(paragraph))
            .collect();
        if !body.is_empty() {
            check_indent(indent, wrap_width)?;
        }
        lines.extend(body.iter().map(|line| self.style_body(line)));

        // The print engine needs at least one line per block.
        if lines.is_empty() {
            lines.push(String::new());
        }

        Ok(self.apply_padding(lines))
    }

    /// Horizontal room for text inside the padding.
    pub fn wrap_width(&self) -> Result<usize> {
        match self.width.checked_sub(self.padding.horizontal()) {
            Some(w) if w > 0 => Ok(w),
            _ => Err(Error::WrapWidth {
                width: self.width,
                left: self.padding.left,
                right: self.padding.right,
            }),
        }
    }

    /// Resolved body indent. `Auto` counts the raw heading characters,
    /// line breaks and tabs included.
    pub fn indent(&self) -> usize {
        match self.body.indent {
            Indent::Fixed(n) => n,
            Indent::Auto if self.width == 0 => 0,
            Indent::Auto => self.heading.text.chars().count() % self.width,
        }
    }

    /// Move the start of the first body paragraph onto the last heading line.
    fn continue_heading(
        &self,
        lines: &mut Vec<String>,
        paragraphs: &mut VecDeque<String>,
        indent: usize,
        wrap_width: usize,
    ) {
        match lines.last_mut() {
            Some(last) => {
                let used = display_width(last);
                let target = indent.min(wrap_width);
                if target > used {
                    last.push_str(&" ".repeat(target - used));
                }
            }
            None => lines.push(" ".repeat(indent.min(wrap_width))),
        }
        let Some(last) = lines.last_mut() else {
            return;
        };

        let budget = wrap_width.saturating_sub(display_width(last));
        if budget == 0 {
            tracing::debug!(wrap_width, "heading fills the line, body starts below it");
            return;
        }

        let mut fragments = TextWrapper::new(budget).wrap(&paragraphs[0]).into_iter();
        match fragments.next() {
            Some(first) => {
                last.push_str(&self.style_body(&first));
                let rest: Vec<String> = fragments.collect();
                if rest.is_empty() {
                    paragraphs.pop_front();
                } else {
                    paragraphs[0] = rest.join(" ");
                }
            }
            // Blank paragraph: would not produce a body line anyway.
            None => {
                paragraphs.pop_front();
            }
        }
    }

    fn style_body(&self, line: &str) -> String {
        colorize(&highlight(line, self.keywords), self.body.color)
    }

    fn apply_padding(&self, lines: Vec<String>) -> Vec<String> {
        let Padding {
            top, bottom, left, ..
        } = self.padding;

        std::iter::repeat_n(String::new(), top)
            .chain(lines)
            .chain(std::iter::repeat_n(String::new(), bottom))
            .map(|line| {
                let mut padded = " ".repeat(left);
                padded.push_str(&line);
                let fill = self.width.saturating_sub(display_width(&padded));
                padded.push_str(&" ".repeat(fill));
                padded
            })
            .collect()
    }
}

/// Wrapped lines start at the indent, so it has to leave room for text.
fn check_indent(indent: usize, wrap_width: usize) -> Result<()> {
    if indent < wrap_width {
        Ok(())
    } else {
        Err(Error::IndentTooWide { indent, wrap_width })
    }
}

/// Split text into paragraphs at every line boundary: `\n`, `\r\n`, a lone
/// `\r`, and the other Unicode line separators. A trailing break does not
/// start an empty paragraph.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(pos) = rest.find(is_line_break) else {
            paragraphs.push(rest);
            break;
        };
        paragraphs.push(&rest[..pos]);
        let tail = &rest[pos..];
        let len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[len..];
    }
    paragraphs
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
