//! Word wrapping for block content.
//!
//! A paragraph (text without newlines) is cut into chunks, each either a
//! run of whitespace or a word, and chunks are packed greedily into lines:
//!
//! - tabs expand to the next multiple of 8 columns first
//! - words may also break after an inner hyphen between letters
//!   (`well-known`) and around dash runs between words (`wait--what`)
//! - whitespace at the start of a continuation line is dropped, trailing
//!   whitespace on every line is dropped
//! - a word wider than the line is broken to fill the line it starts on
//! - a paragraph that is empty or only whitespace yields no lines
//!
//! Widths are display widths, so escape sequences and wide characters are
//! measured the way the terminal will show them.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{display_width, grapheme_width};

const TAB_STOP: usize = 8;

/// Greedy wrapper for a single paragraph.
///
/// Indents are counted in spaces and take part in the line width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWrapper {
    pub width: usize,
    pub initial_indent: usize,
    pub subsequent_indent: usize,
}

impl TextWrapper {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            initial_indent: 0,
            subsequent_indent: 0,
        }
    }

    pub fn initial_indent(mut self, indent: usize) -> Self {
        self.initial_indent = indent;
        self
    }

    pub fn subsequent_indent(mut self, indent: usize) -> Self {
        self.subsequent_indent = indent;
        self
    }

    /// Wrap one paragraph. Newlines are not treated specially; callers
    /// split on them first.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        // Reversed so the next chunk is always at the end.
        let mut chunks = split_chunks(&expand_tabs(text));
        chunks.reverse();

        let mut lines: Vec<String> = Vec::new();

        while !chunks.is_empty() {
            let indent = if lines.is_empty() {
                self.initial_indent
            } else {
                self.subsequent_indent
            };
            let width = self.width.saturating_sub(indent);

            if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
                chunks.pop();
            }

            let mut line: Vec<String> = Vec::new();
            let mut line_width = 0;

            while let Some(chunk) = chunks.last() {
                let w = display_width(chunk);
                if line_width + w > width {
                    break;
                }
                line_width += w;
                line.extend(chunks.pop());
            }

            if chunks.last().is_some_and(|c| display_width(c) > width) {
                break_long_chunk(&mut chunks, &mut line, line_width, width);
            }

            if line.last().is_some_and(|c| is_blank(c)) {
                line.pop();
            }

            if !line.is_empty() {
                let mut out = " ".repeat(indent);
                out.extend(line);
                lines.push(out);
            }
        }

        lines
    }
}

/// Move as much of the oversized last chunk onto `line` as fits.
fn break_long_chunk(
    chunks: &mut Vec<String>,
    line: &mut Vec<String>,
    line_width: usize,
    width: usize,
) {
    let Some(chunk) = chunks.pop() else {
        return;
    };
    let space_left = if width < 1 { 1 } else { width - line_width };

    let mut head_len = 0;
    let mut head_width = 0;
    let mut hyphen_end = None;
    for (idx, grapheme) in chunk.grapheme_indices(true) {
        let gw = grapheme_width(grapheme);
        if head_width + gw > space_left {
            break;
        }
        head_width += gw;
        head_len = idx + grapheme.len();
        if grapheme == "-" && chunk[..idx].chars().any(|c| c != '-') {
            hyphen_end = Some(head_len);
        }
    }

    if head_len < chunk.len() {
        if let Some(end) = hyphen_end {
            head_len = end;
        }
    }
    // A lone grapheme wider than the whole line still has to go somewhere.
    if head_len == 0 && line.is_empty() {
        head_len = chunk.graphemes(true).next().map_or(chunk.len(), str::len);
    }

    let (head, tail) = chunk.split_at(head_len);
    if !head.is_empty() {
        line.push(head.to_string());
    }
    if !tail.is_empty() {
        chunks.push(tail.to_string());
    }
}

/// Replace tabs by spaces up to the next tab stop.
fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for grapheme in text.graphemes(true) {
        if grapheme == "\t" {
            let fill = TAB_STOP - column % TAB_STOP;
            out.extend(std::iter::repeat_n(' ', fill));
            column += fill;
        } else {
            out.push_str(grapheme);
            column += grapheme_width(grapheme);
        }
    }
    out
}

/// Split a paragraph into chunks: whitespace runs, words, and dash runs
/// (`--`) standing between words. A word is also split after a hyphen
/// when two letters precede it and two letters follow it (`well-known`),
/// but not in `x-y` or `e-mail`.
fn split_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = chunk_end(&chars, start);
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }
    chunks
}

/// End (exclusive) of the chunk starting at `start`.
fn chunk_end(chars: &[char], start: usize) -> usize {
    if chars[start].is_whitespace() {
        return chars[start..]
            .iter()
            .position(|c| !c.is_whitespace())
            .map_or(chars.len(), |n| start + n);
    }

    if start > 0 && is_word_punct(chars[start - 1]) {
        if let Some(end) = dash_run_end(chars, start) {
            return end;
        }
    }

    // Every word chunk holds at least one character before its break.
    let mut end = start + 1;
    loop {
        let Some(&c) = chars.get(end) else {
            return end;
        };
        if c.is_whitespace() {
            return end;
        }
        if c == '-' && splits_after_hyphen(chars, end) {
            return end + 1;
        }
        if is_word_punct(chars[end - 1]) && dash_run_end(chars, end).is_some() {
            return end;
        }
        end += 1;
    }
}

/// End of a run of two or more dashes at `start` that is followed by a
/// word character.
fn dash_run_end(chars: &[char], start: usize) -> Option<usize> {
    let dashes = chars[start..].iter().take_while(|&&c| c == '-').count();
    let end = start + dashes;
    (dashes >= 2 && chars.get(end).is_some_and(|&c| is_word(c))).then_some(end)
}

/// Whether the hyphen at `pos` ends a word chunk.
fn splits_after_hyphen(chars: &[char], pos: usize) -> bool {
    let letter = |i: Option<usize>| i.and_then(|i| chars.get(i)).is_some_and(|&c| is_letter(c));
    let dash = |i: Option<usize>| i.and_then(|i| chars.get(i)) == Some(&'-');
    let back = |n: usize| pos.checked_sub(n);
    let ahead = |n: usize| Some(pos + n);

    let before = (letter(back(2)) && letter(back(1)))
        || (letter(back(3)) && dash(back(2)) && letter(back(1)));
    let after = letter(ahead(1)) && (letter(ahead(2)) || (dash(ahead(2)) && letter(ahead(3))));
    before && after
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word characters other than digits.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Characters after which a dash run starts a new chunk.
fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str, width: usize) -> Vec<String> {
        TextWrapper::new(width).wrap(text)
    }

    #[test]
    fn empty_and_blank_paragraphs() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("    ", 10).is_empty());
    }

    #[test]
    fn fits_on_one_line() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn breaks_between_words() {
        assert_eq!(wrap("hello world", 8), vec!["hello", "world"]);
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
    }

    #[test]
    fn keeps_leading_whitespace_of_first_line_only() {
        assert_eq!(wrap("  ab cd", 5), vec!["  ab", "cd"]);
    }

    #[test]
    fn long_word_fills_current_line() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ab cdefghij", 5), vec!["ab cd", "efghi", "j"]);
    }

    #[test]
    fn hyphenated_words_break_after_hyphen() {
        assert_eq!(wrap("a well-known fact", 8), vec!["a well-", "known", "fact"]);
    }

    #[test]
    fn short_hyphenated_words_stay_whole() {
        assert_eq!(wrap("ab x-y", 5), vec!["ab", "x-y"]);
        assert_eq!(wrap("ab e-mail", 6), vec!["ab", "e-mail"]);
        assert_eq!(wrap("ab-cd-ef", 4), vec!["ab-", "cd-", "ef"]);
    }

    #[test]
    fn dash_runs_between_words_are_chunks() {
        assert_eq!(wrap("a--b", 3), vec!["a--", "b"]);
        assert_eq!(wrap("wait--what", 6), vec!["wait--", "what"]);
        assert_eq!(split_chunks("a--b"), vec!["a", "--", "b"]);
        assert_eq!(split_chunks("x-y 12-34"), vec!["x-y", " ", "12-34"]);
    }

    #[test]
    fn indents_take_part_in_width() {
        let wrapper = TextWrapper::new(8).initial_indent(2).subsequent_indent(3);
        assert_eq!(wrapper.wrap("aaa bbb ccc"), vec!["  aaa", "   bbb", "   ccc"]);
    }

    #[test]
    fn tabs_expand() {
        assert_eq!(wrap("a\tb", 20), vec!["a       b"]);
    }

    #[test]
    fn wide_characters_measured_in_cells() {
        assert_eq!(wrap("你好世界", 5), vec!["你好", "世界"]);
    }

    #[test]
    fn oversized_grapheme_still_progresses() {
        assert_eq!(wrap("你", 1), vec!["你"]);
    }
}
