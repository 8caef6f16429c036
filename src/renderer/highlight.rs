//! Regex keyword highlighting inside block bodies.

use regex::{Captures, Regex};

use super::ansi::{HARD_RESET, colorize};
use crate::types::ColorSpec;

/// A compiled keyword pattern and the color its matches get.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pattern: Regex,
    color: ColorSpec,
}

impl KeywordRule {
    /// Compile `pattern`. Returns `None` for a pattern that is not a
    /// valid regular expression.
    pub fn new(pattern: &str, color: ColorSpec) -> Option<Self> {
        match Regex::new(&format!("({pattern})")) {
            Ok(pattern) => Some(Self { pattern, color }),
            Err(err) => {
                tracing::debug!(pattern, %err, "dropping keyword rule");
                None
            }
        }
    }

    pub fn color(&self) -> ColorSpec {
        self.color
    }

    /// Source of the pattern as given to [`KeywordRule::new`].
    pub fn pattern(&self) -> &str {
        let src = self.pattern.as_str();
        &src[1..src.len() - 1]
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                format!("{HARD_RESET}{}", colorize(&caps[1], self.color))
            })
            .into_owned()
    }
}

/// Apply every rule in order. Later rules see the output of earlier ones.
pub fn highlight(text: &str, rules: &[KeywordRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text_measure::display_width;
    use crate::types::Color;

    #[test]
    fn invalid_pattern_is_dropped() {
        assert!(KeywordRule::new("(unclosed", Color::Red.into()).is_none());
    }

    #[test]
    fn pattern_source_round_trips() {
        let rule = KeywordRule::new(r"\d+", Color::Red.into()).unwrap();
        assert_eq!(rule.pattern(), r"\d+");
    }

    #[test]
    fn matches_are_colorized() {
        let rules = vec![KeywordRule::new("err[a-z]*", Color::Red.into()).unwrap()];
        let out = highlight("an error here", &rules);
        assert_eq!(out, "an \x1b[00m\x1b[31merror\x1b[0m here");
        assert_eq!(display_width(&out), "an error here".len());
    }

    #[test]
    fn no_rules_no_change() {
        assert_eq!(highlight("text", &[]), "text");
    }

    #[test]
    fn uncolored_rule_still_resets() {
        let rules = vec![KeywordRule::new("x", ColorSpec::NONE).unwrap()];
        assert_eq!(highlight("axb", &rules), "a\x1b[00mxb");
    }
}
