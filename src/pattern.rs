//! Delimiter matching.
//!
//! The splitter never compiles patterns itself; it asks a
//! [`PatternMatcher`] for raw matches. [`DelimiterPattern`] is the
//! regex-backed implementation used by the string-pattern entry
//! points.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Hir, Look};

use crate::span::Span;

/// Source of delimiter matches for a line.
pub trait PatternMatcher {
    /// All non-overlapping matches in `text`, in order.
    fn find_spans(&self, text: &str) -> Vec<Span>;

    /// Whether the whole of `text` is a match.
    fn matches_whole(&self, text: &str) -> bool;
}

/// A compiled delimiter regular expression.
#[derive(Debug, Clone)]
pub struct DelimiterPattern {
    regex: Regex,
    /// Same expression anchored at both ends.
    whole: Regex,
}

static WHITESPACE: Lazy<DelimiterPattern> = Lazy::new(|| {
    DelimiterPattern::new(r"\s+").expect("whitespace delimiter pattern is valid")
});

impl DelimiterPattern {
    /// Compile `pattern` as a delimiter with default flags.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        DelimiterPatternBuilder::new(pattern).build()
    }

    /// Start configuring a delimiter pattern.
    #[must_use]
    pub fn builder(pattern: &str) -> DelimiterPatternBuilder {
        DelimiterPatternBuilder::new(pattern)
    }

    /// The shared `\s+` pattern.
    #[must_use]
    pub fn whitespace() -> &'static Self {
        &WHITESPACE
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Flags for a [`DelimiterPattern`].
///
/// Every flag applies to both the search regex and its anchored
/// companion, so a shortened escaped delimiter is re-checked against
/// the same expression it was found with.
#[derive(Debug, Clone)]
pub struct DelimiterPatternBuilder {
    pattern: String,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    size_limit: Option<usize>,
}

impl DelimiterPatternBuilder {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            size_limit: None,
        }
    }

    pub const fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.case_insensitive = yes;
        self
    }

    pub const fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.multi_line = yes;
        self
    }

    pub const fn dot_matches_new_line(&mut self, yes: bool) -> &mut Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub const fn ignore_whitespace(&mut self, yes: bool) -> &mut Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Compiled size limit in bytes for each of the two regexes.
    pub const fn size_limit(&mut self, bytes: usize) -> &mut Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Compile the pattern.
    ///
    /// The anchored companion is built from the parsed expression, not
    /// by pasting text around the pattern, so inline flags and `(?x)`
    /// comments keep their meaning.
    pub fn build(&self) -> Result<DelimiterPattern, regex::Error> {
        let mut builder = RegexBuilder::new(&self.pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace);
        if let Some(bytes) = self.size_limit {
            builder.size_limit(bytes);
        }
        let regex = builder.build()?;

        let hir = ParserBuilder::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()
            .parse(&self.pattern)
            .map_err(|e| regex::Error::Syntax(e.to_string()))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);

        // flags are already resolved in the printed expression
        let mut builder = RegexBuilder::new(&anchored.to_string());
        if let Some(bytes) = self.size_limit {
            builder.size_limit(bytes);
        }
        let whole = builder.build()?;

        Ok(DelimiterPattern { regex, whole })
    }
}

impl PatternMatcher for DelimiterPattern {
    fn find_spans(&self, text: &str) -> Vec<Span> {
        self.regex
            .find_iter(text)
            .map(|m| Span::new(m.start(), m.end()))
            .collect()
    }

    fn matches_whole(&self, text: &str) -> bool {
        self.whole.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_matches_in_order() {
        let pattern = DelimiterPattern::new(":+").expect("valid pattern");
        assert_eq!(
            pattern.find_spans("a::b:c"),
            vec![Span::new(1, 3), Span::new(4, 5)]
        );
    }

    #[test]
    fn whole_match_is_anchored() {
        let pattern = DelimiterPattern::new(":").expect("valid pattern");
        assert!(pattern.matches_whole(":"));
        assert!(!pattern.matches_whole("::"));
        assert!(!pattern.matches_whole("a:"));
    }

    #[test]
    fn whole_match_respects_alternation() {
        let pattern = DelimiterPattern::new("x|xy").expect("valid pattern");
        assert!(pattern.matches_whole("xy"));
    }

    #[test]
    fn whitespace_default() {
        let pattern = DelimiterPattern::whitespace();
        assert_eq!(pattern.as_str(), r"\s+");
        assert_eq!(pattern.find_spans("a \t b"), vec![Span::new(1, 4)]);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(DelimiterPattern::new("(").is_err());
    }

    #[test]
    fn verbose_pattern_with_comment() {
        let pattern = DelimiterPattern::new("(?x) : # colon").expect("valid pattern");
        assert_eq!(pattern.find_spans("a:b"), vec![Span::new(1, 2)]);
        assert!(pattern.matches_whole(":"));
        assert!(!pattern.matches_whole(": "));
    }

    #[test]
    fn builder_ignore_whitespace_with_comment() {
        let pattern = DelimiterPattern::builder(": # colon")
            .ignore_whitespace(true)
            .build()
            .expect("valid pattern");
        assert!(pattern.matches_whole(":"));
    }

    #[test]
    fn case_insensitive_applies_to_whole_match() {
        let pattern = DelimiterPattern::builder("a+")
            .case_insensitive(true)
            .build()
            .expect("valid pattern");
        assert_eq!(pattern.find_spans("xAAy"), vec![Span::new(1, 3)]);
        assert!(pattern.matches_whole("A"));
        assert!(!pattern.matches_whole("b"));
    }

    #[test]
    fn multi_line_anchors_stay_inside_whole_match() {
        let pattern = DelimiterPattern::builder("^;")
            .multi_line(true)
            .build()
            .expect("valid pattern");
        assert_eq!(pattern.find_spans("a\n;b"), vec![Span::new(2, 3)]);
        assert!(!pattern.matches_whole("x;"));
    }

    #[test]
    fn size_limit_is_enforced() {
        let err = DelimiterPattern::builder(r"\w{100}")
            .size_limit(16)
            .build()
            .unwrap_err();
        assert!(matches!(err, regex::Error::CompiledTooBig(_)));
    }
}
