//! Multi-line wrappers around [`parse_line`](crate::parse_line).
//!
//! Unlike a single-line parse, these drop one trailing empty token
//! per non-empty line. A non-empty line that yields no tokens at all
//! discards the whole batch and an empty result is returned.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::Error;
use crate::line::parse_line_precompiled;
use crate::pattern::{DelimiterPattern, PatternMatcher};
use crate::render::KeepMode;

static LEADING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+").expect("leading space pattern is valid"));

// keeps one escaped whitespace character at the end
static TRAILING_SPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:\\\s)|(?:[^\\]))\s+$").expect("trailing space pattern is valid")
});

/// Split every line on `delimiter` and concatenate the tokens.
pub fn quote_words<S>(delimiter: &str, keep: KeepMode, lines: &[S]) -> Result<Vec<String>, Error>
where
    S: AsRef<str>,
{
    let pattern = DelimiterPattern::new(delimiter)?;
    quote_words_precompiled(&pattern, keep, lines)
}

/// Like [`quote_words`], with an already built matcher.
pub fn quote_words_precompiled<M, S>(
    matcher: &M,
    keep: KeepMode,
    lines: &[S],
) -> Result<Vec<String>, Error>
where
    M: PatternMatcher + ?Sized,
    S: AsRef<str>,
{
    let mut all = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let Some(words) = line_words(matcher, keep, line.as_ref())? else {
            debug!(line = index, "line produced no tokens, discarding batch");
            return Ok(Vec::new());
        };
        all.extend(words);
    }
    Ok(all)
}

/// Split every line on `delimiter`, one token list per line.
pub fn nested_quote_words<S>(
    delimiter: &str,
    keep: KeepMode,
    lines: &[S],
) -> Result<Vec<Vec<String>>, Error>
where
    S: AsRef<str>,
{
    let pattern = DelimiterPattern::new(delimiter)?;
    nested_quote_words_precompiled(&pattern, keep, lines)
}

/// Like [`nested_quote_words`], with an already built matcher.
pub fn nested_quote_words_precompiled<M, S>(
    matcher: &M,
    keep: KeepMode,
    lines: &[S],
) -> Result<Vec<Vec<String>>, Error>
where
    M: PatternMatcher + ?Sized,
    S: AsRef<str>,
{
    let mut all = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let Some(words) = line_words(matcher, keep, line.as_ref())? else {
            debug!(line = index, "line produced no tokens, discarding batch");
            return Ok(Vec::new());
        };
        all.push(words);
    }
    Ok(all)
}

/// Join `lines`, trim surrounding whitespace and split on whitespace
/// like a Bourne shell would, removing quotes and backslashes.
///
/// ```
/// use parsewords::shell_words;
///
/// let words = shell_words(&[r#"  foo "bar quiz" zoo\ "#]).unwrap();
/// assert_eq!(words, vec!["foo", "bar quiz", "zoo "]);
/// ```
pub fn shell_words<S>(lines: &[S]) -> Result<Vec<String>, Error>
where
    S: AsRef<str>,
{
    let joined: String = lines.iter().map(AsRef::<str>::as_ref).collect();
    let trimmed = LEADING_SPACE.replace(&joined, "");
    let trimmed = TRAILING_SPACE.replace(&trimmed, "$1");

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    parse_line_precompiled(DelimiterPattern::whitespace(), KeepMode::None, &trimmed)
}

/// Tokens of one line with the batch rules applied, or `None` when a
/// non-empty line produced nothing.
fn line_words<M>(matcher: &M, keep: KeepMode, line: &str) -> Result<Option<Vec<String>>, Error>
where
    M: PatternMatcher + ?Sized,
{
    let mut words = parse_line_precompiled(matcher, keep, line)?;
    if line.is_empty() {
        return Ok(Some(words));
    }

    if words.last().is_some_and(String::is_empty) {
        words.pop();
    }
    Ok((!words.is_empty()).then_some(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_words_drops_trailing_empty() {
        let words = quote_words(":", KeepMode::None, &["a:b:"]).expect("should parse");
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn quote_words_drops_only_one_trailing_empty() {
        let words = quote_words(":", KeepMode::None, &["a::"]).expect("should parse");
        assert_eq!(words, vec!["a", ""]);
    }

    #[test]
    fn empty_line_keeps_its_empty_token() {
        let words = quote_words(":", KeepMode::None, &["", "a"]).expect("should parse");
        assert_eq!(words, vec!["", "a"]);
    }

    #[test]
    fn line_without_tokens_discards_batch() {
        let words =
            quote_words(r"\s+", KeepMode::None, &["a b", "''", "c"]).expect("should parse");
        assert!(words.is_empty());

        let nested = nested_quote_words(r"\s+", KeepMode::None, &["a b", "''"])
            .expect("should parse");
        assert!(nested.is_empty());
    }

    #[test]
    fn nested_keeps_lines_apart() {
        let nested =
            nested_quote_words(":", KeepMode::Quotes, &["a:b:", "c"]).expect("should parse");
        assert_eq!(nested, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn batch_error_aborts() {
        let err = quote_words(r"\s+", KeepMode::None, &["a", "b \"c"]).unwrap_err();
        assert!(matches!(err, Error::UnterminatedQuote(_)));
    }

    #[test]
    fn shell_words_empty_input() {
        let words = shell_words(&["   ", "\t"]).expect("should parse");
        assert!(words.is_empty());
        let none: [&str; 0] = [];
        assert!(shell_words(&none).expect("should parse").is_empty());
    }

    #[test]
    fn shell_words_keeps_escaped_trailing_space() {
        let words = shell_words(&[r"a b\ "]).expect("should parse");
        assert_eq!(words, vec!["a", "b "]);
    }

    #[test]
    fn shell_words_trims_plain_trailing_space() {
        let words = shell_words(&[" a b  "]).expect("should parse");
        assert_eq!(words, vec!["a", "b"]);
    }
}
