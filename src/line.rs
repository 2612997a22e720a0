//! Single-line splitting.

use tracing::trace;

use crate::Error;
use crate::assembler::{Word, assemble};
use crate::classifier::classify;
use crate::pattern::{DelimiterPattern, PatternMatcher};
use crate::render::{KeepMode, render};
use crate::scanner::{UnterminatedQuote, scan};

/// Split `line` on the regex `delimiter`, honoring quotes and
/// backslash escapes.
///
/// ```
/// use parsewords::{KeepMode, parse_line};
///
/// let words = parse_line(r"\s+", KeepMode::None, r#"foo "bar baz" zoo"#).unwrap();
/// assert_eq!(words, vec!["foo", "bar baz", "zoo"]);
/// ```
pub fn parse_line(delimiter: &str, keep: KeepMode, line: &str) -> Result<Vec<String>, Error> {
    let pattern = DelimiterPattern::new(delimiter)?;
    parse_line_precompiled(&pattern, keep, line)
}

/// Like [`parse_line`], with an already built matcher.
pub fn parse_line_precompiled<M>(
    matcher: &M,
    keep: KeepMode,
    line: &str,
) -> Result<Vec<String>, Error>
where
    M: PatternMatcher + ?Sized,
{
    let words = split_words(matcher, line)?;
    Ok(render(line, &words, keep))
}

/// Scan, classify and assemble `line` without rendering it.
pub fn split_words<M>(matcher: &M, line: &str) -> Result<Vec<Word>, UnterminatedQuote>
where
    M: PatternMatcher + ?Sized,
{
    let scan = scan(line)?;
    let raw = matcher.find_spans(line);
    let delimiters = classify(line, &scan, &raw, matcher);

    trace!(
        quoted = scan.quoted.len(),
        escaped = scan.escaped.len(),
        matches = raw.len(),
        delimiters = delimiters.len(),
        "split line"
    );

    Ok(assemble(line, &delimiters, &scan.quoted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    /// Splits on a fixed character, to exercise a non-regex matcher.
    struct CharMatcher(char);

    impl PatternMatcher for CharMatcher {
        fn find_spans(&self, text: &str) -> Vec<Span> {
            text.match_indices(self.0)
                .map(|(i, s)| Span::new(i, i + s.len()))
                .collect()
        }

        fn matches_whole(&self, text: &str) -> bool {
            let mut chars = text.chars();
            chars.next() == Some(self.0) && chars.next().is_none()
        }
    }

    #[test]
    fn custom_matcher() {
        let words =
            parse_line_precompiled(&CharMatcher(','), KeepMode::None, r#"a,"b,c",d\,e"#)
                .expect("should parse");
        assert_eq!(words, vec!["a", "b,c", "d,e"]);
    }

    #[test]
    fn dyn_matcher() {
        let matcher: &dyn PatternMatcher = DelimiterPattern::whitespace();
        let words = parse_line_precompiled(matcher, KeepMode::Quotes, "a 'b c'")
            .expect("should parse");
        assert_eq!(words, vec!["a", "'b c'"]);
    }

    #[test]
    fn split_words_exposes_spans() {
        let words = split_words(DelimiterPattern::whitespace(), "ab cd").expect("should split");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].parts, vec![Span::new(0, 2)]);
        assert_eq!(words[0].delimiter, Some(Span::new(2, 3)));
        assert_eq!(words[1].delimiter, None);
    }

    #[test]
    fn invalid_pattern() {
        let err = parse_line("[", KeepMode::None, "a").unwrap_err();
        assert!(matches!(err, Error::InvalidDelimiterPattern(_)));
    }

    #[test]
    fn unterminated_quote_wins_over_splitting() {
        let err = parse_line(".", KeepMode::None, "foo \"bar").unwrap_err();
        assert!(matches!(err, Error::UnterminatedQuote(_)));
    }
}
