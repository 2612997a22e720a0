//! Delimiter classification.
//!
//! Raw pattern matches become delimiters only if they start outside
//! every quoted range. A match starting on an escaped character loses
//! that character and survives only if the remainder is still a full
//! match of the pattern.

use crate::pattern::PatternMatcher;
use crate::scanner::Scan;
use crate::span::Span;

/// Filter `raw` matches of `matcher` over `input` down to valid
/// delimiters, preserving order.
#[must_use]
pub fn classify<M>(input: &str, scan: &Scan, raw: &[Span], matcher: &M) -> Vec<Span>
where
    M: PatternMatcher + ?Sized,
{
    raw.iter()
        .filter_map(|&m| check_delimiter(input, scan, matcher, m))
        .collect()
}

fn check_delimiter<M>(input: &str, scan: &Scan, matcher: &M, m: Span) -> Option<Span>
where
    M: PatternMatcher + ?Sized,
{
    if scan.quote_at(m.start).is_some() {
        return None;
    }
    if !scan.is_escaped(m.start) {
        return Some(m);
    }
    if m.is_empty() {
        return None;
    }

    let width = input[m.start..].chars().next().map_or(0, char::len_utf8);
    let shifted = Span::new(m.start + width, m.end);
    (!shifted.is_empty() && matcher.matches_whole(shifted.slice(input))).then_some(shifted)
}
