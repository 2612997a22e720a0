//! Quote and escape scanner.
//!
//! One left-to-right pass over a line records every matched quote
//! pair and every character that is the target of a backslash.
//! Nothing is split here; the classifier and assembler work from
//! the recorded annotations.

use crate::span::{QuoteKind, QuotedRange, Span};

/// A quote was opened but the line ended before it was closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unterminated {kind} quote at offset {offset}")]
pub struct UnterminatedQuote {
    pub kind: QuoteKind,
    /// Byte offset of the opening quote character.
    pub offset: usize,
}

/// Annotations produced by [`scan`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Matched quote pairs, ordered and non-overlapping.
    pub quoted: Vec<QuotedRange>,
    /// Offsets of backslash-escaped characters, strictly increasing.
    pub escaped: Vec<usize>,
}

impl Scan {
    /// The quoted range containing `offset`, if any.
    #[must_use]
    pub fn quote_at(&self, offset: usize) -> Option<&QuotedRange> {
        let idx = self.quoted.partition_point(|q| q.span.end <= offset);
        self.quoted.get(idx).filter(|q| q.span.contains(offset))
    }

    #[must_use]
    pub fn is_escaped(&self, offset: usize) -> bool {
        self.escaped.binary_search(&offset).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    /// Inside `'...'`, opened at the given offset.
    InSingle(usize),
    /// Inside `"..."`, opened at the given offset.
    InDouble(usize),
}

/// Scan `input` for quoted ranges and escaped positions.
///
/// # Errors
///
/// Returns `UnterminatedQuote` when the input ends inside a quote.
pub fn scan(input: &str) -> Result<Scan, UnterminatedQuote> {
    let mut out = Scan::default();
    let mut state = State::Unquoted;
    let mut escape = false;

    for (i, ch) in input.char_indices() {
        if escape && !matches!(state, State::InSingle(_)) {
            out.escaped.push(i);
        }

        match (ch, state) {
            // `\\` cancels itself
            ('\\', _) => escape = !escape,
            ('"', State::Unquoted) if !escape => state = State::InDouble(i),
            ('"', State::InDouble(start)) if !escape => {
                out.quoted.push(QuotedRange {
                    kind: QuoteKind::Double,
                    span: Span::new(start, i + 1),
                });
                state = State::Unquoted;
            }
            ('\'', State::Unquoted) if !escape => {
                state = State::InSingle(i);
                escape = false;
            }
            ('\'', State::InSingle(start)) => {
                out.quoted.push(QuotedRange {
                    kind: QuoteKind::Single,
                    span: Span::new(start, i + 1),
                });
                state = State::Unquoted;
                escape = false;
            }
            _ => escape = false,
        }
    }

    match state {
        State::Unquoted => Ok(out),
        State::InSingle(offset) => Err(UnterminatedQuote {
            kind: QuoteKind::Single,
            offset,
        }),
        State::InDouble(offset) => Err(UnterminatedQuote {
            kind: QuoteKind::Double,
            offset,
        }),
    }
}
