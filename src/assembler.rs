//! Word assembly.
//!
//! Partitions a line into words using the accepted delimiters. Each
//! word keeps its literal runs and quoted ranges as separate parts so
//! the renderer can unquote them individually.

use crate::span::{QuotedRange, Span};

/// One word of a line: its parts in input order and the delimiter
/// that follows it. The last word of a line has no delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub parts: Vec<Span>,
    pub delimiter: Option<Span>,
}

impl Word {
    fn bare(span: Span) -> Self {
        Self {
            parts: vec![span],
            delimiter: None,
        }
    }
}

/// Split `input` into words at `delimiters`.
///
/// `delimiters` and `quoted` must be ordered and non-overlapping, and
/// no delimiter may start inside a quoted range.
#[must_use]
pub fn assemble(input: &str, delimiters: &[Span], quoted: &[QuotedRange]) -> Vec<Word> {
    let len = input.len();
    let Some(last) = delimiters.last() else {
        return vec![Word::bare(Span::new(0, len))];
    };

    let mut words = Vec::with_capacity(delimiters.len() + 1);
    let mut pos = 0;
    let mut qi = 0;

    for &delimiter in delimiters {
        let (parts, next_qi) = word_parts(pos, qi, delimiter, quoted);
        qi = next_qi;
        words.push(Word {
            parts,
            delimiter: Some(delimiter),
        });
        pos = delimiter.end;
    }

    if pos < len {
        words.push(Word::bare(Span::new(pos, len)));
    } else if last.end == len {
        // a line ending on a delimiter keeps its empty last field
        words.push(Word::bare(Span::new(len, len)));
    }

    words
}

/// Collect the parts between `pos` and `delimiter`, starting at quoted
/// range `qi`. Returns the parts and the first unconsumed quoted range.
fn word_parts(
    mut pos: usize,
    mut qi: usize,
    delimiter: Span,
    quoted: &[QuotedRange],
) -> (Vec<Span>, usize) {
    let mut parts = Vec::new();

    while pos < delimiter.start {
        // a delimiter match may have run over the start of a quote
        while quoted.get(qi).is_some_and(|q| q.span.start < pos) {
            qi += 1;
        }

        match quoted.get(qi) {
            Some(q) if q.span.start == pos => {
                parts.push(q.span);
                pos = q.span.end;
                qi += 1;
            }
            Some(q) if q.span.start < delimiter.start => {
                parts.push(Span::new(pos, q.span.start));
                pos = q.span.start;
            }
            _ => {
                parts.push(Span::new(pos, delimiter.start));
                pos = delimiter.end;
            }
        }
    }

    (parts, qi)
}
