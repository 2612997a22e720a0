use std::fmt;

/// Half-open byte range `[start, end)` into a parsed line.
///
/// Both ends always fall on `char` boundaries of the line the span
/// was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` lies inside the span.
    #[must_use]
    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The text covered by the span.
    #[must_use]
    pub fn slice(self, input: &str) -> &str {
        &input[self.start..self.end]
    }
}

/// Which quote character opened a quoted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// `'...'`: contents are literal, backslash has no meaning.
    Single,
    /// `"..."`: backslash escapes the next character.
    Double,
}

impl QuoteKind {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// A matched quote pair, both quote characters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedRange {
    pub kind: QuoteKind,
    pub span: Span,
}
