//! Split text into words using shell-like quoting and escaping.
//!
//! A delimiter pattern (whitespace by default) separates words, but a
//! delimiter inside single or double quotes, or right after a
//! backslash, does not split anything.
//!
//! # Quick start
//!
//! ## Split a line
//!
//! ```
//! use parsewords::{KeepMode, parse_line};
//!
//! let words = parse_line(":", KeepMode::None, r#"a:"b:c":d\:e"#).unwrap();
//! assert_eq!(words, vec!["a", "b:c", "d:e"]);
//! ```
//!
//! ## Keep quotes and delimiters
//!
//! ```
//! use parsewords::{KeepMode, parse_line};
//!
//! let words = parse_line(r"\s+", KeepMode::Delimiters, r#"x  "y z""#).unwrap();
//! assert_eq!(words, vec!["x", "  ", r#""y z""#]);
//! ```
//!
//! ## Reuse a compiled pattern
//!
//! ```
//! use parsewords::{DelimiterPattern, KeepMode, quote_words_precompiled};
//!
//! let comma = DelimiterPattern::new(",").unwrap();
//! let words = quote_words_precompiled(&comma, KeepMode::None, &["a,b", "'c,d'"]).unwrap();
//! assert_eq!(words, vec!["a", "b", "c,d"]);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod assembler;
pub mod batch;
pub mod classifier;
pub mod line;
pub mod pattern;
pub mod render;
pub mod scanner;
pub mod span;

pub use assembler::Word;
pub use batch::{
    nested_quote_words, nested_quote_words_precompiled, quote_words, quote_words_precompiled,
    shell_words,
};
pub use line::{parse_line, parse_line_precompiled, split_words};
pub use pattern::{DelimiterPattern, DelimiterPatternBuilder, PatternMatcher};
pub use render::{KeepMode, UnknownKeepMode, unquote};
pub use scanner::UnterminatedQuote;
pub use span::{QuoteKind, QuotedRange, Span};

/// Unified error type for every splitting operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line ended inside a quote.
    #[error("{0}")]
    UnterminatedQuote(#[from] UnterminatedQuote),
    /// The delimiter pattern failed to compile.
    #[error("invalid delimiter pattern: {0}")]
    InvalidDelimiterPattern(#[from] regex::Error),
}
