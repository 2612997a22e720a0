#![allow(dead_code)]

use parsewords::{KeepMode, parse_line, quote_words};

/// Parse one line and join the tokens with `sep`.
pub fn joined(delimiter: &str, keep: KeepMode, line: &str, sep: &str) -> String {
    parse_line(delimiter, keep, line)
        .unwrap_or_else(|e| panic!("failed to parse {line:?} on {delimiter:?}: {e}"))
        .join(sep)
}

/// Split a batch and join all tokens with `sep`.
pub fn joined_batch(delimiter: &str, keep: KeepMode, lines: &[&str], sep: &str) -> String {
    quote_words(delimiter, keep, lines)
        .unwrap_or_else(|e| panic!("failed to parse {lines:?} on {delimiter:?}: {e}"))
        .join(sep)
}
