//! Token rendering.
//!
//! Turns assembled words back into strings, stripping quotes and
//! backslashes or keeping them depending on [`KeepMode`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::assembler::Word;

/// Output shaping for rendered tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeepMode {
    /// Strip quotes and backslashes the way a Bourne shell would.
    #[default]
    None,
    /// Keep quotes and backslashes verbatim.
    Quotes,
    /// Like `Quotes`, and also emit each delimiter as its own token.
    Delimiters,
}

impl fmt::Display for KeepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Quotes => write!(f, "quotes"),
            Self::Delimiters => write!(f, "delimiters"),
        }
    }
}

/// A keep mode name that is not one of `none`, `quotes`, `delimiters`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown keep mode: {0}")]
pub struct UnknownKeepMode(pub String);

impl FromStr for KeepMode {
    type Err = UnknownKeepMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "quotes" => Ok(Self::Quotes),
            "delimiters" => Ok(Self::Delimiters),
            other => Err(UnknownKeepMode(other.to_string())),
        }
    }
}

static UNSLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\(.)").expect("unslash pattern is valid"));

/// Render `words` of `input` into tokens.
#[must_use]
pub fn render(input: &str, words: &[Word], keep: KeepMode) -> Vec<String> {
    let mut tokens = Vec::with_capacity(words.len());

    for word in words {
        let mut token = String::new();
        for part in &word.parts {
            let text = part.slice(input);
            if keep == KeepMode::None {
                token.push_str(&unquote(text));
            } else {
                token.push_str(text);
            }
        }
        tokens.push(token);

        if keep == KeepMode::Delimiters {
            if let Some(delimiter) = word.delimiter {
                tokens.push(delimiter.slice(input).to_string());
            }
        }
    }

    tokens
}

/// Strip one layer of quoting from a word part.
///
/// Single-quoted text loses its quotes and nothing else. Double-quoted
/// text loses its quotes and then every `\x` becomes `x`; unquoted
/// text only has its `\x` sequences collapsed. A quoted part of two
/// characters or fewer renders as the empty string.
#[must_use]
pub fn unquote(text: &str) -> Cow<'_, str> {
    let mut chars = text.chars();
    match chars.next() {
        None => Cow::Borrowed(""),
        Some(quote @ ('\'' | '"')) => {
            chars.next_back();
            let inner = chars.as_str();
            if quote == '\'' {
                Cow::Borrowed(inner)
            } else {
                UNSLASH.replace_all(inner, "$1")
            }
        }
        Some(_) => UNSLASH.replace_all(text, "$1"),
    }
}
