//! Token types produced by the tokenizer.

use std::fmt;

/// A single markup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening delimiter `<name`.
    TagStart(String),
    /// Closing tag `</name>`.
    TagEndWithType(String),
    /// Self-close marker `/>`.
    TagEndWithoutType,
    /// Plain closer `>`.
    TagEndWithoutTypeAndSlash,
    /// Anything else: content text or an attribute fragment.
    Text(String),
}

impl Token {
    /// Short name of the token kind, used in token dumps.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TagStart(_) => "tag-start",
            Self::TagEndWithType(_) => "tag-end",
            Self::TagEndWithoutType => "self-close",
            Self::TagEndWithoutTypeAndSlash => "close",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Token {
    /// Writes the source text the token was produced from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagStart(name) => write!(f, "<{name}"),
            Self::TagEndWithType(name) => write!(f, "</{name}>"),
            Self::TagEndWithoutType => f.write_str("/>"),
            Self::TagEndWithoutTypeAndSlash => f.write_str(">"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A token with the byte offset where it starts in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

impl Spanned {
    /// Create a spanned token.
    #[must_use]
    pub fn new(token: Token, offset: usize) -> Self {
        Self { token, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_source() {
        let tokens = [
            Token::TagStart("div".to_owned()),
            Token::Text(" id=main".to_owned()),
            Token::TagEndWithoutTypeAndSlash,
            Token::Text("hi".to_owned()),
            Token::TagStart("span".to_owned()),
            Token::TagEndWithoutType,
            Token::TagEndWithType("div".to_owned()),
        ];
        let source: String = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(source, "<div id=main>hi<span/></div>");
    }
}
