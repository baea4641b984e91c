//! Vocabulary-driven tokenizer.
//!
//! Splits markup into [`Token`]s using delimiters derived from the
//! [`TagVocabulary`]: `<name`, `</name>`, `/>` and `>`.
//!
//! The tokenizer alternates between two modes. In content mode only `<name`
//! and `</name>` are structural; `>` and `/>` are plain text, so a tag with an
//! unknown name stays a single text run. After `<name` it expects attributes:
//! everything up to the first `/>` or `>` is the attribute fragment, then the
//! closer is emitted and content mode resumes.

use crate::token::{Spanned, Token};
use crate::vocabulary::TagVocabulary;

/// Tokenizer bound to a tag vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    vocabulary: &'a TagVocabulary,
    skip_whitespace_text: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer for the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: &'a TagVocabulary) -> Self {
        Self {
            vocabulary,
            skip_whitespace_text: false,
        }
    }

    /// Drop whitespace-only content text. Attribute fragments are kept.
    #[must_use]
    pub fn with_skip_whitespace_text(mut self, skip: bool) -> Self {
        self.skip_whitespace_text = skip;
        self
    }

    /// Split `input` into tokens in source order.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Spanned> {
        let mut tokens = Vec::new();
        let mut text_start = 0;
        let mut pos = 0;

        while let Some(found) = input[pos..].find('<') {
            let at = pos + found;
            let rest = &input[at..];

            if let Some(name) = self.match_close(rest) {
                self.push_text(&mut tokens, input, text_start, at);
                tokens.push(Spanned::new(Token::TagEndWithType(name.to_owned()), at));
                pos = at + name.len() + 3;
                text_start = pos;
            } else if let Some(name) = self.match_open(rest) {
                self.push_text(&mut tokens, input, text_start, at);
                tokens.push(Spanned::new(Token::TagStart(name.to_owned()), at));
                pos = tokenize_tag_rest(&mut tokens, input, at + name.len() + 1);
                text_start = pos;
            } else {
                pos = at + 1;
            }
        }

        self.push_text(&mut tokens, input, text_start, input.len());
        tokens
    }

    /// Match `</name>` at the start of `rest`.
    fn match_close(&self, rest: &str) -> Option<&'a str> {
        let after = rest.strip_prefix("</")?;
        self.vocabulary.longest_match(|name| {
            after
                .strip_prefix(name)
                .is_some_and(|tail| tail.starts_with('>'))
        })
    }

    /// Match `<name` at the start of `rest`, followed by a name boundary.
    fn match_open(&self, rest: &str) -> Option<&'a str> {
        let after = rest.strip_prefix('<')?;
        self.vocabulary.longest_match(|name| {
            after.strip_prefix(name).is_some_and(|tail| {
                tail.chars()
                    .next()
                    .is_none_or(|c| c.is_whitespace() || c == '>' || c == '/')
            })
        })
    }

    fn push_text(&self, tokens: &mut Vec<Spanned>, input: &str, start: usize, end: usize) {
        let text = &input[start..end];
        if text.is_empty() || (self.skip_whitespace_text && text.trim().is_empty()) {
            return;
        }
        tokens.push(Spanned::new(Token::Text(text.to_owned()), start));
    }
}

/// Tokenize the attribute fragment and closer that follow `<name`.
///
/// Returns the position where content mode resumes.
fn tokenize_tag_rest(tokens: &mut Vec<Spanned>, input: &str, start: usize) -> usize {
    let rest = &input[start..];

    let Some(gt) = rest.find('>') else {
        // Never closed; the reducer reports the dangling start tag.
        if !rest.is_empty() {
            tokens.push(Spanned::new(Token::Text(rest.to_owned()), start));
        }
        return input.len();
    };

    let (fragment_end, closer) = if rest[..gt].ends_with('/') {
        (gt - 1, Token::TagEndWithoutType)
    } else {
        (gt, Token::TagEndWithoutTypeAndSlash)
    };

    if fragment_end > 0 {
        tokens.push(Spanned::new(
            Token::Text(rest[..fragment_end].to_owned()),
            start,
        ));
    }
    tokens.push(Spanned::new(closer, start + fragment_end));

    start + gt + 1
}

/// Tokenize `input` with the given vocabulary.
///
/// # Example
///
/// ```
/// use tagtree::{TagVocabulary, Token, tokenize};
///
/// let tokens = tokenize("<span/>", &TagVocabulary::default());
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.token).collect();
/// assert_eq!(
///     kinds,
///     vec![Token::TagStart("span".to_owned()), Token::TagEndWithoutType]
/// );
/// ```
#[must_use]
pub fn tokenize(input: &str, vocabulary: &TagVocabulary) -> Vec<Spanned> {
    Tokenizer::new(vocabulary).tokenize(input)
}
