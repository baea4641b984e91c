//! Parser entry points.

use crate::error::ParseError;
use crate::node::Forest;
use crate::reduce::{nested, self_closing};
use crate::token::Spanned;
use crate::tokenizer::Tokenizer;
use crate::vocabulary::TagVocabulary;

/// Options controlling parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Tag names treated as structural.
    pub vocabulary: TagVocabulary,
    /// Remove a matching pair of quotes around attribute values.
    ///
    /// Default: `true`
    pub strip_quotes: bool,
    /// Drop whitespace-only text between tags.
    ///
    /// Default: `false`
    pub skip_whitespace_text: bool,
    /// Maximum number of elements open at once.
    ///
    /// Deeper markup fails with [`ParseError::TooDeep`]. The finished tree is
    /// safe to drop at any depth, but `Clone`, `PartialEq`, `Debug` and
    /// serialization recurse once per level, so callers that do any of those
    /// with untrusted input should set a limit.
    ///
    /// Default: `None` (unbounded)
    pub max_depth: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new(TagVocabulary::default())
    }
}

impl ParserOptions {
    /// Create options with default settings for the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: TagVocabulary) -> Self {
        Self {
            vocabulary,
            strip_quotes: true,
            skip_whitespace_text: false,
            max_depth: None,
        }
    }

    /// Set whether attribute values have their quotes removed.
    #[must_use]
    pub fn with_strip_quotes(mut self, strip_quotes: bool) -> Self {
        self.strip_quotes = strip_quotes;
        self
    }

    /// Set whether whitespace-only text is dropped.
    #[must_use]
    pub fn with_skip_whitespace_text(mut self, skip: bool) -> Self {
        self.skip_whitespace_text = skip;
        self
    }

    /// Set the maximum nesting depth (`None` for unbounded).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Reusable parser holding a vocabulary and options.
///
/// # Example
///
/// ```
/// use tagtree::{Parser, ParserOptions, TagVocabulary};
///
/// let parser = Parser::new(ParserOptions::new(TagVocabulary::new(["div"])));
/// let forest = parser.parse("<div>hi</div>").unwrap();
/// assert_eq!(forest[0].as_element().unwrap().text.as_deref(), Some("hi"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a parser.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Split `input` into tokens.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Spanned> {
        Tokenizer::new(&self.options.vocabulary)
            .with_skip_whitespace_text(self.options.skip_whitespace_text)
            .tokenize(input)
    }

    /// Parse `input` into a forest.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a recognized tag is not properly opened,
    /// closed, or nested, or if nesting exceeds
    /// [`ParserOptions::max_depth`]. No partial forest is returned.
    pub fn parse(&self, input: &str) -> Result<Forest, ParseError> {
        let tokens = self.tokenize(input);
        let items = self_closing::reduce(&tokens, self.options.strip_quotes);
        nested::reduce(&items, self.options.strip_quotes, self.options.max_depth)
    }
}

/// Parse `input` with default options and the given vocabulary.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed markup.
///
/// # Example
///
/// ```
/// use tagtree::{Element, Node, TagVocabulary, parse};
///
/// let forest = parse("<span/>", &TagVocabulary::new(["span"])).unwrap();
/// assert_eq!(forest, vec![Node::Element(Element::self_closing("span"))]);
/// ```
pub fn parse(input: &str, vocabulary: &TagVocabulary) -> Result<Forest, ParseError> {
    Parser::new(ParserOptions::new(vocabulary.clone())).parse(input)
}
