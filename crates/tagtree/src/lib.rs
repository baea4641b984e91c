//! Parser for a restricted, vocabulary-driven markup.
//!
//! Converts markup such as
//!
//! ```text
//! <div id=main data-x=hello>Hello<span id=sub/></div>
//! ```
//!
//! into a forest of [`Node`]s. Only tag names from the caller's
//! [`TagVocabulary`] are structural; anything else is text.
//!
//! # Architecture
//!
//! Parsing is a pipeline:
//! - [`Tokenizer`]: splits the input on `<name`, `</name>`, `/>` and `>`
//! - [`parse_attributes`]: turns ` key=value` fragments into an [`AttributeMap`]
//! - self-closing reduction: folds `<name/>` and `<name attrs/>` into leaves
//! - nested reduction: matches open/close pairs with an explicit stack of
//!   open elements and builds the tree in one pass
//!
//! The whole pipeline is a pure function of the input and [`ParserOptions`].
//!
//! # Example
//!
//! ```
//! use tagtree::{TagVocabulary, parse};
//!
//! let vocabulary = TagVocabulary::new(["div", "span"]);
//! let forest = parse("<div id=main>Hello<span id=sub/></div>", &vocabulary).unwrap();
//!
//! let div = forest[0].as_element().unwrap();
//! assert_eq!(div.attribute("id"), Some("main"));
//! assert_eq!(div.text.as_deref(), Some("Hello"));
//! assert!(div.children[0].as_element().unwrap().self_close);
//! ```

mod attributes;
mod error;
mod node;
mod parser;
mod reduce;
mod token;
mod tokenizer;
mod vocabulary;

pub use attributes::{AttributeMap, parse_attributes};
pub use error::ParseError;
pub use node::{Element, Forest, Node};
pub use parser::{Parser, ParserOptions, parse};
pub use token::{Spanned, Token};
pub use tokenizer::{Tokenizer, tokenize};
pub use vocabulary::TagVocabulary;
