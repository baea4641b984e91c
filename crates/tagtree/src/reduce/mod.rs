//! Token-to-tree reduction.
//!
//! Reduction runs in two passes over the token sequence:
//!
//! 1. [`self_closing::reduce`] folds `<tag/>` and `<tag attrs/>` windows into
//!    resolved leaf elements. It must run first: a self-closing window starts
//!    exactly like an opening tag.
//! 2. [`nested::reduce`] matches each remaining opening tag with its closing
//!    tag, keeping open elements on an explicit stack.
//!
//! Both passes read an immutable input slice and build a fresh output vector.

pub(crate) mod nested;
pub(crate) mod self_closing;

use crate::node::Element;
use crate::token::Spanned;

/// Working unit between the two passes: a token still to be reduced, or an
/// element the self-closing pass already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Item {
    Token(Spanned),
    Resolved(Element),
}

