//! Parse errors.

/// Structural error in the markup. The whole parse is aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// An opening tag has no matching close at its nesting depth.
    #[error("malformed markup: <{tag}> opened at byte {offset} is never closed")]
    Unclosed {
        /// Tag name.
        tag: String,
        /// Byte offset of the opening `<tag`.
        offset: usize,
    },

    /// An opening tag is missing its `>` or `/>`.
    #[error("malformed markup: <{tag} at byte {offset} is missing its closing `>`")]
    UnterminatedStartTag {
        /// Tag name.
        tag: String,
        /// Byte offset of the opening `<tag`.
        offset: usize,
    },

    /// A closing tag has no open tag of the same name.
    #[error("malformed markup: </{tag}> at byte {offset} has no matching opening tag")]
    UnexpectedClose {
        /// Tag name.
        tag: String,
        /// Byte offset of the `</tag>`.
        offset: usize,
    },

    /// An opening tag would nest deeper than the configured limit.
    #[error("markup nested too deeply: <{tag}> at byte {offset} exceeds the limit of {limit}")]
    TooDeep {
        /// Tag name.
        tag: String,
        /// Byte offset of the opening `<tag`.
        offset: usize,
        /// Maximum number of open elements allowed.
        limit: usize,
    },
}

impl ParseError {
    /// Tag name the error refers to.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Unclosed { tag, .. }
            | Self::UnterminatedStartTag { tag, .. }
            | Self::UnexpectedClose { tag, .. }
            | Self::TooDeep { tag, .. } => tag,
        }
    }

    /// Byte offset in the input where the offending tag starts.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::Unclosed { offset, .. }
            | Self::UnterminatedStartTag { offset, .. }
            | Self::UnexpectedClose { offset, .. }
            | Self::TooDeep { offset, .. } => *offset,
        }
    }
}
