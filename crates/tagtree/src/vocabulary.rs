//! Tag vocabulary.

use std::collections::BTreeSet;

/// Tag names recognized when the parser is not given a vocabulary.
const DEFAULT_TAGS: &[&str] = &["div", "span", "p"];

/// Set of tag names the tokenizer treats as structural.
///
/// Any tag-shaped substring whose name is not in the vocabulary is kept as
/// literal text.
///
/// # Example
///
/// ```
/// use tagtree::TagVocabulary;
///
/// let vocabulary = TagVocabulary::new(["section", "em"]);
/// assert!(vocabulary.contains("em"));
/// assert!(!vocabulary.contains("div"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    names: BTreeSet<String>,
}

impl TagVocabulary {
    /// Create a vocabulary from tag names.
    ///
    /// Empty names are ignored.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self {
            names: BTreeSet::new(),
        };
        vocabulary.extend(names);
        vocabulary
    }

    /// Add a tag name. Returns `false` if it was already present or empty.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        self.names.insert(name)
    }

    /// Check whether `name` is a recognized tag.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over tag names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of tag names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary has no tag names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Longest tag name for which `matches` holds.
    pub(crate) fn longest_match(&self, mut matches: impl FnMut(&str) -> bool) -> Option<&str> {
        self.iter()
            .filter(|name| matches(name))
            .max_by_key(|name| name.len())
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS.iter().copied())
    }
}

impl<S: Into<String>> Extend<S> for TagVocabulary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, names: I) {
        for name in names {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TagVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        Self::new(names)
    }
}
