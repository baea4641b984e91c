//! Attribute fragment parsing.
//!
//! Parses the ` key=value key2=value2` fragment that follows a tag name.

use std::collections::BTreeMap;

/// Attribute key/value pairs of an element.
pub type AttributeMap = BTreeMap<String, String>;

/// Parse an attribute fragment into key/value pairs.
///
/// The fragment is split on whitespace; each segment is split on its first
/// `=`. A segment without `=` becomes a key with an empty value. With
/// `strip_quotes`, a matching pair of `"` or `'` around a value is removed.
///
/// # Example
///
/// ```
/// use tagtree::parse_attributes;
///
/// let attrs = parse_attributes(r#" id="main" data-x=hello hidden"#, true);
/// assert_eq!(attrs["id"], "main");
/// assert_eq!(attrs["data-x"], "hello");
/// assert_eq!(attrs["hidden"], "");
/// ```
#[must_use]
pub fn parse_attributes(fragment: &str, strip_quotes: bool) -> AttributeMap {
    fragment
        .split_whitespace()
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let value = if strip_quotes { unquote(value) } else { value };
            (key.to_owned(), value.to_owned())
        })
        .collect()
}

/// Remove one matching pair of surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(map: &AttributeMap) -> Vec<(&str, &str)> {
        map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn test_empty_fragment() {
        assert!(parse_attributes("", true).is_empty());
        assert!(parse_attributes("   ", true).is_empty());
    }

    #[test]
    fn test_key_values() {
        let attrs = parse_attributes(" id=main data-x=hello", true);
        assert_eq!(pairs(&attrs), vec![("data-x", "hello"), ("id", "main")]);
    }

    #[test]
    fn test_key_without_value() {
        let attrs = parse_attributes(" hidden", true);
        assert_eq!(pairs(&attrs), vec![("hidden", "")]);
    }

    #[test]
    fn test_split_on_first_equals() {
        let attrs = parse_attributes(" expr=a=b", true);
        assert_eq!(attrs["expr"], "a=b");
    }

    #[test]
    fn test_strip_double_quotes() {
        let attrs = parse_attributes(r#" id="main""#, true);
        assert_eq!(attrs["id"], "main");
    }

    #[test]
    fn test_strip_single_quotes() {
        let attrs = parse_attributes(" id='main'", true);
        assert_eq!(attrs["id"], "main");
    }

    #[test]
    fn test_keep_quotes() {
        let attrs = parse_attributes(r#" id="main""#, false);
        assert_eq!(attrs["id"], r#""main""#);
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        let attrs = parse_attributes(r#" a="x' b=""#, true);
        assert_eq!(attrs["a"], r#""x'"#);
        assert_eq!(attrs["b"], r#"""#);
    }

    #[test]
    fn test_empty_quoted_value() {
        let attrs = parse_attributes(r#" alt="""#, true);
        assert_eq!(attrs["alt"], "");
    }

    #[test]
    fn test_repeated_spaces_and_trailing_space() {
        let attrs = parse_attributes("  a=1   b=2 ", true);
        assert_eq!(pairs(&attrs), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_last_duplicate_key_wins() {
        let attrs = parse_attributes(" a=1 a=2", true);
        assert_eq!(pairs(&attrs), vec![("a", "2")]);
    }
}
