//! Self-closing tag reduction.

use super::Item;
use crate::attributes::parse_attributes;
use crate::node::Element;
use crate::token::{Spanned, Token};

/// Fold self-closing windows into resolved elements.
///
/// Recognized windows, earliest position first:
/// - `TagStart(n) Text(fragment) TagEndWithoutType` with attributes
/// - `TagStart(n) TagEndWithoutType` without attributes
///
/// All other tokens pass through unchanged.
pub(crate) fn reduce(tokens: &[Spanned], strip_quotes: bool) -> Vec<Item> {
    let mut items = Vec::with_capacity(tokens.len());
    let mut rest = tokens;

    while let Some((first, tail)) = rest.split_first() {
        let Token::TagStart(name) = &first.token else {
            items.push(Item::Token(first.clone()));
            rest = tail;
            continue;
        };

        match tail {
            [
                Spanned {
                    token: Token::Text(fragment),
                    ..
                },
                Spanned {
                    token: Token::TagEndWithoutType,
                    ..
                },
                after @ ..,
            ] => {
                let attributes = parse_attributes(fragment, strip_quotes);
                items.push(Item::Resolved(
                    Element::self_closing(name.as_str()).with_attributes(attributes),
                ));
                rest = after;
            }
            [
                Spanned {
                    token: Token::TagEndWithoutType,
                    ..
                },
                after @ ..,
            ] => {
                items.push(Item::Resolved(Element::self_closing(name.as_str())));
                rest = after;
            }
            _ => {
                items.push(Item::Token(first.clone()));
                rest = tail;
            }
        }
    }

    items
}
