//! Open/close tag matching and tree construction.

use super::Item;
use crate::attributes::{AttributeMap, parse_attributes};
use crate::error::ParseError;
use crate::node::{Element, Forest, Node};
use crate::token::{Spanned, Token};

/// Element whose closing tag has not been reached yet.
struct OpenFrame {
    tag: String,
    offset: usize,
    attributes: Option<AttributeMap>,
    text: Option<String>,
    children: Vec<Node>,
}

impl OpenFrame {
    fn close(self) -> Element {
        let mut element = Element::new(self.tag);
        element.attributes = self.attributes;
        element.text = self.text;
        element.children = self.children;
        element
    }
}

/// Build the forest from self-close-reduced items in a single pass.
///
/// Opening tags push a frame onto an explicit stack; `</tag>` pops the
/// innermost frame and attaches it to its parent. A text token directly
/// after the opening `>` is hoisted into the element's `text`.
///
/// A `</tag>` that does not close the innermost frame reports the first
/// frame it would skip as [`ParseError::Unclosed`], or
/// [`ParseError::UnexpectedClose`] if no frame of that name is open. At end
/// of input the outermost open frame is reported as unclosed.
pub(crate) fn reduce(
    items: &[Item],
    strip_quotes: bool,
    max_depth: Option<usize>,
) -> Result<Forest, ParseError> {
    let mut forest = Vec::new();
    let mut open: Vec<OpenFrame> = Vec::new();
    let mut rest = items;

    while let Some((first, tail)) = rest.split_first() {
        rest = tail;
        let spanned = match first {
            Item::Resolved(element) => {
                attach(&mut open, &mut forest, Node::Element(element.clone()));
                continue;
            }
            Item::Token(spanned) => spanned,
        };

        match &spanned.token {
            Token::TagStart(name) => {
                let (attributes, body) = split_opening(tail, strip_quotes).ok_or_else(|| {
                    ParseError::UnterminatedStartTag {
                        tag: name.clone(),
                        offset: spanned.offset,
                    }
                })?;
                if let Some(limit) = max_depth.filter(|&limit| open.len() >= limit) {
                    return Err(ParseError::TooDeep {
                        tag: name.clone(),
                        offset: spanned.offset,
                        limit,
                    });
                }

                let (text, body) = split_leading_text(body);
                open.push(OpenFrame {
                    tag: name.clone(),
                    offset: spanned.offset,
                    attributes,
                    text,
                    children: Vec::new(),
                });
                rest = body;
            }
            Token::TagEndWithType(name) => {
                let element = close_frame(&mut open, name, spanned.offset)?;
                attach(&mut open, &mut forest, Node::Element(element));
            }
            Token::Text(text) => attach(&mut open, &mut forest, Node::Text(text.clone())),
            // Closers are only emitted right after a start tag, which
            // consumes them. Keep any other occurrence as literal text.
            token @ (Token::TagEndWithoutType | Token::TagEndWithoutTypeAndSlash) => {
                attach(&mut open, &mut forest, Node::Text(token.to_string()));
            }
        }
    }

    match open.first() {
        Some(frame) => Err(ParseError::Unclosed {
            tag: frame.tag.clone(),
            offset: frame.offset,
        }),
        None => Ok(forest),
    }
}

/// Append a finished node to the innermost open frame, or to the forest.
fn attach(open: &mut [OpenFrame], forest: &mut Forest, node: Node) {
    match open.last_mut() {
        Some(frame) => frame.children.push(node),
        None => forest.push(node),
    }
}

/// Pop the frame closed by `</name>` at `offset`.
fn close_frame(
    open: &mut Vec<OpenFrame>,
    name: &str,
    offset: usize,
) -> Result<Element, ParseError> {
    let Some(index) = open.iter().rposition(|frame| frame.tag == name) else {
        return Err(ParseError::UnexpectedClose {
            tag: name.to_owned(),
            offset,
        });
    };

    if let Some(skipped) = open.get(index + 1) {
        return Err(ParseError::Unclosed {
            tag: skipped.tag.clone(),
            offset: skipped.offset,
        });
    }

    Ok(open.remove(index).close())
}

/// Split off a text token directly following the opening `>`.
fn split_leading_text(body: &[Item]) -> (Option<String>, &[Item]) {
    match body {
        [
            Item::Token(Spanned {
                token: Token::Text(text),
                ..
            }),
            more @ ..,
        ] => (Some(text.clone()), more),
        _ => (None, body),
    }
}

/// Match the rest of an opening tag: an optional attribute fragment and `>`.
///
/// Returns the attributes and the items following `>`.
fn split_opening(tail: &[Item], strip_quotes: bool) -> Option<(Option<AttributeMap>, &[Item])> {
    match tail {
        [
            Item::Token(Spanned {
                token: Token::Text(fragment),
                ..
            }),
            Item::Token(Spanned {
                token: Token::TagEndWithoutTypeAndSlash,
                ..
            }),
            body @ ..,
        ] => Some((Some(parse_attributes(fragment, strip_quotes)), body)),
        [
            Item::Token(Spanned {
                token: Token::TagEndWithoutTypeAndSlash,
                ..
            }),
            body @ ..,
        ] => Some((None, body)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::self_closing;
    use crate::tokenizer::tokenize;
    use crate::vocabulary::TagVocabulary;
    use pretty_assertions::assert_eq;

    fn items(input: &str) -> Vec<Item> {
        let vocabulary = TagVocabulary::new(["div", "span", "p"]);
        self_closing::reduce(&tokenize(input, &vocabulary), true)
    }

    fn reduce_str(input: &str) -> Result<Forest, ParseError> {
        reduce(&items(input), true, None)
    }

    #[test]
    fn test_same_name_depth() {
        let forest = reduce_str("<div><div></div></div>").unwrap();
        assert_eq!(
            forest,
            vec![Node::Element(Element::new("div").with_children(vec![
                Element::new("div").into()
            ]))]
        );
    }

    #[test]
    fn test_other_names_between_same_name() {
        let forest = reduce_str("<div><span><div></div></span></div>").unwrap();
        let div = forest[0].as_element().unwrap();
        let span = div.child_elements().next().unwrap();
        assert_eq!(span.tag, "span");
        assert_eq!(span.child_elements().next().unwrap().tag, "div");
    }

    #[test]
    fn test_self_closing_does_not_open() {
        let forest = reduce_str("<div><div/></div>").unwrap();
        assert_eq!(
            forest,
            vec![Node::Element(Element::new("div").with_children(vec![
                Element::self_closing("div").into()
            ]))]
        );
    }

    #[test]
    fn test_unclosed_reports_outermost_frame() {
        let err = reduce_str("<div><span>").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unclosed {
                tag: "div".to_owned(),
                offset: 0,
            }
        );
    }

    #[test]
    fn test_close_skipping_frames_reports_first_skipped() {
        let err = reduce_str("<div><span><p></div>").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unclosed {
                tag: "span".to_owned(),
                offset: 5,
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        let items = items("<div><p><span></span></p></div>");
        assert!(reduce(&items, true, Some(3)).is_ok());
        assert_eq!(
            reduce(&items, true, Some(2)).unwrap_err(),
            ParseError::TooDeep {
                tag: "span".to_owned(),
                offset: 8,
                limit: 2,
            }
        );
    }

    #[test]
    fn test_depth_limit_ignores_self_closing_leaves() {
        let items = items("<div><span/></div>");
        assert!(reduce(&items, true, Some(1)).is_ok());
    }

    #[test]
    fn test_deep_nesting_is_iterative() {
        let depth = 100_000;
        let input = format!("{}x{}", "<p>".repeat(depth), "</p>".repeat(depth));
        let forest = reduce_str(&input).unwrap();

        let mut current = forest[0].as_element().unwrap();
        let mut levels = 1;
        while let Some(child) = current.child_elements().next() {
            current = child;
            levels += 1;
        }
        assert_eq!(levels, depth);
        assert_eq!(current.text.as_deref(), Some("x"));
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(
            reduce_str("<p></p>").unwrap(),
            vec![Node::Element(Element::new("p"))]
        );
    }

    #[test]
    fn test_hoisted_text_only_first_fragment() {
        let forest = reduce_str("<p>a<span/>b</p>").unwrap();
        assert_eq!(
            forest,
            vec![Node::Element(
                Element::new("p")
                    .with_text("a")
                    .with_children(vec![
                        Element::self_closing("span").into(),
                        Node::Text("b".to_owned()),
                    ])
            )]
        );
    }

    #[test]
    fn test_text_after_child_is_not_hoisted() {
        let forest = reduce_str("<p><span></span>tail</p>").unwrap();
        let p = forest[0].as_element().unwrap();
        assert_eq!(p.text, None);
        assert_eq!(p.children.len(), 2);
        assert_eq!(p.children[1].as_text(), Some("tail"));
    }

    #[test]
    fn test_stray_top_level_text() {
        let forest = reduce_str("before<p>in</p>after").unwrap();
        assert_eq!(forest.len(), 3);
        assert_eq!(forest[0].as_text(), Some("before"));
        assert_eq!(forest[2].as_text(), Some("after"));
    }

    #[test]
    fn test_unclosed() {
        assert_eq!(
            reduce_str("x<div>").unwrap_err(),
            ParseError::Unclosed {
                tag: "div".to_owned(),
                offset: 1,
            }
        );
    }

    #[test]
    fn test_unclosed_inner_reports_inner_tag() {
        let err = reduce_str("<div><span></div>").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unclosed {
                tag: "span".to_owned(),
                offset: 5,
            }
        );
    }

    #[test]
    fn test_unterminated_start_tag() {
        let err = reduce_str("<div id=x").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnterminatedStartTag {
                tag: "div".to_owned(),
                offset: 0,
            }
        );
    }

    #[test]
    fn test_unexpected_close() {
        let err = reduce_str("<p>a</p></span>").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedClose {
                tag: "span".to_owned(),
                offset: 8,
            }
        );
    }

    #[test]
    fn test_crossed_tags_are_rejected() {
        // `<span>` is closed outside its parent.
        let err = reduce_str("<div><span></div></span>").unwrap_err();
        assert_eq!(err.tag(), "span");
    }
}
