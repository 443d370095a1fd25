//! Argument grammar of the annotation.
//!
//! The argument list is a comma separated sequence of `label: expression`
//! elements. Parsing never fails: empty elements vanish, and elements that
//! cannot be read as a labeled argument become [`ArgumentNode::Malformed`],
//! which is not counted as an argument.

use proc_macro2::{Spacing, Span, TokenStream, TokenTree};

use crate::syntax::{ArgumentNode, Expression, LabeledArgument};

pub fn parse_arguments(tokens: TokenStream) -> Vec<ArgumentNode> {
    split_top_level(tokens)
        .into_iter()
        .filter(|element| !element.is_empty())
        .map(parse_element)
        .collect()
}

/// Split on commas that are not nested in a group or a generic argument list.
///
/// A `<` that is never closed was a comparison, not a generic list; the
/// stream is then split again on every top-level comma.
fn split_top_level(tokens: TokenStream) -> Vec<Vec<TokenTree>> {
    let trees: Vec<TokenTree> = tokens.into_iter().collect();
    match split(&trees, true) {
        Some(elements) => elements,
        None => split(&trees, false).unwrap_or_default(),
    }
}

/// Returns `None` when angle tracking is on and a `<` is left open.
fn split(trees: &[TokenTree], track_angles: bool) -> Option<Vec<Vec<TokenTree>>> {
    let mut elements = vec![Vec::new()];
    let mut angle_depth = 0usize;

    for (index, tree) in trees.iter().enumerate() {
        if let TokenTree::Punct(punct) = tree {
            let previous = index.checked_sub(1).and_then(|i| joint_char(&trees[i]));
            let next = trees.get(index + 1).and_then(punct_char);
            let joined_with_eq = punct.spacing() == Spacing::Joint && next == Some('=');

            match punct.as_char() {
                ',' if angle_depth == 0 => {
                    elements.push(Vec::new());
                    continue;
                }
                '<' if track_angles && !joined_with_eq => angle_depth += 1,
                '>' if track_angles
                    && !joined_with_eq
                    && !matches!(previous, Some('-') | Some('=')) =>
                {
                    angle_depth = angle_depth.saturating_sub(1);
                }
                _ => {}
            }
        }

        if let Some(current) = elements.last_mut() {
            current.push(tree.clone());
        }
    }

    (angle_depth == 0).then_some(elements)
}

fn punct_char(tree: &TokenTree) -> Option<char> {
    match tree {
        TokenTree::Punct(punct) => Some(punct.as_char()),
        _ => None,
    }
}

fn joint_char(tree: &TokenTree) -> Option<char> {
    match tree {
        TokenTree::Punct(punct) if punct.spacing() == Spacing::Joint => Some(punct.as_char()),
        _ => None,
    }
}

fn is_label_colon(tree: &TokenTree) -> bool {
    matches!(tree, TokenTree::Punct(p) if p.as_char() == ':' && p.spacing() == Spacing::Alone)
}

fn parse_element(trees: Vec<TokenTree>) -> ArgumentNode {
    let span = trees
        .first()
        .map(TokenTree::span)
        .unwrap_or_else(Span::call_site);

    match trees.as_slice() {
        [TokenTree::Ident(label), colon, rest @ ..] if is_label_colon(colon) => {
            if rest.is_empty() {
                return ArgumentNode::Malformed(trees.iter().cloned().collect());
            }
            ArgumentNode::Labeled(LabeledArgument {
                label: Some(label.clone()),
                expression: Expression::classify(rest.iter().cloned().collect()),
                span,
            })
        }
        [TokenTree::Punct(p), ..] if p.as_char() == ':' => {
            ArgumentNode::Malformed(trees.iter().cloned().collect())
        }
        _ => ArgumentNode::Labeled(LabeledArgument {
            label: None,
            expression: Expression::classify(trees.iter().cloned().collect()),
            span,
        }),
    }
}
