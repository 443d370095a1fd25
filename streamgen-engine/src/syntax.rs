//! Syntax model handed to the expansion pipeline.
//!
//! Front ends (the proc-macro shim, the CLI, tests) lower whatever they parsed
//! into these values. Argument expressions stay opaque token fragments; the
//! only structure the pipeline inspects is the coarse [`Expression`] tag.

use std::fmt;

use proc_macro2::{Delimiter, Ident, Spacing, Span, TokenStream, TokenTree};
use serde::{Deserialize, Serialize};

// ============================================================================
// Annotation
// ============================================================================

/// One occurrence of the annotation as written at the use site.
#[derive(Debug, Clone)]
pub struct AnnotationInvocation {
    pub name: String,
    /// `None` when the annotation has no argument list at all.
    pub arguments: Option<Vec<ArgumentNode>>,
    pub span: Span,
}

impl AnnotationInvocation {
    pub fn new(name: impl Into<String>, arguments: Option<Vec<ArgumentNode>>, span: Span) -> Self {
        Self {
            name: name.into(),
            arguments,
            span,
        }
    }

    /// Build an invocation from the raw tokens between the annotation's
    /// delimiters.
    pub fn from_tokens(name: impl Into<String>, tokens: TokenStream, span: Span) -> Self {
        Self::new(name, Some(crate::parse::parse_arguments(tokens)), span)
    }
}

/// An element of the annotation's argument list.
#[derive(Debug, Clone)]
pub enum ArgumentNode {
    Labeled(LabeledArgument),
    /// A fragment that does not read as `[label:] expression`.
    Malformed(TokenStream),
}

impl ArgumentNode {
    pub fn as_labeled(&self) -> Option<&LabeledArgument> {
        match self {
            ArgumentNode::Labeled(argument) => Some(argument),
            ArgumentNode::Malformed(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LabeledArgument {
    pub label: Option<Ident>,
    pub expression: Expression,
    pub span: Span,
}

impl LabeledArgument {
    pub fn label_text(&self) -> Option<String> {
        self.label.as_ref().map(Ident::to_string)
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// Coarse shape of an argument expression. Nothing here is evaluated.
#[derive(Debug, Clone)]
pub enum Expression {
    /// `<base>.<member>`, e.g. `i32.self`.
    MemberAccess { base: TokenStream, member: Ident },
    /// A single string literal without suffix; `value` is the cooked content.
    StringLiteral { value: String, span: Span },
    /// A bare identifier or path.
    Identifier(String),
    Other(TokenStream),
}

impl Expression {
    pub fn classify(tokens: TokenStream) -> Self {
        let trees: Vec<TokenTree> = tokens.clone().into_iter().collect();

        // macro_rules! substitutions arrive wrapped in invisible groups
        if let [TokenTree::Group(group)] = trees.as_slice() {
            if group.delimiter() == Delimiter::None {
                return Self::classify(group.stream());
            }
        }

        if let [TokenTree::Literal(_)] = trees.as_slice() {
            return match syn::parse2::<syn::LitStr>(tokens.clone()) {
                Ok(lit) if lit.suffix().is_empty() => Expression::StringLiteral {
                    value: lit.value(),
                    span: lit.span(),
                },
                _ => Expression::Other(tokens),
            };
        }

        if let Some((base, member)) = split_member_access(&trees) {
            return Expression::MemberAccess { base, member };
        }

        match syn::parse2::<syn::Path>(tokens.clone()) {
            Ok(path) => Expression::Identifier(path_to_string(&path)),
            Err(_) => Expression::Other(tokens),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::MemberAccess { .. } => "member access",
            Expression::StringLiteral { .. } => "string literal",
            Expression::Identifier(_) => "identifier",
            Expression::Other(_) => "expression",
        }
    }
}

fn split_member_access(trees: &[TokenTree]) -> Option<(TokenStream, Ident)> {
    let [base @ .., TokenTree::Punct(dot), TokenTree::Ident(member)] = trees else {
        return None;
    };
    if dot.as_char() != '.' || base.is_empty() {
        return None;
    }
    // `a..b` is a range, not a member access
    if let Some(TokenTree::Punct(previous)) = base.last() {
        if previous.as_char() == '.' && previous.spacing() == Spacing::Joint {
            return None;
        }
    }
    Some((base.iter().cloned().collect(), member.clone()))
}

fn path_to_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

// ============================================================================
// Enclosing declaration
// ============================================================================

/// Kind tag of the declaration an annotation decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Struct,
    Actor,
    TupleStruct,
    Enum,
    Union,
    Trait,
    Function,
    Other,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Actor => "actor",
            DeclarationKind::TupleStruct => "tuple struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Union => "union",
            DeclarationKind::Trait => "trait",
            DeclarationKind::Function => "function",
            DeclarationKind::Other => "other item",
        }
    }

    pub(crate) fn article(&self) -> &'static str {
        match self {
            DeclarationKind::Actor | DeclarationKind::Enum | DeclarationKind::Other => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decorated declaration, as far as the pipeline is allowed to see it.
#[derive(Debug, Clone)]
pub struct EnclosingDeclaration {
    pub kind: DeclarationKind,
    pub name: Option<String>,
    pub span: Span,
}

impl EnclosingDeclaration {
    pub fn new(kind: DeclarationKind, name: Option<String>, span: Span) -> Self {
        Self { kind, name, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_classify_type_self() {
        match Expression::classify(quote! { i32.self }) {
            Expression::MemberAccess { base, member } => {
                assert_eq!(base.to_string(), "i32");
                assert_eq!(member, "self");
            }
            other => panic!("Expected member access, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_generic_type_self() {
        match Expression::classify(quote! { Vec<Option<String>>.self }) {
            Expression::MemberAccess { base, .. } => {
                let ty: syn::Type = syn::parse2(base).unwrap();
                assert!(matches!(ty, syn::Type::Path(_)));
            }
            other => panic!("Expected member access, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_string_literal() {
        match Expression::classify(quote! { "numbers" }) {
            Expression::StringLiteral { value, .. } => assert_eq!(value, "numbers"),
            other => panic!("Expected string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_raw_string_literal_is_cooked() {
        let tokens: TokenStream = "r\"numbers\"".parse().unwrap();
        match Expression::classify(tokens) {
            Expression::StringLiteral { value, .. } => assert_eq!(value, "numbers"),
            other => panic!("Expected string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_concatenation_is_other() {
        assert!(matches!(
            Expression::classify(quote! { "num" + "bers" }),
            Expression::Other(_)
        ));
    }

    #[test]
    fn test_classify_macro_and_byte_string_are_other() {
        assert!(matches!(
            Expression::classify(quote! { concat!("num", "bers") }),
            Expression::Other(_)
        ));
        assert!(matches!(
            Expression::classify(quote! { b"numbers" }),
            Expression::Other(_)
        ));
    }

    #[test]
    fn test_classify_identifier_and_path() {
        match Expression::classify(quote! { element_type }) {
            Expression::Identifier(name) => assert_eq!(name, "element_type"),
            other => panic!("Expected identifier, got {:?}", other),
        }
        match Expression::classify(quote! { std::string::String }) {
            Expression::Identifier(name) => assert_eq!(name, "std::string::String"),
            other => panic!("Expected identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_range_is_not_member_access() {
        assert!(matches!(
            Expression::classify(quote! { a..b }),
            Expression::Other(_)
        ));
    }

    #[test]
    fn test_declaration_kind_serde_names() {
        #[derive(Deserialize)]
        struct Kinds {
            kinds: Vec<DeclarationKind>,
        }

        let parsed: Kinds = toml::from_str(r#"kinds = ["class", "tuple_struct", "actor"]"#).unwrap();
        assert_eq!(
            parsed.kinds,
            vec![
                DeclarationKind::Class,
                DeclarationKind::TupleStruct,
                DeclarationKind::Actor
            ]
        );
    }
}
