//! Diagnostics produced by the expansion pipeline.
//!
//! Every failure is reported as exactly one [`Diagnostic`]; nothing in the
//! pipeline panics or aborts on malformed input.

use proc_macro2::{Span, TokenStream};
use serde::Serialize;
use thiserror::Error;

use crate::syntax::DeclarationKind;

/// Closed set of diagnostic kinds, one per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    InvalidAttachmentKind,
    WrongArgumentCount,
    InvalidTypeArgument,
    InvalidNameArgument,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidAttachmentKind => "InvalidAttachmentKind",
            DiagnosticKind::WrongArgumentCount => "WrongArgumentCount",
            DiagnosticKind::InvalidTypeArgument => "InvalidTypeArgument",
            DiagnosticKind::InvalidNameArgument => "InvalidNameArgument",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("#[create_async_stream] must be applied to {permitted}, found {found}")]
    InvalidAttachmentKind {
        found: DeclarationKind,
        permitted: String,
    },

    #[error("#[create_async_stream] requires two arguments, not {0}")]
    WrongArgumentCount(usize),

    #[error("#[create_async_stream]'s first argument must be a type with label `of:`, e.g. `of: i32.self` ({0})")]
    InvalidTypeArgument(TypeArgumentProblem),

    #[error("#[create_async_stream]'s second argument must be a string literal with label `named:`, e.g. `named: \"numbers\"` ({0})")]
    InvalidNameArgument(NameArgumentProblem),
}

impl ExpansionError {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            ExpansionError::InvalidAttachmentKind { .. } => DiagnosticKind::InvalidAttachmentKind,
            ExpansionError::WrongArgumentCount(_) => DiagnosticKind::WrongArgumentCount,
            ExpansionError::InvalidTypeArgument(_) => DiagnosticKind::InvalidTypeArgument,
            ExpansionError::InvalidNameArgument(_) => DiagnosticKind::InvalidNameArgument,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeArgumentProblem {
    #[error("the argument has no label")]
    MissingLabel,
    #[error("found label `{0}:`")]
    WrongLabel(String),
    #[error("expected `<Type>.self`, found {0}")]
    NotTypeSelf(&'static str),
    #[error("`{0}` is not a type")]
    NotAType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameArgumentProblem {
    #[error("the argument has no label")]
    MissingLabel,
    #[error("found label `{0}:`")]
    WrongLabel(String),
    #[error("expected a plain string literal, found {0}")]
    NotStringLiteral(&'static str),
    #[error("the name is empty")]
    Empty,
    #[error("`{0}` is not a valid identifier")]
    NotIdentifier(String),
}

/// A pipeline failure together with the source position it is reported at.
#[derive(Debug, Clone, Error)]
#[error("{error}")]
pub struct Diagnostic {
    error: ExpansionError,
    span: Span,
}

impl Diagnostic {
    pub fn new(error: ExpansionError, span: Span) -> Self {
        Self { error, span }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.error.kind()
    }

    pub fn error(&self) -> &ExpansionError {
        &self.error
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn to_syn_error(&self) -> syn::Error {
        syn::Error::new(self.span, self.message())
    }

    pub fn to_compile_error(&self) -> TokenStream {
        self.to_syn_error().to_compile_error()
    }
}
