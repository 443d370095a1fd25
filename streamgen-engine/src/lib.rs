//! # streamgen-engine
//!
//! Expansion engine behind the `#[create_async_stream]` attribute.
//!
//! Given one annotation occurrence and the declaration it decorates, the
//! engine either synthesizes two members, a public stream accessor and a
//! private producer/consumer storage pair, or reports exactly one diagnostic.
//!
//! ```rust,ignore
//! #[create_async_stream(of: i32.self, named: "numbers")]
//! pub struct Counter {}
//!
//! // expands to
//! pub struct Counter {
//!     _numbers: ::streamgen::AsyncStream<i32>,
//!     numbersContinuation: ::streamgen::Continuation<i32>,
//! }
//!
//! impl Counter {
//!     pub fn numbers(&self) -> &::streamgen::AsyncStream<i32> { &self._numbers }
//!     fn make_numbers_stream() -> (::streamgen::AsyncStream<i32>, ::streamgen::Continuation<i32>) {
//!         ::streamgen::AsyncStream::<i32>::make_stream()
//!     }
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`stages::validate_context`] - the decorated item is a permitted kind
//! 2. [`stages::extract_arguments`] - exactly two arguments
//! 3. [`stages::resolve_type`] - `of: <Type>.self`
//! 4. [`stages::resolve_name`] - `named: "<identifier>"`
//! 5. [`stages::synthesize`] - accessor + storage
//!
//! The pipeline itself ([`expand`]) works on the neutral model in [`syntax`];
//! [`frontend`] lowers syn items into it and [`render`] turns the result back
//! into Rust tokens.

pub mod config;
pub mod error;
pub mod frontend;
pub mod members;
pub mod parse;
pub mod policy;
pub mod registry;
pub mod render;
pub mod stages;
pub mod syntax;

mod expand;

pub use config::{ConfigError, ExpandOptions, StreamgenConfig};
pub use error::{Diagnostic, DiagnosticKind, ExpansionError, NameArgumentProblem, TypeArgumentProblem};
pub use expand::expand;
pub use members::{ElementTypeReference, MemberName, SynthesizedDeclarationSet};
pub use policy::ExpansionPolicy;
pub use syntax::{AnnotationInvocation, DeclarationKind, EnclosingDeclaration, Expression};

pub const ANNOTATION_NAME: &str = "create_async_stream";

/// Label of the element type argument.
pub const TYPE_LABEL: &str = "of";

/// Label of the member name argument.
pub const NAME_LABEL: &str = "named";
