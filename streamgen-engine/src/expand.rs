//! Pipeline driver.
//!
//! `Start -> ContextChecked -> ArgumentsExtracted -> TypeResolved ->
//! NameResolved -> Synthesized`, with any stage able to stop at a
//! [`Diagnostic`]. Nothing is retried and nothing partial is returned.

use proc_macro2::Span;
use tracing::debug;

use crate::error::{Diagnostic, ExpansionError};
use crate::members::SynthesizedDeclarationSet;
use crate::policy::ExpansionPolicy;
use crate::stages;
use crate::syntax::{AnnotationInvocation, EnclosingDeclaration};

pub fn expand(
    invocation: &AnnotationInvocation,
    declaration: &EnclosingDeclaration,
    policy: &ExpansionPolicy,
) -> Result<SynthesizedDeclarationSet, Diagnostic> {
    let _span = tracing::debug_span!(
        "expand",
        annotation = %invocation.name,
        declaration = declaration.name.as_deref().unwrap_or("<anonymous>"),
    )
    .entered();

    stages::validate_context(declaration, policy).map_err(|e| reject(e, invocation.span))?;
    debug!(kind = %declaration.kind, "context checked");

    let [type_argument, name_argument] =
        stages::extract_arguments(invocation).map_err(|e| reject(e, invocation.span))?;

    let element_type =
        stages::resolve_type(type_argument).map_err(|e| reject(e, type_argument.span))?;
    debug!(element_type = %element_type, "type resolved");

    let name = stages::resolve_name(name_argument).map_err(|e| reject(e, name_argument.span))?;
    debug!(name = %name, "name resolved");

    Ok(stages::synthesize(name, element_type))
}

fn reject(error: ExpansionError, span: Span) -> Diagnostic {
    debug!(kind = error.kind().as_str(), %error, "expansion rejected");
    Diagnostic::new(error, span)
}
