//! syn front end.
//!
//! Lowers Rust items and attributes into the engine's syntax model and splices
//! rendered members back into the decorated struct.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned;
use syn::{Fields, Item, ItemStruct, Meta};

use crate::config::ExpandOptions;
use crate::error::{Diagnostic, ExpansionError};
use crate::members::SynthesizedDeclarationSet;
use crate::render::render_members;
use crate::syntax::{AnnotationInvocation, DeclarationKind, EnclosingDeclaration};

/// Build an invocation from the argument tokens a proc-macro attribute gets.
/// An empty token list is treated as a missing argument list.
pub fn invocation_from_args(name: &str, args: TokenStream) -> AnnotationInvocation {
    if args.is_empty() {
        return AnnotationInvocation::new(name, None, Span::call_site());
    }
    let span = args
        .clone()
        .into_iter()
        .next()
        .map(|tree| tree.span())
        .unwrap_or_else(Span::call_site);
    AnnotationInvocation::from_tokens(name, args, span)
}

/// Build an invocation from an attribute found in a parsed source file.
pub fn invocation_from_attribute(attr: &syn::Attribute) -> AnnotationInvocation {
    let name = attr
        .path()
        .segments
        .last()
        .map(|seg| seg.ident.to_string())
        .unwrap_or_default();

    match &attr.meta {
        Meta::List(list) => AnnotationInvocation::from_tokens(name, list.tokens.clone(), attr.span()),
        Meta::Path(_) | Meta::NameValue(_) => AnnotationInvocation::new(name, None, attr.span()),
    }
}

pub fn declaration_from_item(item: &Item) -> EnclosingDeclaration {
    let (kind, ident) = match item {
        Item::Struct(s) => {
            let kind = match s.fields {
                Fields::Named(_) | Fields::Unit => DeclarationKind::Struct,
                Fields::Unnamed(_) => DeclarationKind::TupleStruct,
            };
            (kind, Some(&s.ident))
        }
        Item::Enum(e) => (DeclarationKind::Enum, Some(&e.ident)),
        Item::Union(u) => (DeclarationKind::Union, Some(&u.ident)),
        Item::Trait(t) => (DeclarationKind::Trait, Some(&t.ident)),
        Item::Fn(f) => (DeclarationKind::Function, Some(&f.sig.ident)),
        _ => (DeclarationKind::Other, None),
    };

    let span = ident.map(|i| i.span()).unwrap_or_else(|| item.span());
    EnclosingDeclaration::new(kind, ident.map(|i| i.to_string()), span)
}

/// Run the pipeline for one annotation site and render the result.
///
/// On success the returned tokens replace `item`: the struct with its new
/// storage fields followed by an inherent impl holding the accessor.
pub fn expand_item(
    invocation: &AnnotationInvocation,
    item: &Item,
    options: &ExpandOptions,
) -> Result<TokenStream, Diagnostic> {
    let declaration = declaration_from_item(item);
    let set = crate::expand(invocation, &declaration, &options.policy)?;
    render_item(invocation, item, &set, options)
}

/// Splice an already synthesized set into `item`.
pub fn render_item(
    invocation: &AnnotationInvocation,
    item: &Item,
    set: &SynthesizedDeclarationSet,
    options: &ExpandOptions,
) -> Result<TokenStream, Diagnostic> {
    match item {
        Item::Struct(item_struct) => {
            apply_to_struct(item_struct, set, &options.runtime_path, invocation.span)
        }
        _ => Err(cannot_host(declaration_from_item(item).kind, invocation.span)),
    }
}

fn cannot_host(kind: DeclarationKind, span: Span) -> Diagnostic {
    Diagnostic::new(
        ExpansionError::InvalidAttachmentKind {
            found: kind,
            permitted: "a struct with named fields".to_string(),
        },
        span,
    )
}

fn apply_to_struct(
    item: &ItemStruct,
    set: &SynthesizedDeclarationSet,
    runtime: &syn::Path,
    span: Span,
) -> Result<TokenStream, Diagnostic> {
    let existing: Vec<&syn::Field> = match &item.fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => return Err(cannot_host(DeclarationKind::TupleStruct, span)),
    };

    let members = render_members(set, runtime);
    let fields = &members.fields;
    let methods = &members.methods;

    let ItemStruct {
        attrs,
        vis,
        ident,
        generics,
        ..
    } = item;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #(#attrs)*
        #vis struct #ident #generics #where_clause {
            #(#existing,)*
            #fields
        }

        impl #impl_generics #ident #ty_generics #where_clause {
            #methods
        }
    })
}
