//! Rust rendering of a synthesized declaration set.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::members::SynthesizedDeclarationSet;

/// Tokens ready to be spliced into a struct body and an inherent impl.
#[derive(Debug, Clone)]
pub struct RenderedMembers {
    pub fields: TokenStream,
    pub methods: TokenStream,
}

/// Name of the associated function that makes the storage pair.
pub fn initializer_name(set: &SynthesizedDeclarationSet) -> String {
    format!("make_{}_stream", set.accessor().name())
}

pub fn render_members(set: &SynthesizedDeclarationSet, runtime: &syn::Path) -> RenderedMembers {
    let accessor = set.accessor();
    let storage = set.storage();

    let name = format_ident!("{}", accessor.name().as_str());
    let backing_field = format_ident!("{}", accessor.backing_field());
    let consumer = format_ident!("{}", storage.consumer());
    let producer = format_ident!("{}", storage.producer());
    let initializer = format_ident!("{}", initializer_name(set));

    let element = storage.element_type().tokens();
    let stream_ty = quote! { #runtime::AsyncStream<#element> };
    let continuation_ty = quote! { #runtime::Continuation<#element> };

    let fields = quote! {
        #consumer: #stream_ty,
        #[allow(non_snake_case, dead_code)]
        #producer: #continuation_ty,
    };

    let methods = quote! {
        pub fn #name(&self) -> &#stream_ty {
            &self.#backing_field
        }

        #[allow(non_snake_case, dead_code)]
        fn #initializer() -> (#stream_ty, #continuation_ty) {
            #runtime::AsyncStream::<#element>::make_stream()
        }
    };

    RenderedMembers { fields, methods }
}
