//! Static table of the annotations this engine expands.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Item;

use crate::config::ExpandOptions;
use crate::error::Diagnostic;
use crate::frontend;
use crate::syntax::AnnotationInvocation;
use crate::ANNOTATION_NAME;

pub type ExpandFn =
    fn(&AnnotationInvocation, &Item, &ExpandOptions) -> Result<TokenStream, Diagnostic>;

pub struct MacroRegistration {
    pub name: &'static str,
    pub summary: &'static str,
    pub expand: ExpandFn,
}

impl std::fmt::Debug for MacroRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistration")
            .field("name", &self.name)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

pub static CREATE_ASYNC_STREAM: MacroRegistration = MacroRegistration {
    name: ANNOTATION_NAME,
    summary: "adds a public stream accessor and its private producer/consumer storage",
    expand: frontend::expand_item,
};

pub static REGISTRY: &[&MacroRegistration] = &[&CREATE_ASYNC_STREAM];

pub fn lookup(name: &str) -> Option<&'static MacroRegistration> {
    REGISTRY.iter().copied().find(|entry| entry.name == name)
}

/// Registration whose name matches the last path segment of `attr`.
pub fn lookup_attribute(attr: &syn::Attribute) -> Option<&'static MacroRegistration> {
    let segment = attr.path().segments.last()?;
    lookup(&segment.ident.to_string())
}

impl MacroRegistration {
    /// Proc-macro entry: raw attribute arguments and item in, item tokens out.
    ///
    /// A diagnostic leaves the item untouched and appends a `compile_error!`.
    pub fn expand_attribute(
        &self,
        args: TokenStream,
        item: TokenStream,
        options: &ExpandOptions,
    ) -> TokenStream {
        let item: Item = match syn::parse2(item) {
            Ok(item) => item,
            Err(e) => return e.to_compile_error(),
        };
        let invocation = frontend::invocation_from_args(self.name, args);

        match (self.expand)(&invocation, &item, options) {
            Ok(tokens) => tokens,
            Err(diagnostic) => {
                let error = diagnostic.to_compile_error();
                quote! {
                    #item
                    #error
                }
            }
        }
    }
}
