//! Annotation site discovery in parsed source files.

use anyhow::{Context, Result};
use proc_macro2::{Span, TokenStream};
use serde::Serialize;
use std::fs;
use std::path::Path;
use syn::{Attribute, Item};

use streamgen_engine::frontend::{declaration_from_item, invocation_from_attribute, render_item};
use streamgen_engine::registry::{lookup_attribute, MacroRegistration};
use streamgen_engine::{Diagnostic, ExpandOptions};

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn of(span: Span) -> Self {
        let start = span.start();
        Self {
            line: start.line,
            column: start.column + 1,
        }
    }
}

/// One registered attribute on one item.
pub struct AnnotationSite {
    pub registration: &'static MacroRegistration,
    pub attr: Attribute,
    /// The decorated item without `attr`, as the proc-macro would receive it.
    pub item: Item,
    pub location: Location,
}

impl AnnotationSite {
    pub fn declaration_name(&self) -> Option<String> {
        declaration_from_item(&self.item).name
    }

    pub fn run(&self, options: &ExpandOptions) -> SiteOutcome {
        let invocation = invocation_from_attribute(&self.attr);
        let declaration = declaration_from_item(&self.item);

        let expanded = streamgen_engine::expand(&invocation, &declaration, &options.policy)
            .and_then(|set| {
                render_item(&invocation, &self.item, &set, options).map(|tokens| (set, tokens))
            });

        match expanded {
            Ok((set, tokens)) => SiteOutcome::Expanded {
                member: set.accessor().name().to_string(),
                element_type: set.accessor().element_type().to_string(),
                tokens,
            },
            Err(diagnostic) => SiteOutcome::Failed(diagnostic),
        }
    }
}

pub enum SiteOutcome {
    Expanded {
        member: String,
        element_type: String,
        tokens: TokenStream,
    },
    Failed(Diagnostic),
}

pub fn parse_source(path: &Path) -> Result<syn::File> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    syn::parse_file(&contents)
        .with_context(|| format!("Failed to parse source file: {}", path.display()))
}

/// Every registered annotation in `file`, including inside inline modules.
pub fn find_sites(file: &syn::File) -> Vec<AnnotationSite> {
    let mut sites = Vec::new();
    collect(&file.items, &mut sites);
    sites
}

fn collect(items: &[Item], sites: &mut Vec<AnnotationSite>) {
    for item in items {
        for (index, attr) in item_attrs(item).iter().enumerate() {
            let Some(registration) = lookup_attribute(attr) else {
                continue;
            };

            let mut stripped = item.clone();
            if let Some(attrs) = item_attrs_mut(&mut stripped) {
                attrs.remove(index);
            }

            sites.push(AnnotationSite {
                registration,
                attr: attr.clone(),
                item: stripped,
                location: Location::of(attr.pound_token.spans[0]),
            });
        }

        if let Item::Mod(module) = item {
            if let Some((_, nested)) = &module.content {
                collect(nested, sites);
            }
        }
    }
}

fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Const(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::ExternCrate(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::ForeignMod(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Macro(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::TraitAlias(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Use(i) => &i.attrs,
        _ => &[],
    }
}

fn item_attrs_mut(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Const(i) => Some(&mut i.attrs),
        Item::Enum(i) => Some(&mut i.attrs),
        Item::ExternCrate(i) => Some(&mut i.attrs),
        Item::Fn(i) => Some(&mut i.attrs),
        Item::ForeignMod(i) => Some(&mut i.attrs),
        Item::Impl(i) => Some(&mut i.attrs),
        Item::Macro(i) => Some(&mut i.attrs),
        Item::Mod(i) => Some(&mut i.attrs),
        Item::Static(i) => Some(&mut i.attrs),
        Item::Struct(i) => Some(&mut i.attrs),
        Item::Trait(i) => Some(&mut i.attrs),
        Item::TraitAlias(i) => Some(&mut i.attrs),
        Item::Type(i) => Some(&mut i.attrs),
        Item::Union(i) => Some(&mut i.attrs),
        Item::Use(i) => Some(&mut i.attrs),
        _ => None,
    }
}
