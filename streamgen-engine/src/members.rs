//! Resolved argument values and the declaration set synthesized from them.

use std::fmt;

use proc_macro2::TokenStream;

use crate::error::NameArgumentProblem;

/// The element type taken from `of: <Type>.self`, kept as the original tokens
/// so it is re-emitted verbatim.
#[derive(Debug, Clone)]
pub struct ElementTypeReference {
    tokens: TokenStream,
    text: String,
}

impl ElementTypeReference {
    pub(crate) fn new(tokens: TokenStream) -> Self {
        let text = tokens.to_string();
        Self { tokens, text }
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for ElementTypeReference {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for ElementTypeReference {}

impl fmt::Display for ElementTypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A member name known to be a usable, non-keyword identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(value: &str) -> Result<Self, NameArgumentProblem> {
        if value.is_empty() {
            return Err(NameArgumentProblem::Empty);
        }
        if value.starts_with("r#") {
            return Err(NameArgumentProblem::NotIdentifier(value.to_string()));
        }
        match syn::parse_str::<syn::Ident>(value) {
            Ok(ident) if ident == value => Ok(Self(value.to_string())),
            _ => Err(NameArgumentProblem::NotIdentifier(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `_` + name: the consumable side, also read by the accessor.
    pub fn backing_field(&self) -> String {
        format!("_{}", self.0)
    }

    /// name + `Continuation`: the producer side.
    pub fn continuation(&self) -> String {
        format!("{}Continuation", self.0)
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public read-only accessor returning the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDeclaration {
    name: MemberName,
    element_type: ElementTypeReference,
    backing_field: String,
}

impl AccessorDeclaration {
    pub fn name(&self) -> &MemberName {
        &self.name
    }

    pub fn element_type(&self) -> &ElementTypeReference {
        &self.element_type
    }

    pub fn backing_field(&self) -> &str {
        &self.backing_field
    }
}

/// Private pair binding holding both halves of a freshly made stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDeclaration {
    consumer: String,
    producer: String,
    element_type: ElementTypeReference,
}

impl StorageDeclaration {
    pub fn consumer(&self) -> &str {
        &self.consumer
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn element_type(&self) -> &ElementTypeReference {
        &self.element_type
    }
}

/// Accessor and storage, always produced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedDeclarationSet {
    accessor: AccessorDeclaration,
    storage: StorageDeclaration,
}

impl SynthesizedDeclarationSet {
    pub(crate) fn new(name: MemberName, element_type: ElementTypeReference) -> Self {
        let backing_field = name.backing_field();
        let storage = StorageDeclaration {
            consumer: backing_field.clone(),
            producer: name.continuation(),
            element_type: element_type.clone(),
        };
        let accessor = AccessorDeclaration {
            name,
            element_type,
            backing_field,
        };
        Self { accessor, storage }
    }

    pub fn accessor(&self) -> &AccessorDeclaration {
        &self.accessor
    }

    pub fn storage(&self) -> &StorageDeclaration {
        &self.storage
    }
}
