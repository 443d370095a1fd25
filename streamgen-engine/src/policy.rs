//! Which declaration kinds the annotation may be attached to.

use crate::syntax::DeclarationKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionPolicy {
    permitted: Vec<DeclarationKind>,
}

impl ExpansionPolicy {
    /// Duplicates are dropped, first occurrence wins the position.
    pub fn new(permitted: impl IntoIterator<Item = DeclarationKind>) -> Self {
        let mut kinds = Vec::new();
        for kind in permitted {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Self { permitted: kinds }
    }

    /// Class, struct, or actor.
    pub fn canonical() -> Self {
        Self::new([
            DeclarationKind::Class,
            DeclarationKind::Struct,
            DeclarationKind::Actor,
        ])
    }

    pub fn class_only() -> Self {
        Self::new([DeclarationKind::Class])
    }

    pub fn permits(&self, kind: DeclarationKind) -> bool {
        self.permitted.contains(&kind)
    }

    pub fn permitted(&self) -> &[DeclarationKind] {
        &self.permitted
    }

    /// Human readable list used in diagnostics, e.g. "a class, struct, or actor".
    pub fn describe(&self) -> String {
        let names: Vec<&str> = self.permitted.iter().map(DeclarationKind::as_str).collect();
        let article = self.permitted.first().map(DeclarationKind::article).unwrap_or("a");

        let list = match names.as_slice() {
            [] => return "nothing".to_string(),
            [only] => only.to_string(),
            [first, second] => format!("{} or {}", first, second),
            [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
        };
        format!("{} {}", article, list)
    }
}

impl Default for ExpansionPolicy {
    fn default() -> Self {
        Self::canonical()
    }
}
