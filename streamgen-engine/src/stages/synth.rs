use crate::members::{ElementTypeReference, MemberName, SynthesizedDeclarationSet};

/// Combine the resolved name and element type into the accessor / storage
/// pair. Total: both inputs are already validated.
pub fn synthesize(name: MemberName, element_type: ElementTypeReference) -> SynthesizedDeclarationSet {
    SynthesizedDeclarationSet::new(name, element_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_accessor_reads_the_storage_consumer() {
        let set = synthesize(
            MemberName::parse("numbers").unwrap(),
            ElementTypeReference::new(quote! { i32 }),
        );

        assert_eq!(set.accessor().name().as_str(), "numbers");
        assert_eq!(set.accessor().backing_field(), "_numbers");
        assert_eq!(set.storage().consumer(), set.accessor().backing_field());
        assert_eq!(set.storage().producer(), "numbersContinuation");
        assert_eq!(set.storage().element_type().as_str(), "i32");
        assert_eq!(set.accessor().element_type(), set.storage().element_type());
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let make = || {
            synthesize(
                MemberName::parse("events").unwrap(),
                ElementTypeReference::new(quote! { Vec<String> }),
            )
        };
        assert_eq!(make(), make());
    }
}
