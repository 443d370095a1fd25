use proc_macro2::{Span, TokenStream};
use quote::quote;
use streamgen_engine::{
    expand, AnnotationInvocation, DeclarationKind, Diagnostic, DiagnosticKind,
    EnclosingDeclaration, ExpansionError, ExpansionPolicy, SynthesizedDeclarationSet,
    ANNOTATION_NAME,
};

fn invocation(tokens: TokenStream) -> AnnotationInvocation {
    AnnotationInvocation::from_tokens(ANNOTATION_NAME, tokens, Span::call_site())
}

fn run(kind: DeclarationKind, tokens: TokenStream) -> Result<SynthesizedDeclarationSet, Diagnostic> {
    let declaration = EnclosingDeclaration::new(kind, Some("MyClass".into()), Span::call_site());
    expand(&invocation(tokens), &declaration, &ExpansionPolicy::canonical())
}

#[test]
fn scenario_a_int_numbers() {
    let set = run(DeclarationKind::Class, quote! { of: Int.self, named: "numbers" })
        .expect("should expand");

    assert_eq!(set.accessor().name().as_str(), "numbers");
    assert_eq!(set.accessor().element_type().as_str(), "Int");
    assert_eq!(set.storage().consumer(), "_numbers");
    assert_eq!(set.storage().producer(), "numbersContinuation");
    assert_eq!(set.storage().element_type().as_str(), "Int");
}

#[test]
fn scenario_b_non_permitted_declaration() {
    let error = run(DeclarationKind::Enum, quote! { of: Int.self, named: "numbers" })
        .expect_err("enum should be rejected");

    assert_eq!(error.kind(), DiagnosticKind::InvalidAttachmentKind);
    assert_eq!(
        error.message(),
        "#[create_async_stream] must be applied to a class, struct, or actor, found enum"
    );
}

#[test]
fn scenario_c_concatenated_name() {
    let error = run(DeclarationKind::Struct, quote! { of: Int.self, named: "num" + "bers" })
        .expect_err("concatenation should be rejected");

    assert_eq!(error.kind(), DiagnosticKind::InvalidNameArgument);
}

#[test]
fn scenario_d_variable_type() {
    let error = run(DeclarationKind::Struct, quote! { of: someType, named: "numbers" })
        .expect_err("plain variable should be rejected");

    assert_eq!(error.kind(), DiagnosticKind::InvalidTypeArgument);
}

#[test]
fn scenario_e_single_argument() {
    let error = run(DeclarationKind::Actor, quote! { of: Int.self })
        .expect_err("one argument should be rejected");

    assert_eq!(error.error(), &ExpansionError::WrongArgumentCount(1));
}

#[test]
fn backing_field_matches_storage_consumer_for_many_names() {
    for name in ["a", "numbers", "priceUpdates", "_private", "Ünïcode"] {
        let tokens = quote! { of: Vec<u8>.self, named: #name };
        let set = run(DeclarationKind::Struct, tokens).expect("should expand");

        assert_eq!(set.accessor().backing_field(), format!("_{}", name));
        assert_eq!(set.accessor().backing_field(), set.storage().consumer());
        assert_eq!(set.storage().producer(), format!("{}Continuation", name));
    }
}

#[test]
fn wrong_count_carries_observed_count() {
    let cases = [
        (quote! {}, 0),
        (quote! { of: Int.self }, 1),
        (quote! { of: Int.self, named: "a", extra: "b" }, 3),
        (quote! { a: 1, b: 2, c: 3, d: 4 }, 4),
    ];

    for (tokens, expected) in cases {
        let error = run(DeclarationKind::Struct, tokens).expect_err("count should be rejected");
        assert_eq!(error.error(), &ExpansionError::WrongArgumentCount(expected));
    }
}

#[test]
fn non_permitted_kind_wins_over_argument_errors() {
    let inputs = [
        quote! { of: Int.self, named: "numbers" },
        quote! {},
        quote! { of: x, named: y },
    ];

    for kind in [
        DeclarationKind::Enum,
        DeclarationKind::Trait,
        DeclarationKind::Function,
        DeclarationKind::Other,
    ] {
        for tokens in inputs.clone() {
            let error = run(kind, tokens).expect_err("kind should be rejected");
            assert_eq!(error.kind(), DiagnosticKind::InvalidAttachmentKind);
        }
    }
}

#[test]
fn restrictive_policy_only_accepts_classes() {
    let tokens = quote! { of: Int.self, named: "numbers" };
    let policy = ExpansionPolicy::class_only();

    let class = EnclosingDeclaration::new(DeclarationKind::Class, None, Span::call_site());
    assert!(expand(&invocation(tokens.clone()), &class, &policy).is_ok());

    let value = EnclosingDeclaration::new(DeclarationKind::Struct, None, Span::call_site());
    let error = expand(&invocation(tokens), &value, &policy).expect_err("struct is not a class");
    assert_eq!(error.kind(), DiagnosticKind::InvalidAttachmentKind);
}

#[test]
fn expansion_is_idempotent() {
    let tokens = quote! { of: HashMap<String, Vec<u8>>.self, named: "index" };
    let first = run(DeclarationKind::Struct, tokens.clone()).unwrap();
    let second = run(DeclarationKind::Struct, tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn comparison_in_type_argument_is_a_type_error() {
    let error = run(DeclarationKind::Struct, quote! { of: a < b, named: "numbers" })
        .expect_err("comparison should be rejected");
    assert_eq!(error.kind(), DiagnosticKind::InvalidTypeArgument);

    let error = run(
        DeclarationKind::Struct,
        quote! { of: Int.self, named: "numbers", extra: a < b, more: 1 },
    )
    .expect_err("four arguments should be rejected");
    assert_eq!(error.error(), &ExpansionError::WrongArgumentCount(4));
}
