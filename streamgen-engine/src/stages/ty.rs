use crate::error::{ExpansionError, TypeArgumentProblem};
use crate::members::ElementTypeReference;
use crate::syntax::{Expression, LabeledArgument};
use crate::TYPE_LABEL;

/// Resolve `of: <Type>.self` to the `<Type>` fragment.
pub fn resolve_type(argument: &LabeledArgument) -> Result<ElementTypeReference, ExpansionError> {
    let invalid = ExpansionError::InvalidTypeArgument;

    match argument.label_text() {
        Some(label) if label == TYPE_LABEL => {}
        Some(label) => return Err(invalid(TypeArgumentProblem::WrongLabel(label))),
        None => return Err(invalid(TypeArgumentProblem::MissingLabel)),
    }

    let base = match &argument.expression {
        Expression::MemberAccess { base, member } if member == "self" => base,
        Expression::MemberAccess { .. } => {
            return Err(invalid(TypeArgumentProblem::NotTypeSelf(
                "a member access that does not end in `.self`",
            )))
        }
        other => return Err(invalid(TypeArgumentProblem::NotTypeSelf(other.kind_name()))),
    };

    if syn::parse2::<syn::Type>(base.clone()).is_err() {
        return Err(invalid(TypeArgumentProblem::NotAType(base.to_string())));
    }

    Ok(ElementTypeReference::new(base.clone()))
}
