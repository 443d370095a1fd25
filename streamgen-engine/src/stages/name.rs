use crate::error::{ExpansionError, NameArgumentProblem};
use crate::members::MemberName;
use crate::syntax::{Expression, LabeledArgument};
use crate::NAME_LABEL;

/// Resolve `named: "<name>"` to a validated member name.
pub fn resolve_name(argument: &LabeledArgument) -> Result<MemberName, ExpansionError> {
    let invalid = ExpansionError::InvalidNameArgument;

    match argument.label_text() {
        Some(label) if label == NAME_LABEL => {}
        Some(label) => return Err(invalid(NameArgumentProblem::WrongLabel(label))),
        None => return Err(invalid(NameArgumentProblem::MissingLabel)),
    }

    let Expression::StringLiteral { value, .. } = &argument.expression else {
        return Err(invalid(NameArgumentProblem::NotStringLiteral(
            argument.expression.kind_name(),
        )));
    };

    MemberName::parse(value).map_err(invalid)
}
