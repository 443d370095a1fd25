use crate::error::ExpansionError;
use crate::syntax::{AnnotationInvocation, ArgumentNode, LabeledArgument};

/// Returns the two arguments positionally: `[type candidate, name candidate]`.
///
/// Malformed elements are dropped before counting. Labels are not used to
/// reorder; they are checked by the resolvers.
pub fn extract_arguments(
    invocation: &AnnotationInvocation,
) -> Result<[&LabeledArgument; 2], ExpansionError> {
    let Some(arguments) = &invocation.arguments else {
        return Err(ExpansionError::WrongArgumentCount(0));
    };

    let labeled: Vec<&LabeledArgument> = arguments
        .iter()
        .filter_map(ArgumentNode::as_labeled)
        .collect();

    match labeled.as_slice() {
        [first, second] => Ok([*first, *second]),
        _ => Err(ExpansionError::WrongArgumentCount(labeled.len())),
    }
}
