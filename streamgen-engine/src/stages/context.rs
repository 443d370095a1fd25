use crate::error::ExpansionError;
use crate::policy::ExpansionPolicy;
use crate::syntax::EnclosingDeclaration;

pub fn validate_context(
    declaration: &EnclosingDeclaration,
    policy: &ExpansionPolicy,
) -> Result<(), ExpansionError> {
    if policy.permits(declaration.kind) {
        return Ok(());
    }

    Err(ExpansionError::InvalidAttachmentKind {
        found: declaration.kind,
        permitted: policy.describe(),
    })
}
