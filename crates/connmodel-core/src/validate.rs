//! Whole-class invariants

use crate::error::{CodegenError, CodegenResult};
use crate::meta::FieldMeta;

/// How many fields carry each distinguished role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleCounts {
    pub uid: usize,
    pub display_name: usize,
}

impl RoleCounts {
    pub fn count(fields: &[FieldMeta]) -> Self {
        fields.iter().fold(Self::default(), |counts, field| Self {
            uid: counts.uid + usize::from(field.uid),
            display_name: counts.display_name + usize::from(field.display_name),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.uid == 1 && self.display_name == 1
    }
}

/// Require exactly one uid field and exactly one name field.
///
/// Not subject to any reporting policy.
pub fn validate_roles(class: &str, fields: &[FieldMeta]) -> CodegenResult<()> {
    let counts = RoleCounts::count(fields);
    if counts.is_valid() {
        return Ok(());
    }
    Err(CodegenError::InvariantViolation {
        class: class.to_string(),
        uid_count: counts.uid,
        name_count: counts.display_name,
    })
}
