//! Read-accessor name derivation and lookup

use crate::descriptor::MethodDescriptor;
use crate::naming::{capitalize, non_blank};

/// Expected read-accessor name for a field.
///
/// A non-blank `explicit` name always wins. Otherwise the name is
/// `is<Field>` for primitive `boolean` fields and `get<Field>` for everything
/// else, boxed `Boolean` included.
pub fn accessor_name(field: &str, primitive_boolean: bool, explicit: Option<&str>) -> String {
    if let Some(name) = explicit.and_then(non_blank) {
        return name.to_string();
    }
    let prefix = if primitive_boolean { "is" } else { "get" };
    format!("{prefix}{}", capitalize(field))
}

/// First zero-parameter method named `name`, in declaration order.
pub fn find_accessor<'a>(
    methods: &'a [MethodDescriptor],
    name: &str,
) -> Option<&'a MethodDescriptor> {
    methods
        .iter()
        .find(|method| method.parameter_count == 0 && method.name == name)
}
