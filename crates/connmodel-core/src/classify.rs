//! Field type classification.
//!
//! Maps a declared [`TypeRef`] to the shape of the attribute it becomes:
//!
//! | Declared type | Category | Element | Multi-valued |
//! |---------------|----------|---------|--------------|
//! | `int` | [`TypeCategory::PrimitiveScalar`] | `int` | no |
//! | `byte[]` | [`TypeCategory::ByteSequence`] | `byte[]` | no |
//! | `java.lang.String[]` | [`TypeCategory::Array`] | `java.lang.String` | yes |
//! | `java.util.List<java.lang.Long>` | [`TypeCategory::Collection`] | `java.lang.Long` | yes |
//! | enum type | [`TypeCategory::Enum`] | `java.lang.String` | no |
//! | `java.math.BigDecimal` | [`TypeCategory::SupportedObject`] | itself | no |
//!
//! Only one level of array or collection is unwrapped. Nested containers keep
//! the inner type verbatim as the element, which then fails the support check.

use crate::type_ref::{OBJECT_TYPE, Primitive, STRING_TYPE, TypeRef};
use serde::Serialize;
use std::collections::BTreeSet;

/// Element type name of a byte sequence attribute.
pub const BYTE_ARRAY: &str = "byte[]";

/// Non-primitive basic types supported out of the box.
pub const DEFAULT_OBJECT_TYPES: [&str; 7] = [
    STRING_TYPE,
    BYTE_ARRAY,
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "org.identityconnectors.common.security.GuardedString",
    "org.identityconnectors.common.security.GuardedByteArray",
    "java.time.ZonedDateTime",
];

/// Collection containers unwrapped out of the box.
pub const DEFAULT_COLLECTIONS: [&str; 2] = ["java.util.List", "java.util.Set"];

/// The closed sets of representable element types and container types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedTypes {
    basic: BTreeSet<String>,
    collections: BTreeSet<String>,
}

impl Default for SupportedTypes {
    fn default() -> Self {
        let mut types = Self::new();
        for primitive in Primitive::ALL {
            types = types
                .with_basic(primitive.keyword())
                .with_basic(primitive.boxed());
        }
        for name in DEFAULT_OBJECT_TYPES {
            types = types.with_basic(name);
        }
        for name in DEFAULT_COLLECTIONS {
            types = types.with_collection(name);
        }
        types
    }
}

impl SupportedTypes {
    /// Empty sets: nothing is supported and nothing is unwrapped.
    pub fn new() -> Self {
        Self {
            basic: BTreeSet::new(),
            collections: BTreeSet::new(),
        }
    }

    pub fn with_basic(mut self, name: impl Into<String>) -> Self {
        self.basic.insert(name.into());
        self
    }

    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collections.insert(name.into());
        self
    }

    pub fn is_basic(&self, name: &str) -> bool {
        self.basic.contains(name)
    }

    pub fn is_collection(&self, name: &str) -> bool {
        self.collections.contains(name)
    }

    pub fn basic(&self) -> impl Iterator<Item = &str> {
        self.basic.iter().map(String::as_str)
    }

    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(String::as_str)
    }

    /// Sorted, comma separated list of the basic types, for diagnostics.
    pub fn describe(&self) -> String {
        self.basic().collect::<Vec<_>>().join(", ")
    }

    fn element_supported(&self, element: &TypeRef) -> bool {
        match element {
            // Containers of enums have no string conversion.
            TypeRef::Enum(_) | TypeRef::Wildcard => false,
            other => self.is_basic(&other.to_string()),
        }
    }
}

/// Shape of a classified field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    PrimitiveScalar,
    ByteSequence,
    SupportedObject,
    Collection,
    Array,
    Enum,
    Unsupported,
}

/// Result of classifying one declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: TypeCategory,
    /// Normalized element type after unwrapping arrays and collections
    pub element: TypeRef,
    pub multi_valued: bool,
    pub is_enum: bool,
    pub supported: bool,
}

impl Classification {
    fn single(category: TypeCategory, element: TypeRef, supported: bool) -> Self {
        Self {
            category,
            element,
            multi_valued: false,
            is_enum: false,
            supported,
        }
    }

    fn multi(category: TypeCategory, element: TypeRef, supported: bool) -> Self {
        Self {
            category,
            element,
            multi_valued: true,
            is_enum: false,
            supported,
        }
    }
}

/// Classify a declared field type against the supported sets.
pub fn classify(ty: &TypeRef, types: &SupportedTypes) -> Classification {
    match ty {
        TypeRef::Primitive(primitive) => Classification::single(
            TypeCategory::PrimitiveScalar,
            ty.clone(),
            types.is_basic(primitive.keyword()),
        ),
        TypeRef::Array(component) if **component == TypeRef::Primitive(Primitive::Byte) => {
            Classification::single(
                TypeCategory::ByteSequence,
                ty.clone(),
                types.is_basic(BYTE_ARRAY),
            )
        }
        TypeRef::Array(component) => Classification::multi(
            TypeCategory::Array,
            (**component).clone(),
            types.element_supported(component),
        ),
        TypeRef::Declared { name, args } if types.is_collection(name) => match args.as_slice() {
            [element] => Classification::multi(
                TypeCategory::Collection,
                element.clone(),
                types.element_supported(element),
            ),
            // Raw container: the element type is unknown.
            _ => Classification::multi(
                TypeCategory::Collection,
                TypeRef::declared(OBJECT_TYPE),
                false,
            ),
        },
        TypeRef::Enum(_) => Classification {
            category: TypeCategory::Enum,
            element: TypeRef::string(),
            multi_valued: false,
            is_enum: true,
            supported: true,
        },
        TypeRef::Declared { .. } | TypeRef::Wildcard => {
            let supported = types.element_supported(ty);
            let category = if supported {
                TypeCategory::SupportedObject
            } else {
                TypeCategory::Unsupported
            };
            Classification::single(category, ty.clone(), supported)
        }
    }
}
