//! Normalized metadata derived from one connector model class.

use crate::classify::TypeCategory;
use crate::naming::qualify;
use crate::type_ref::TypeRef;
use serde::Serialize;

/// Connector object class a model is exposed as.
///
/// The well-known kinds reference shared constants in generated code; a
/// custom kind is constructed from its literal type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectClassKind {
    Account,
    Group,
    All,
    Custom(String),
}

impl ObjectClassKind {
    /// Resolve a configured object class type string.
    pub fn from_type(object_class_type: &str) -> Self {
        match object_class_type {
            "__ACCOUNT__" => ObjectClassKind::Account,
            "__GROUP__" => ObjectClassKind::Group,
            "__ALL__" => ObjectClassKind::All,
            other => ObjectClassKind::Custom(other.to_string()),
        }
    }

    pub fn is_well_known(&self) -> bool {
        !matches!(self, ObjectClassKind::Custom(_))
    }

    /// Constant name for well-known kinds, the literal otherwise.
    pub fn name(&self) -> &str {
        match self {
            ObjectClassKind::Account => "ACCOUNT",
            ObjectClassKind::Group => "GROUP",
            ObjectClassKind::All => "ALL",
            ObjectClassKind::Custom(literal) => literal,
        }
    }

    /// The object class type string, e.g. `__ACCOUNT__`.
    pub fn type_name(&self) -> &str {
        match self {
            ObjectClassKind::Account => "__ACCOUNT__",
            ObjectClassKind::Group => "__GROUP__",
            ObjectClassKind::All => "__ALL__",
            ObjectClassKind::Custom(literal) => literal,
        }
    }
}

/// Enum handling for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMeta {
    /// Zero-argument method turning the constant into its string value
    pub to_string_method: String,
}

/// One exposed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    /// Name of the source field
    pub field_name: String,

    /// Attribute name exposed in the schema
    pub attribute_name: String,

    /// Expected accessor name, resolved or not
    pub accessor_name: String,

    /// Name of the matching accessor, absent when resolution failed
    pub accessor: Option<String>,

    /// Element type after unwrapping arrays and collections
    pub declared_type: TypeRef,

    pub category: TypeCategory,
    pub multi_valued: bool,
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_meta: Option<EnumMeta>,

    pub supported: bool,
    pub uid: bool,
    pub display_name: bool,
}

impl FieldMeta {
    pub fn is_enum(&self) -> bool {
        self.enum_meta.is_some()
    }

    /// Contributes an attribute descriptor to the schema routine.
    pub fn in_schema(&self) -> bool {
        self.supported
    }

    /// Contributes an attribute value to the instance routine.
    pub fn in_instance(&self) -> bool {
        self.supported && self.accessor.is_some()
    }
}

/// Everything needed to generate the builders for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMeta {
    pub class_name: String,
    pub source_package: String,
    pub generated_class_name: String,
    pub generated_package: String,
    pub object_class: ObjectClassKind,

    /// Non-ignored fields in declaration order
    pub fields: Vec<FieldMeta>,
}

impl ClassMeta {
    pub fn qualified_name(&self) -> String {
        qualify(&self.source_package, &self.class_name)
    }

    pub fn generated_qualified_name(&self) -> String {
        qualify(&self.generated_package, &self.generated_class_name)
    }

    pub fn uid_field(&self) -> Option<&FieldMeta> {
        self.fields.iter().find(|field| field.uid)
    }

    pub fn display_name_field(&self) -> Option<&FieldMeta> {
        self.fields.iter().find(|field| field.display_name)
    }

    pub fn schema_fields(&self) -> impl Iterator<Item = &FieldMeta> {
        self.fields.iter().filter(|field| field.in_schema())
    }

    pub fn instance_fields(&self) -> impl Iterator<Item = &FieldMeta> {
        self.fields.iter().filter(|field| field.in_instance())
    }
}
