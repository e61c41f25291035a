//! Structural class descriptions consumed by the pipeline.
//!
//! [`ClassSource`] is the only view the pipeline has of a class. The
//! serde-backed [`ClassDescriptor`] implements it for descriptor documents;
//! other hosts can implement it on top of their own reflection data.

use crate::error::CodegenResult;
use crate::marker::{AttributeMarker, EnumMarker, ModelMarker};
use crate::naming::qualify;
use crate::type_ref::TypeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Kind of the described type element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Class => write!(f, "a class"),
            ElementKind::Interface => write!(f, "an interface"),
            ElementKind::Enum => write!(f, "an enum"),
            ElementKind::Record => write!(f, "a record"),
        }
    }
}

/// Read-only structural view of one class.
pub trait ClassSource {
    /// Simple name of the class.
    fn name(&self) -> &str;

    /// Package of the class, empty for the default package.
    fn package(&self) -> &str;

    fn kind(&self) -> ElementKind {
        ElementKind::Class
    }

    /// The class-level connector model marker, if present.
    fn model(&self) -> Option<&ModelMarker>;

    /// Declared fields in declaration order.
    fn fields(&self) -> &[FieldDescriptor];

    /// Declared methods in declaration order.
    fn methods(&self) -> &[MethodDescriptor];

    fn qualified_name(&self) -> String {
        qualify(self.package(), self.name())
    }
}

/// A declared field with its markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributeMarker>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_attribute: Option<EnumMarker>,

    /// Excluded from the connector object entirely
    #[serde(default)]
    pub ignore: bool,

    /// Carries the unique identifier
    #[serde(default)]
    pub uid: bool,

    /// Carries the display name
    #[serde(default, rename = "name_field")]
    pub display_name: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            attribute: None,
            enum_attribute: None,
            ignore: false,
            uid: false,
            display_name: false,
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeMarker) -> Self {
        self.attribute = Some(attribute);
        self
    }

    pub fn with_enum_attribute(mut self, marker: EnumMarker) -> Self {
        self.enum_attribute = Some(marker);
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn uid(mut self) -> Self {
        self.uid = true;
        self
    }

    pub fn display_name(mut self) -> Self {
        self.display_name = true;
        self
    }
}

/// A declared method, reduced to what accessor lookup needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDescriptor {
    pub name: String,

    #[serde(default, alias = "parameters")]
    pub parameter_count: usize,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, parameter_count: usize) -> Self {
        Self {
            name: name.into(),
            parameter_count,
        }
    }

    /// A zero-argument method.
    pub fn getter(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }
}

/// Description of one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDescriptor {
    pub name: String,

    #[serde(default)]
    pub package: String,

    #[serde(default)]
    pub kind: ElementKind,

    /// Present only on connector models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelMarker>,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            kind: ElementKind::Class,
            model: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_model(mut self, model: ModelMarker) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

impl ClassSource for ClassDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn package(&self) -> &str {
        &self.package
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn model(&self) -> Option<&ModelMarker> {
        self.model.as_ref()
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }
}

/// One descriptor document: classes plus the names known to be enums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorSet {
    /// Fully qualified names of enumeration types
    #[serde(default)]
    pub enums: Vec<String>,

    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

impl DescriptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document and resolve its enum types.
    pub fn from_json(bytes: &[u8]) -> CodegenResult<Self> {
        let set: Self = serde_json::from_slice(bytes)?;
        Ok(set.resolved())
    }

    /// Append another document, then re-resolve enums across both.
    pub fn merge(&mut self, other: DescriptorSet) {
        self.enums.extend(other.enums);
        self.classes.extend(other.classes);
        self.resolve_enums();
    }

    /// Rewrite every field type naming a listed enum to [`TypeRef::Enum`].
    pub fn resolve_enums(&mut self) {
        let enums: HashSet<&str> = self.enums.iter().map(String::as_str).collect();
        for class in &mut self.classes {
            for field in &mut class.fields {
                field.ty.resolve_enums(&enums);
            }
        }
    }

    pub fn resolved(mut self) -> Self {
        self.resolve_enums();
        self
    }

    /// Classes carrying the connector model marker, in document order.
    pub fn discover(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.iter().filter(|class| class.model.is_some())
    }

    pub fn find(&self, qualified_name: &str) -> Option<&ClassDescriptor> {
        self.classes
            .iter()
            .find(|class| class.qualified_name() == qualified_name || class.name == qualified_name)
    }
}
