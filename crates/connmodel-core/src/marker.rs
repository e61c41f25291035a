//! Declarative markers attached to classes and fields.
//!
//! Markers are pure configuration. Blank strings mean "not set" and fall back
//! to the documented defaults.

use crate::naming::non_blank;
use crate::policy::ReportingPolicy;
use serde::{Deserialize, Serialize};

/// Object class type used when a model does not name one.
pub const DEFAULT_OBJECT_CLASS_TYPE: &str = "__ACCOUNT__";

/// Suffix appended to the source class name to name the generated class.
pub const DEFAULT_SUFFIX: &str = "Builders";

/// Method used to turn an enum constant into its string value.
pub const DEFAULT_ENUM_TO_STRING: &str = "name";

/// Class-level marker: the class is a connector model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelMarker {
    /// ConnId object class type, e.g. `__ACCOUNT__`, `__GROUP__` or a custom name
    #[serde(default = "default_object_class_type")]
    pub object_class_type: String,

    /// Suffix for the generated class name
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Package of the generated class (default: package of the source class)
    #[serde(default)]
    pub package_name: String,

    /// What to do when a field has no matching getter
    #[serde(default, alias = "missing_getter_policy")]
    pub missing_accessor_policy: ReportingPolicy,

    /// What to do when a field's type cannot be represented as an attribute
    #[serde(default)]
    pub unsupported_type_policy: ReportingPolicy,
}

fn default_object_class_type() -> String {
    DEFAULT_OBJECT_CLASS_TYPE.to_string()
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for ModelMarker {
    fn default() -> Self {
        Self {
            object_class_type: default_object_class_type(),
            suffix: default_suffix(),
            package_name: String::new(),
            missing_accessor_policy: ReportingPolicy::default(),
            unsupported_type_policy: ReportingPolicy::default(),
        }
    }
}

impl ModelMarker {
    pub fn object_class_type(&self) -> &str {
        non_blank(&self.object_class_type).unwrap_or(DEFAULT_OBJECT_CLASS_TYPE)
    }

    pub fn suffix(&self) -> &str {
        non_blank(&self.suffix).unwrap_or(DEFAULT_SUFFIX)
    }

    /// Package for the generated class given the source class package.
    pub fn generated_package<'a>(&'a self, source_package: &'a str) -> &'a str {
        non_blank(&self.package_name).unwrap_or(source_package)
    }
}

/// Field-level marker overriding attribute defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeMarker {
    /// Attribute name (default: field name)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub required: bool,

    /// Replaces the multi-valued flag derived from the field type
    #[serde(default)]
    pub multi_valued: Option<bool>,

    /// Getter name (default: `get<Field>`, or `is<Field>` for `boolean`)
    #[serde(default, alias = "getter")]
    pub accessor: String,
}

impl AttributeMarker {
    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn accessor(&self) -> Option<&str> {
        non_blank(&self.accessor)
    }
}

/// Field-level marker for enum-typed attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumMarker {
    /// Zero-argument method converting the enum constant to a string
    #[serde(default, rename = "to_string")]
    pub to_string_method: String,
}

impl EnumMarker {
    pub fn to_string_method(&self) -> &str {
        non_blank(&self.to_string_method).unwrap_or(DEFAULT_ENUM_TO_STRING)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn ModelMarker___deserialize_empty___uses_defaults() {
        let marker: ModelMarker = serde_json::from_str("{}").unwrap();

        assert_eq!(marker, ModelMarker::default());
        assert_eq!(marker.object_class_type(), "__ACCOUNT__");
        assert_eq!(marker.suffix(), "Builders");
        assert_eq!(marker.missing_accessor_policy, ReportingPolicy::Warning);
        assert_eq!(marker.unsupported_type_policy, ReportingPolicy::Warning);
    }

    #[test]
    fn ModelMarker___blank_values___fall_back_to_defaults() {
        let marker = ModelMarker {
            object_class_type: " ".into(),
            suffix: "".into(),
            package_name: "  ".into(),
            ..ModelMarker::default()
        };

        assert_eq!(marker.object_class_type(), "__ACCOUNT__");
        assert_eq!(marker.suffix(), "Builders");
        assert_eq!(marker.generated_package("com.example"), "com.example");
    }

    #[test]
    fn ModelMarker___package_override___wins() {
        let marker = ModelMarker {
            package_name: "com.example.generated".into(),
            ..ModelMarker::default()
        };

        assert_eq!(
            marker.generated_package("com.example"),
            "com.example.generated"
        );
    }

    #[test]
    fn ModelMarker___getter_policy_alias___is_accepted() {
        let marker: ModelMarker =
            serde_json::from_str(r#"{"missing_getter_policy": "ERROR"}"#).unwrap();

        assert_eq!(marker.missing_accessor_policy, ReportingPolicy::Error);
    }

    #[test]
    fn ModelMarker___unknown_key___is_rejected() {
        let result: Result<ModelMarker, _> = serde_json::from_str(r#"{"sufix": "X"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn AttributeMarker___blank_overrides___are_absent() {
        let marker = AttributeMarker {
            name: " ".into(),
            accessor: "".into(),
            ..AttributeMarker::default()
        };

        assert_eq!(marker.name(), None);
        assert_eq!(marker.accessor(), None);
    }

    #[test]
    fn AttributeMarker___getter_alias___sets_accessor() {
        let marker: AttributeMarker =
            serde_json::from_str(r#"{"getter": "fetchName", "multi_valued": true}"#).unwrap();

        assert_eq!(marker.accessor(), Some("fetchName"));
        assert_eq!(marker.multi_valued, Some(true));
    }

    #[test]
    fn EnumMarker___default___converts_with_name() {
        assert_eq!(EnumMarker::default().to_string_method(), "name");

        let custom: EnumMarker = serde_json::from_str(r#"{"to_string": "getCode"}"#).unwrap();
        assert_eq!(custom.to_string_method(), "getCode");
    }
}
