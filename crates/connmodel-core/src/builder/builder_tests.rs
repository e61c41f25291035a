#![allow(non_snake_case)]

use super::*;
use crate::classify::TypeCategory;
use crate::descriptor::ClassDescriptor;
use crate::diagnostics::{CollectingSink, Severity};
use crate::marker::EnumMarker;
use crate::policy::ReportingPolicy;
use crate::type_ref::TypeRef;

fn ty(input: &str) -> TypeRef {
    TypeRef::parse(input).unwrap()
}

fn model_class() -> ClassDescriptor {
    ClassDescriptor::new("com.example", "User")
        .with_model(ModelMarker::default())
        .with_field(FieldDescriptor::new("id", TypeRef::string()).uid())
        .with_field(FieldDescriptor::new("login", TypeRef::string()).display_name())
        .with_method(MethodDescriptor::getter("getId"))
        .with_method(MethodDescriptor::getter("getLogin"))
}

fn build(class: &ClassDescriptor) -> (CodegenResult<ClassMeta>, CollectingSink) {
    let types = SupportedTypes::default();
    let sink = CollectingSink::new();
    let result = MetaBuilder::new(&types, &sink).build_class(class);
    (result, sink)
}

#[test]
fn build_class___defaults___derive_generated_identity() {
    let (result, sink) = build(&model_class());

    let meta = result.unwrap();
    assert_eq!(meta.class_name, "User");
    assert_eq!(meta.source_package, "com.example");
    assert_eq!(meta.generated_class_name, "UserBuilders");
    assert_eq!(meta.generated_package, "com.example");
    assert_eq!(meta.object_class, ObjectClassKind::Account);
    assert_eq!(meta.fields.len(), 2);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn build_class___marker_overrides___are_applied() {
    let class = ClassDescriptor {
        model: Some(ModelMarker {
            object_class_type: "printer".into(),
            suffix: "Mapping".into(),
            package_name: "com.example.generated".into(),
            ..ModelMarker::default()
        }),
        ..model_class()
    };

    let meta = build(&class).0.unwrap();

    assert_eq!(meta.generated_class_name, "UserMapping");
    assert_eq!(meta.generated_package, "com.example.generated");
    assert_eq!(meta.object_class, ObjectClassKind::Custom("printer".into()));
}

#[test]
fn build_class___preserves_declaration_order() {
    let class = model_class()
        .with_field(FieldDescriptor::new("zeta", TypeRef::string()))
        .with_field(FieldDescriptor::new("alpha", TypeRef::string()))
        .with_method(MethodDescriptor::getter("getZeta"))
        .with_method(MethodDescriptor::getter("getAlpha"));

    let meta = build(&class).0.unwrap();

    let names: Vec<_> = meta.fields.iter().map(|f| f.field_name.as_str()).collect();
    assert_eq!(names, vec!["id", "login", "zeta", "alpha"]);
}

#[test]
fn build_class___ignored_field___is_absent_and_not_counted() {
    let class = model_class().with_field(
        FieldDescriptor::new("otherId", TypeRef::string())
            .uid()
            .ignored(),
    );

    let meta = build(&class).0.unwrap();

    assert!(meta.fields.iter().all(|f| f.field_name != "otherId"));
}

#[test]
fn build_class___attribute_marker___overrides_name_required_and_accessor() {
    let class = model_class()
        .with_field(
            FieldDescriptor::new("mail", TypeRef::string()).with_attribute(AttributeMarker {
                name: "email".into(),
                required: true,
                accessor: "fetchMail".into(),
                ..AttributeMarker::default()
            }),
        )
        .with_method(MethodDescriptor::getter("fetchMail"));

    let meta = build(&class).0.unwrap();

    let mail = &meta.fields[2];
    assert_eq!(mail.attribute_name, "email");
    assert!(mail.required);
    assert_eq!(mail.accessor_name, "fetchMail");
    assert_eq!(mail.accessor.as_deref(), Some("fetchMail"));
}

#[test]
fn build_class___primitive_boolean___resolves_is_accessor() {
    let class = model_class()
        .with_field(FieldDescriptor::new("active", ty("boolean")))
        .with_field(FieldDescriptor::new("locked", ty("java.lang.Boolean")))
        .with_method(MethodDescriptor::getter("isActive"))
        .with_method(MethodDescriptor::getter("getLocked"));

    let meta = build(&class).0.unwrap();

    assert_eq!(meta.fields[2].accessor.as_deref(), Some("isActive"));
    assert_eq!(meta.fields[3].accessor.as_deref(), Some("getLocked"));
}

#[test]
fn build_class___missing_accessor_warning___logs_and_proceeds() {
    let class = model_class().with_field(FieldDescriptor::new("phone", TypeRef::string()));

    let (result, sink) = build(&class);

    let meta = result.unwrap();
    assert_eq!(meta.fields[2].accessor, None);
    assert_eq!(meta.fields[2].accessor_name, "getPhone");
    let warnings = sink.with_severity(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].locus, Locus::field("com.example.User", "phone"));
    assert!(warnings[0].message.contains("getPhone"));
}

#[test]
fn build_class___missing_accessor_ignore___is_silent() {
    let class = ClassDescriptor {
        model: Some(ModelMarker {
            missing_accessor_policy: ReportingPolicy::Ignore,
            ..ModelMarker::default()
        }),
        ..model_class().with_field(FieldDescriptor::new("phone", TypeRef::string()))
    };

    let (result, sink) = build(&class);

    assert_eq!(result.unwrap().fields[2].accessor, None);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn build_class___missing_accessor_error___aborts_without_logging() {
    let class = ClassDescriptor {
        model: Some(ModelMarker {
            missing_accessor_policy: ReportingPolicy::Error,
            ..ModelMarker::default()
        }),
        ..model_class().with_field(FieldDescriptor::new("phone", TypeRef::string()))
    };

    let (result, sink) = build(&class);

    assert_eq!(
        result.unwrap_err(),
        CodegenError::MissingAccessor {
            class: "com.example.User".into(),
            field: "phone".into(),
            expected: "getPhone".into(),
        }
    );
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn build_class___unsupported_type_warning___keeps_unsupported_field() {
    let class = model_class()
        .with_field(FieldDescriptor::new("address", ty("com.example.Address")))
        .with_method(MethodDescriptor::getter("getAddress"));

    let (result, sink) = build(&class);

    let address = &result.unwrap().fields[2];
    assert!(!address.supported);
    assert_eq!(address.category, TypeCategory::Unsupported);
    assert_eq!(sink.count(Severity::Warning), 1);
}

#[test]
fn build_class___unsupported_type_error___aborts_class() {
    let class = ClassDescriptor {
        model: Some(ModelMarker {
            unsupported_type_policy: ReportingPolicy::Error,
            ..ModelMarker::default()
        }),
        ..model_class()
            .with_field(FieldDescriptor::new("tags", ty("java.util.Map<java.lang.String, java.lang.String>")))
            .with_method(MethodDescriptor::getter("getTags"))
    };

    let (result, sink) = build(&class);

    let err = result.unwrap_err();
    assert!(matches!(err, CodegenError::UnsupportedType { ref field, .. } if field == "tags"));
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn build_class___enum_field___defaults_to_name_conversion() {
    let class = model_class()
        .with_field(FieldDescriptor::new("status", TypeRef::Enum("com.example.Status".into())))
        .with_field(
            FieldDescriptor::new("kind", TypeRef::Enum("com.example.Kind".into())).with_enum_attribute(
                EnumMarker {
                    to_string_method: "getCode".into(),
                },
            ),
        )
        .with_method(MethodDescriptor::getter("getStatus"))
        .with_method(MethodDescriptor::getter("getKind"));

    let meta = build(&class).0.unwrap();

    let status = &meta.fields[2];
    assert!(status.is_enum());
    assert_eq!(status.declared_type, TypeRef::string());
    assert!(status.supported);
    assert_eq!(status.enum_meta.as_ref().unwrap().to_string_method, "name");
    assert_eq!(
        meta.fields[3].enum_meta.as_ref().unwrap().to_string_method,
        "getCode"
    );
}

#[test]
fn build_class___multi_valued_override___replaces_classified_flag() {
    let class = model_class()
        .with_field(
            FieldDescriptor::new("aliases", ty("java.util.List<java.lang.String>")).with_attribute(
                AttributeMarker {
                    multi_valued: Some(false),
                    ..AttributeMarker::default()
                },
            ),
        )
        .with_field(
            FieldDescriptor::new("nick", TypeRef::string()).with_attribute(AttributeMarker {
                multi_valued: Some(true),
                ..AttributeMarker::default()
            }),
        )
        .with_method(MethodDescriptor::getter("getAliases"))
        .with_method(MethodDescriptor::getter("getNick"));

    let meta = build(&class).0.unwrap();

    assert!(!meta.fields[2].multi_valued);
    assert_eq!(meta.fields[2].declared_type, TypeRef::string());
    assert!(meta.fields[3].multi_valued);
}

#[test]
fn build_class___no_uid___fails_invariant() {
    let class = ClassDescriptor::new("com.example", "NoId")
        .with_model(ModelMarker::default())
        .with_field(FieldDescriptor::new("login", TypeRef::string()).display_name())
        .with_method(MethodDescriptor::getter("getLogin"));

    let err = build(&class).0.unwrap_err();

    assert_eq!(
        err,
        CodegenError::InvariantViolation {
            class: "com.example.NoId".into(),
            uid_count: 0,
            name_count: 1,
        }
    );
}

#[test]
fn build_class___interface_kind___is_rejected() {
    let class = model_class().with_kind(ElementKind::Interface);

    let err = build(&class).0.unwrap_err();

    assert_eq!(
        err,
        CodegenError::NotAClass {
            class: "com.example.User".into(),
            kind: "an interface".into(),
        }
    );
}
