//! Field and class metadata construction.
//!
//! [`MetaBuilder`] combines the classifier, the accessor resolver and the
//! per-class reporting policies into a [`ClassMeta`]. Field-level problems go
//! through [`report`]; an abort surfaces as the matching [`CodegenError`]
//! and stops the current class.

use crate::accessor::{accessor_name, find_accessor};
use crate::classify::{SupportedTypes, classify};
use crate::descriptor::{ClassSource, ElementKind, FieldDescriptor, MethodDescriptor};
use crate::diagnostics::{DiagnosticSink, Locus};
use crate::error::{CodegenError, CodegenResult};
use crate::marker::{AttributeMarker, ModelMarker};
use crate::meta::{ClassMeta, EnumMeta, FieldMeta, ObjectClassKind};
use crate::policy::report;
use crate::validate::validate_roles;
use tracing::debug;

/// Builds [`ClassMeta`] records for connector model classes.
pub struct MetaBuilder<'a> {
    types: &'a SupportedTypes,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> MetaBuilder<'a> {
    pub fn new(types: &'a SupportedTypes, sink: &'a dyn DiagnosticSink) -> Self {
        Self { types, sink }
    }

    /// Build and validate the metadata for one class.
    ///
    /// A class without a model marker is built with the marker defaults.
    pub fn build_class<C: ClassSource + ?Sized>(&self, class: &C) -> CodegenResult<ClassMeta> {
        let qualified = class.qualified_name();

        if class.kind() != ElementKind::Class {
            return Err(CodegenError::NotAClass {
                class: qualified,
                kind: class.kind().to_string(),
            });
        }

        let default_marker = ModelMarker::default();
        let marker = class.model().unwrap_or(&default_marker);
        let object_class = ObjectClassKind::from_type(marker.object_class_type());

        let mut fields = Vec::with_capacity(class.fields().len());
        for field in class.fields() {
            if field.ignore {
                debug!(class = %qualified, field = %field.name, "Skipping ignored field");
                continue;
            }
            fields.push(self.build_field(&qualified, field, class.methods(), marker)?);
        }

        validate_roles(&qualified, &fields)?;

        debug!(
            class = %qualified,
            object_class = object_class.type_name(),
            fields = fields.len(),
            "Built class metadata"
        );

        Ok(ClassMeta {
            class_name: class.name().to_string(),
            source_package: class.package().to_string(),
            generated_class_name: format!("{}{}", class.name(), marker.suffix()),
            generated_package: marker.generated_package(class.package()).to_string(),
            object_class,
            fields,
        })
    }

    /// Build the metadata for one non-ignored field.
    pub fn build_field(
        &self,
        class: &str,
        field: &FieldDescriptor,
        methods: &[MethodDescriptor],
        marker: &ModelMarker,
    ) -> CodegenResult<FieldMeta> {
        let locus = Locus::field(class, field.name.as_str());
        let attribute = field.attribute.as_ref();

        let attribute_name = attribute
            .and_then(AttributeMarker::name)
            .unwrap_or(&field.name)
            .to_string();
        let required = attribute.is_some_and(|a| a.required);
        let expected = accessor_name(
            &field.name,
            field.ty.is_primitive_boolean(),
            attribute.and_then(AttributeMarker::accessor),
        );

        let accessor = find_accessor(methods, &expected).map(|method| method.name.clone());
        if accessor.is_none() {
            let err = CodegenError::MissingAccessor {
                class: class.to_string(),
                field: field.name.clone(),
                expected: expected.clone(),
            };
            let outcome = report(
                self.sink,
                marker.missing_accessor_policy,
                &locus,
                &err.to_string(),
            );
            if outcome.should_abort() {
                return Err(err);
            }
        }

        let classification = classify(&field.ty, self.types);
        if !classification.supported {
            let err = CodegenError::UnsupportedType {
                class: class.to_string(),
                field: field.name.clone(),
                type_name: classification.element.to_string(),
                supported: self.types.describe(),
            };
            let outcome = report(
                self.sink,
                marker.unsupported_type_policy,
                &locus,
                &err.to_string(),
            );
            if outcome.should_abort() {
                return Err(err);
            }
        }

        let multi_valued = attribute
            .and_then(|a| a.multi_valued)
            .unwrap_or(classification.multi_valued);

        let enum_meta = classification.is_enum.then(|| EnumMeta {
            to_string_method: field
                .enum_attribute
                .clone()
                .unwrap_or_default()
                .to_string_method()
                .to_string(),
        });

        debug!(
            %locus,
            attribute = %attribute_name,
            category = ?classification.category,
            supported = classification.supported,
            accessor = accessor.as_deref().unwrap_or("-"),
            "Built field metadata"
        );

        Ok(FieldMeta {
            field_name: field.name.clone(),
            attribute_name,
            accessor_name: expected,
            accessor,
            declared_type: classification.element,
            category: classification.category,
            multi_valued,
            required,
            enum_meta,
            supported: classification.supported,
            uid: field.uid,
            display_name: field.display_name,
        })
    }
}

#[cfg(test)]
#[path = "builder/builder_tests.rs"]
mod builder_tests;
