//! connmodel-core - Connector model metadata and builder synthesis
//!
//! This crate turns a structural description of a class into the two ConnId
//! builder routines a connector needs:
//! - a schema routine building an `ObjectClassInfoBuilder`
//! - an instance routine building a `ConnectorObjectBuilder` from a source object
//!
//! # Pipeline
//!
//! ```text
//! ClassSource (descriptor)
//!     ↓
//!  [MetaBuilder]  classify types, resolve accessors, apply reporting policies
//!     ↓
//!  [validate]     exactly one uid field, exactly one name field
//!     ↓
//!  ClassMeta
//!     ↓
//!  [synthesize]   ordered emission instructions
//!     ↓
//!  EmissionBackend (Java source)
//! ```
//!
//! One [`Processor`] run handles a batch of classes. A failure in one class is
//! reported once through the [`DiagnosticSink`] and never affects the others.

mod accessor;
mod builder;
mod config;
mod descriptor;
mod diagnostics;
mod error;
mod marker;
mod meta;
mod policy;
mod processor;
mod type_ref;
mod validate;

pub mod classify;
pub mod emit;
pub mod java;
pub mod naming;
pub mod synth;

pub use accessor::{accessor_name, find_accessor};
pub use builder::MetaBuilder;
pub use classify::{Classification, SupportedTypes, TypeCategory, classify};
pub use config::{GeneratorConfig, SupportedTypesConfig};
pub use descriptor::{
    ClassDescriptor, ClassSource, DescriptorSet, ElementKind, FieldDescriptor, MethodDescriptor,
};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, Locus, Severity};
pub use emit::{EmissionBackend, GeneratedUnit};
pub use java::{InMemoryBackend, JavaFileBackend, render_unit};
pub use error::{CodegenError, CodegenResult};
pub use marker::{AttributeMarker, EnumMarker, ModelMarker};
pub use meta::{ClassMeta, EnumMeta, FieldMeta, ObjectClassKind};
pub use policy::{Outcome, ReportingPolicy, report};
pub use processor::{Processor, RunSummary};
pub use synth::synthesize;
pub use type_ref::{Primitive, TypeRef};
pub use validate::{RoleCounts, validate_roles};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescriptor, ClassMeta, ClassSource, CodegenError, CodegenResult, DescriptorSet,
        DiagnosticSink, EmissionBackend, FieldMeta, GeneratorConfig, Locus, MetaBuilder,
        Processor, ReportingPolicy, RunSummary, SupportedTypes, TypeRef,
    };
}
