//! Builder routine synthesis.
//!
//! Turns a [`ClassMeta`] into a [`GeneratedUnit`] with two routines:
//!
//! ```java
//! public static ObjectClassInfoBuilder objectClassInfoBuilder() {
//!     ObjectClassInfoBuilder builder = new ObjectClassInfoBuilder();
//!     builder.setType(ObjectClass.ACCOUNT_NAME);
//!     builder.addAttributeInfo(new AttributeInfoBuilder().setName("login")...build());
//!     return builder;
//! }
//!
//! public static ConnectorObjectBuilder connectorObjectBuilder(User data) {
//!     ConnectorObjectBuilder builder = new ConnectorObjectBuilder();
//!     builder.setObjectClass(ObjectClass.ACCOUNT);
//!     builder.addAttribute("login", data.getLogin());
//!     return builder;
//! }
//! ```
//!
//! Unsupported fields appear in neither routine. Fields without a resolved
//! accessor are left out of the instance routine only.

use crate::emit::{Expr, GeneratedUnit, Instruction, Parameter, Routine, TypeName};
use crate::meta::{ClassMeta, FieldMeta, ObjectClassKind};

/// Package of the ConnId object model.
pub const CONNID_PACKAGE: &str = "org.identityconnectors.framework.common.objects";

pub const SCHEMA_ROUTINE: &str = "objectClassInfoBuilder";
pub const INSTANCE_ROUTINE: &str = "connectorObjectBuilder";
pub const ADD_ATTRIBUTE_INFO: &str = "addAttributeInfo";
pub const ADD_ATTRIBUTE: &str = "addAttribute";

/// Name of the instance routine parameter.
pub const SOURCE_PARAM: &str = "data";

/// Name of the builder local in both routines.
pub const BUILDER_VAR: &str = "builder";

fn connid(name: &str) -> TypeName {
    TypeName::Class {
        package: CONNID_PACKAGE.to_string(),
        name: name.to_string(),
    }
}

/// Build the generated class for one model.
pub fn synthesize(meta: &ClassMeta) -> GeneratedUnit {
    GeneratedUnit {
        package: meta.generated_package.clone(),
        class_name: meta.generated_class_name.clone(),
        routines: vec![schema_routine(meta), instance_routine(meta)],
    }
}

fn schema_routine(meta: &ClassMeta) -> Routine {
    let builder_type = connid("ObjectClassInfoBuilder");
    let object_class = match &meta.object_class {
        ObjectClassKind::Custom(literal) => Expr::string(literal),
        well_known => Expr::StaticField {
            owner: connid("ObjectClass"),
            field: format!("{}_NAME", well_known.name()),
        },
    };

    let mut body = vec![
        Instruction::Declare {
            ty: builder_type.clone(),
            name: BUILDER_VAR.to_string(),
            init: Expr::New {
                ty: builder_type.clone(),
                args: Vec::new(),
            },
        },
        Instruction::Call(Expr::var(BUILDER_VAR).call("setType", vec![object_class])),
    ];
    body.extend(meta.schema_fields().map(|field| {
        Instruction::Call(Expr::var(BUILDER_VAR).call(ADD_ATTRIBUTE_INFO, vec![attribute_info(field)]))
    }));
    body.push(Instruction::Return(Expr::var(BUILDER_VAR)));

    Routine {
        name: SCHEMA_ROUTINE.to_string(),
        return_type: builder_type,
        parameters: Vec::new(),
        body,
    }
}

fn attribute_info(field: &FieldMeta) -> Expr {
    Expr::New {
        ty: connid("AttributeInfoBuilder"),
        args: Vec::new(),
    }
    .call("setName", vec![Expr::string(&field.attribute_name)])
    .call("setRequired", vec![Expr::Bool(field.required)])
    .call(
        "setType",
        vec![Expr::ClassLiteral(TypeName::from_type_ref(&field.declared_type))],
    )
    .call("setMultiValued", vec![Expr::Bool(field.multi_valued)])
    .call("build", Vec::new())
}

fn instance_routine(meta: &ClassMeta) -> Routine {
    let builder_type = connid("ConnectorObjectBuilder");
    let object_class = match &meta.object_class {
        ObjectClassKind::Custom(literal) => Expr::New {
            ty: connid("ObjectClass"),
            args: vec![Expr::string(literal)],
        },
        well_known => Expr::StaticField {
            owner: connid("ObjectClass"),
            field: well_known.name().to_string(),
        },
    };

    let mut body = vec![
        Instruction::Declare {
            ty: builder_type.clone(),
            name: BUILDER_VAR.to_string(),
            init: Expr::New {
                ty: builder_type.clone(),
                args: Vec::new(),
            },
        },
        Instruction::Call(Expr::var(BUILDER_VAR).call("setObjectClass", vec![object_class])),
    ];
    body.extend(meta.instance_fields().filter_map(add_attribute));
    body.push(Instruction::Return(Expr::var(BUILDER_VAR)));

    Routine {
        name: INSTANCE_ROUTINE.to_string(),
        return_type: builder_type,
        parameters: vec![Parameter {
            ty: TypeName::Class {
                package: meta.source_package.clone(),
                name: meta.class_name.clone(),
            },
            name: SOURCE_PARAM.to_string(),
        }],
        body,
    }
}

fn add_attribute(field: &FieldMeta) -> Option<Instruction> {
    let accessor = field.accessor.as_deref()?;
    let value = Expr::var(SOURCE_PARAM).call(accessor, Vec::new());

    let instruction = match &field.enum_meta {
        Some(enum_meta) => Instruction::If {
            condition: value.clone().not_null(),
            body: vec![Instruction::Call(Expr::var(BUILDER_VAR).call(
                ADD_ATTRIBUTE,
                vec![
                    Expr::string(&field.attribute_name),
                    value.call(&enum_meta.to_string_method, Vec::new()),
                ],
            ))],
        },
        None => Instruction::Call(
            Expr::var(BUILDER_VAR).call(ADD_ATTRIBUTE, vec![Expr::string(&field.attribute_name), value]),
        ),
    };
    Some(instruction)
}
