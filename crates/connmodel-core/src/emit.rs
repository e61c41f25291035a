//! Emission instructions.
//!
//! The synthesis driver describes generated code as a [`GeneratedUnit`]: a
//! class holding [`Routine`]s whose bodies are ordered [`Instruction`]s.
//! Turning that into literal source text is the job of an
//! [`EmissionBackend`].

use crate::type_ref::{OBJECT_TYPE, Primitive, TypeRef};
use std::io;

/// A type as it appears in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Primitive(Primitive),
    Class { package: String, name: String },
    Array(Box<TypeName>),
}

impl TypeName {
    /// A class from its fully qualified name.
    pub fn class(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, name)) => TypeName::Class {
                package: package.to_string(),
                name: name.to_string(),
            },
            None => TypeName::Class {
                package: String::new(),
                name: qualified.to_string(),
            },
        }
    }

    /// Erase generic arguments; wildcards become `java.lang.Object`.
    pub fn from_type_ref(ty: &TypeRef) -> Self {
        match ty {
            TypeRef::Primitive(primitive) => TypeName::Primitive(*primitive),
            TypeRef::Array(component) => TypeName::Array(Box::new(Self::from_type_ref(component))),
            TypeRef::Declared { name, .. } | TypeRef::Enum(name) => Self::class(name),
            TypeRef::Wildcard => Self::class(OBJECT_TYPE),
        }
    }
}

/// An expression in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A local variable or parameter
    Var(String),
    /// A string literal
    Str(String),
    Bool(bool),
    /// `T.class`
    ClassLiteral(TypeName),
    /// `T.FIELD`
    StaticField { owner: TypeName, field: String },
    /// `new T(args)`
    New { ty: TypeName, args: Vec<Expr> },
    /// `target.method(args)`
    Call {
        target: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    /// `expr != null`
    NotNull(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    /// Call `method` on this expression.
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            target: Box::new(self),
            method: method.into(),
            args,
        }
    }

    pub fn not_null(self) -> Self {
        Expr::NotNull(Box::new(self))
    }
}

/// A statement in a routine body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `T name = init;`
    Declare {
        ty: TypeName,
        name: String,
        init: Expr,
    },
    /// An expression statement, normally a call
    Call(Expr),
    /// `if (condition) { body }`
    If {
        condition: Expr,
        body: Vec<Instruction>,
    },
    Return(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: TypeName,
    pub name: String,
}

/// A public static method of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub name: String,
    pub return_type: TypeName,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Instruction>,
}

impl Routine {
    /// Every instruction in the body, conditional blocks flattened.
    pub fn instructions(&self) -> Vec<&Instruction> {
        fn walk<'a>(body: &'a [Instruction], out: &mut Vec<&'a Instruction>) {
            for instruction in body {
                out.push(instruction);
                if let Instruction::If { body, .. } = instruction {
                    walk(body, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.body, &mut out);
        out
    }

    /// Calls of `method` anywhere in the body, in order.
    pub fn calls_to(&self, method: &str) -> Vec<&Expr> {
        self.instructions()
            .into_iter()
            .filter_map(|instruction| match instruction {
                Instruction::Call(expr @ Expr::Call { method: m, .. }) if m == method => Some(expr),
                _ => None,
            })
            .collect()
    }
}

/// One generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: String,
    pub class_name: String,
    pub routines: Vec<Routine>,
}

impl GeneratedUnit {
    pub fn qualified_name(&self) -> String {
        crate::naming::qualify(&self.package, &self.class_name)
    }

    pub fn routine(&self, name: &str) -> Option<&Routine> {
        self.routines.iter().find(|routine| routine.name == name)
    }
}

/// Persists generated units.
///
/// Any error is reported as an emission failure of the class being processed.
pub trait EmissionBackend {
    fn emit(&mut self, unit: &GeneratedUnit) -> io::Result<()>;
}

impl<B: EmissionBackend + ?Sized> EmissionBackend for &mut B {
    fn emit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        (**self).emit(unit)
    }
}
