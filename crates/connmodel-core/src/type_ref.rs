//! Java type expressions as they appear in class descriptors.
//!
//! Descriptors spell field types the way Java source does:
//!
//! | Expression | Parsed as |
//! |------------|-----------|
//! | `int` | [`TypeRef::Primitive`] |
//! | `java.lang.String[]` | [`TypeRef::Array`] |
//! | `java.util.List<java.lang.String>` | [`TypeRef::Declared`] with one argument |
//! | `java.util.List<? extends Number>` | argument is [`TypeRef::Wildcard`] |
//!
//! [`TypeRef::Enum`] is never produced by the parser; it is assigned when a
//! descriptor set resolves the names it knows to be enumerations.

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Java primitive scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// Fully qualified name of the boxed counterpart.
    pub fn boxed(self) -> &'static str {
        match self {
            Primitive::Boolean => "java.lang.Boolean",
            Primitive::Byte => "java.lang.Byte",
            Primitive::Char => "java.lang.Character",
            Primitive::Short => "java.lang.Short",
            Primitive::Int => "java.lang.Integer",
            Primitive::Long => "java.lang.Long",
            Primitive::Float => "java.lang.Float",
            Primitive::Double => "java.lang.Double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

/// A field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Primitive(Primitive),
    Array(Box<TypeRef>),
    Declared { name: String, args: Vec<TypeRef> },
    Enum(String),
    Wildcard,
}

pub const STRING_TYPE: &str = "java.lang.String";
pub const OBJECT_TYPE: &str = "java.lang.Object";

impl TypeRef {
    /// Parse a Java type expression.
    pub fn parse(input: &str) -> CodegenResult<Self> {
        TypeParser::new(input).parse_all()
    }

    /// A non-generic declared type.
    pub fn declared(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::declared(STRING_TYPE)
    }

    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// `boolean`, but not `java.lang.Boolean`.
    pub fn is_primitive_boolean(&self) -> bool {
        matches!(self, TypeRef::Primitive(Primitive::Boolean))
    }

    /// Rewrite declared names listed in `enums` to [`TypeRef::Enum`],
    /// including inside arrays and generic arguments.
    pub fn resolve_enums(&mut self, enums: &HashSet<&str>) {
        match self {
            TypeRef::Declared { name, args } => {
                if args.is_empty() && enums.contains(name.as_str()) {
                    *self = TypeRef::Enum(std::mem::take(name));
                } else {
                    for arg in args {
                        arg.resolve_enums(enums);
                    }
                }
            }
            TypeRef::Array(component) => component.resolve_enums(enums),
            TypeRef::Primitive(_) | TypeRef::Enum(_) | TypeRef::Wildcard => {}
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => write!(f, "{}", p.keyword()),
            TypeRef::Array(component) => write!(f, "{component}[]"),
            TypeRef::Declared { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeRef::Enum(name) => write!(f, "{name}"),
            TypeRef::Wildcard => write!(f, "?"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = CodegenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct TypeParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse_all(mut self) -> CodegenResult<TypeRef> {
        let ty = self.parse_type()?;
        self.skip_ws();
        if self.pos != self.input.len() {
            return Err(self.error("unexpected trailing input"));
        }
        Ok(ty)
    }

    fn parse_type(&mut self) -> CodegenResult<TypeRef> {
        self.skip_ws();

        let base = if self.eat('?') {
            self.skip_ws();
            // Bounds do not change classification, only the syntax is checked.
            if self.eat_keyword("extends") || self.eat_keyword("super") {
                self.parse_type()?;
            }
            TypeRef::Wildcard
        } else {
            let name = self.parse_name()?;
            self.skip_ws();
            if self.eat('<') {
                if Primitive::from_keyword(&name).is_some() {
                    return Err(self.error("primitive types cannot have type arguments"));
                }
                let mut args = Vec::new();
                loop {
                    args.push(self.parse_type()?);
                    self.skip_ws();
                    if self.eat(',') {
                        continue;
                    }
                    if self.eat('>') {
                        break;
                    }
                    return Err(self.error("expected ',' or '>'"));
                }
                TypeRef::Declared { name, args }
            } else if let Some(primitive) = Primitive::from_keyword(&name) {
                TypeRef::Primitive(primitive)
            } else {
                TypeRef::declared(name)
            }
        };

        self.parse_dimensions(base)
    }

    fn parse_dimensions(&mut self, mut ty: TypeRef) -> CodegenResult<TypeRef> {
        loop {
            self.skip_ws();
            if !self.eat('[') {
                return Ok(ty);
            }
            self.skip_ws();
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            ty = TypeRef::array_of(ty);
        }
    }

    fn parse_name(&mut self) -> CodegenResult<String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_name_char(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }

        let name = &self.input[start..self.pos];
        if name.is_empty() {
            return Err(self.error("expected a type name"));
        }
        let malformed = name.split('.').any(|segment| {
            segment.is_empty() || segment.chars().next().is_some_and(|c| c.is_ascii_digit())
        });
        if malformed {
            return Err(self.error("malformed qualified name"));
        }
        Ok(name.to_string())
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = &self.input[self.pos..];
        if !rest.starts_with(keyword) {
            return false;
        }
        if rest[keyword.len()..].chars().next().is_some_and(is_name_char) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn error(&self, reason: &str) -> CodegenError {
        CodegenError::InvalidType {
            input: self.input.to_string(),
            reason: format!("{reason} at offset {}", self.pos),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '.'
}

#[cfg(test)]
#[path = "type_ref/type_ref_tests.rs"]
mod type_ref_tests;
