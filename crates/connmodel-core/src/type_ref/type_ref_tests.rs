#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("boolean", TypeRef::Primitive(Primitive::Boolean))]
#[test_case("int", TypeRef::Primitive(Primitive::Int))]
#[test_case("double", TypeRef::Primitive(Primitive::Double))]
#[test_case("java.lang.String", TypeRef::string())]
#[test_case("  java.lang.Long ", TypeRef::declared("java.lang.Long"))]
fn TypeRef___parse___simple_types(input: &str, expected: TypeRef) {
    assert_eq!(TypeRef::parse(input).unwrap(), expected);
}

#[test]
fn TypeRef___parse___arrays() {
    let ty = TypeRef::parse("java.lang.String[]").unwrap();

    assert_eq!(ty, TypeRef::array_of(TypeRef::string()));
}

#[test]
fn TypeRef___parse___multi_dimensional_array() {
    let ty = TypeRef::parse("byte [ ] []").unwrap();

    assert_eq!(
        ty,
        TypeRef::array_of(TypeRef::array_of(TypeRef::Primitive(Primitive::Byte)))
    );
}

#[test]
fn TypeRef___parse___generic_arguments() {
    let ty = TypeRef::parse("java.util.Map<java.lang.String, java.util.List<int[]>>").unwrap();

    assert_eq!(
        ty,
        TypeRef::Declared {
            name: "java.util.Map".into(),
            args: vec![
                TypeRef::string(),
                TypeRef::Declared {
                    name: "java.util.List".into(),
                    args: vec![TypeRef::array_of(TypeRef::Primitive(Primitive::Int))],
                },
            ],
        }
    );
}

#[test]
fn TypeRef___parse___wildcards_with_bounds() {
    let ty = TypeRef::parse("java.util.Set<? extends java.lang.Number>").unwrap();

    assert_eq!(
        ty,
        TypeRef::Declared {
            name: "java.util.Set".into(),
            args: vec![TypeRef::Wildcard],
        }
    );
}

#[test]
fn TypeRef___parse___nested_type_names_keep_dots() {
    let ty = TypeRef::parse("com.example.User.Status").unwrap();

    assert_eq!(ty, TypeRef::declared("com.example.User.Status"));
}

#[test_case(""; "empty")]
#[test_case("java.util.List<"; "unterminated arguments")]
#[test_case("java.util.List<java.lang.String"; "missing closing bracket")]
#[test_case("int<java.lang.String>"; "primitive with arguments")]
#[test_case("java..String"; "empty segment")]
#[test_case("java.lang.String["; "unterminated dimension")]
#[test_case("java.lang.String extra"; "trailing input")]
#[test_case("1abc"; "leading digit")]
fn TypeRef___parse___rejects_malformed(input: &str) {
    let err = TypeRef::parse(input).unwrap_err();

    assert!(matches!(err, CodegenError::InvalidType { .. }));
}

#[test_case("int")]
#[test_case("java.lang.String[]")]
#[test_case("java.util.List<java.lang.String>")]
#[test_case("java.util.Map<java.lang.String, java.lang.Integer>")]
fn TypeRef___display___matches_canonical_input(input: &str) {
    assert_eq!(TypeRef::parse(input).unwrap().to_string(), input);
}

#[test]
fn TypeRef___resolve_enums___rewrites_known_names_everywhere() {
    let enums: HashSet<&str> = ["com.example.Status"].into_iter().collect();
    let mut plain = TypeRef::parse("com.example.Status").unwrap();
    let mut listed = TypeRef::parse("java.util.List<com.example.Status>").unwrap();
    let mut array = TypeRef::parse("com.example.Status[]").unwrap();
    let mut other = TypeRef::parse("com.example.Other").unwrap();

    plain.resolve_enums(&enums);
    listed.resolve_enums(&enums);
    array.resolve_enums(&enums);
    other.resolve_enums(&enums);

    assert_eq!(plain, TypeRef::Enum("com.example.Status".into()));
    assert_eq!(
        listed,
        TypeRef::Declared {
            name: "java.util.List".into(),
            args: vec![TypeRef::Enum("com.example.Status".into())],
        }
    );
    assert_eq!(
        array,
        TypeRef::array_of(TypeRef::Enum("com.example.Status".into()))
    );
    assert_eq!(other, TypeRef::declared("com.example.Other"));
}

#[test]
fn TypeRef___is_primitive_boolean___distinguishes_boxed() {
    assert!(TypeRef::parse("boolean").unwrap().is_primitive_boolean());
    assert!(!TypeRef::parse("java.lang.Boolean").unwrap().is_primitive_boolean());
}

#[test]
fn TypeRef___deserialize___from_json_string() {
    let ty: TypeRef = serde_json::from_str("\"java.util.Set<java.lang.Long>\"").unwrap();

    assert_eq!(ty.to_string(), "java.util.Set<java.lang.Long>");
}

#[test]
fn TypeRef___deserialize___reports_parse_error() {
    let result: Result<TypeRef, _> = serde_json::from_str("\"java.util.Set<\"");

    assert!(result.is_err());
}

#[test]
fn Primitive___boxed___maps_to_java_lang() {
    assert_eq!(Primitive::Int.boxed(), "java.lang.Integer");
    assert_eq!(Primitive::Char.boxed(), "java.lang.Character");
    assert_eq!(Primitive::from_keyword("long"), Some(Primitive::Long));
    assert_eq!(Primitive::from_keyword("Long"), None);
}
