#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GeneratorConfig___default___has_expected_values() {
    let config = GeneratorConfig::default();

    assert_eq!(config.output_dir, PathBuf::from("generated"));
    assert_eq!(config.log_level, "info");
    assert_eq!(config.supported_types, SupportedTypesConfig::default());
}

#[test]
fn GeneratorConfig___from_empty_bytes___returns_defaults() {
    let config = GeneratorConfig::from_json(&[]).unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___from_json___parses_all_keys() {
    let json = r#"{
        "output_dir": "target/java",
        "log_level": "debug",
        "supported_types": { "basic": ["java.util.UUID"], "collections": ["java.util.Collection"] }
    }"#;

    let config = GeneratorConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.output_dir, PathBuf::from("target/java"));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.supported_types.basic, vec!["java.util.UUID"]);
}

#[test]
fn GeneratorConfig___from_json___rejects_unknown_key() {
    let result = GeneratorConfig::from_json(br#"{"output": "x"}"#);

    assert!(matches!(result, Err(CodegenError::Config(_))));
}

#[test]
fn SupportedTypesConfig___build___extends_defaults() {
    let config = SupportedTypesConfig {
        basic: vec!["java.util.UUID".into()],
        collections: vec!["java.util.Collection".into()],
        replace: false,
    };

    let types = config.build().unwrap();

    assert!(types.is_basic("java.util.UUID"));
    assert!(types.is_basic("java.lang.String"));
    assert!(types.is_collection("java.util.Collection"));
    assert!(types.is_collection("java.util.List"));
}

#[test]
fn SupportedTypesConfig___build_with_replace___starts_empty() {
    let config = SupportedTypesConfig {
        basic: vec!["java.lang.String".into()],
        collections: Vec::new(),
        replace: true,
    };

    let types = config.build().unwrap();

    assert!(types.is_basic("java.lang.String"));
    assert!(!types.is_basic("int"));
    assert!(!types.is_collection("java.util.List"));
}

#[test]
fn SupportedTypesConfig___build___trims_entries() {
    let config = SupportedTypesConfig {
        basic: vec!["  java.util.UUID ".into()],
        ..SupportedTypesConfig::default()
    };

    assert!(config.build().unwrap().is_basic("java.util.UUID"));
}

#[test_case(""; "empty")]
#[test_case("   "; "blank")]
#[test_case("java.util .UUID"; "inner whitespace")]
fn SupportedTypesConfig___build___rejects_bad_entry(entry: &str) {
    let config = SupportedTypesConfig {
        basic: vec![entry.into()],
        ..SupportedTypesConfig::default()
    };

    assert!(matches!(config.build(), Err(CodegenError::Config(_))));
}
