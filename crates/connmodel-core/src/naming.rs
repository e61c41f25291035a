//! Naming convention utilities for code generation.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `"  "` | [`non_blank`] | `None` |
//! | `com.example` | [`package_path`] | `com/example` |
//! | `com.example.User` | [`simple_name`] | `User` |

use std::path::PathBuf;

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use connmodel_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("helloWorld"), "HelloWorld");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Treat blank marker values as absent.
///
/// # Examples
///
/// ```
/// use connmodel_core::naming::non_blank;
///
/// assert_eq!(non_blank("name"), Some("name"));
/// assert_eq!(non_blank("   "), None);
/// ```
pub fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Directory path for a Java package, relative to a source root.
pub fn package_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Last segment of a dotted name.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Join a package and a simple name, omitting the dot for the default package.
pub fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}
