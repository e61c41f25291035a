//! Java source rendering backend.
//!
//! Renders a [`GeneratedUnit`] as a `public final` utility class with a
//! private constructor and `public static` routines, four-space indentation.
//!
//! Imports are sorted and de-duplicated. `java.lang` types, types from the
//! generated package and default-package types are never imported. When two
//! referenced types share a simple name, a same-package type wins over a
//! `java.lang` one, an implicitly visible type wins over an imported one, and
//! otherwise the first in sorted order is imported. The rest are written fully
//! qualified.

use crate::emit::{EmissionBackend, Expr, GeneratedUnit, Instruction, Routine, TypeName};
use crate::naming::{package_path, qualify};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &str = "    ";

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Generated by connmodel. Do not edit.";

/// Path of the source file for `unit`, relative to a source root.
pub fn source_path(unit: &GeneratedUnit) -> PathBuf {
    package_path(&unit.package).join(format!("{}.java", unit.class_name))
}

/// Render `unit` as a Java compilation unit.
pub fn render_unit(unit: &GeneratedUnit) -> String {
    let imports = Imports::resolve(unit);
    let mut out = String::new();

    out.push_str(GENERATED_HEADER);
    out.push('\n');
    if !unit.package.is_empty() {
        out.push_str(&format!("package {};\n", unit.package));
    }
    out.push('\n');

    if !imports.imported.is_empty() {
        for qualified in &imports.imported {
            out.push_str(&format!("import {qualified};\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!("public final class {} {{\n\n", unit.class_name));
    out.push_str(&format!("{INDENT}private {}() {{\n", unit.class_name));
    out.push_str(&format!("{INDENT}}}\n"));

    for routine in &unit.routines {
        out.push('\n');
        render_routine(&mut out, routine, &imports);
    }

    out.push_str("}\n");
    out
}

fn render_routine(out: &mut String, routine: &Routine, imports: &Imports) {
    let parameters = routine
        .parameters
        .iter()
        .map(|p| format!("{} {}", imports.type_name(&p.ty), p.name))
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&format!(
        "{INDENT}public static {} {}({parameters}) {{\n",
        imports.type_name(&routine.return_type),
        routine.name
    ));
    render_block(out, &routine.body, imports, 2);
    out.push_str(&format!("{INDENT}}}\n"));
}

fn render_block(out: &mut String, body: &[Instruction], imports: &Imports, depth: usize) {
    let indent = INDENT.repeat(depth);
    for instruction in body {
        match instruction {
            Instruction::Declare { ty, name, init } => {
                out.push_str(&format!(
                    "{indent}{} {name} = {};\n",
                    imports.type_name(ty),
                    imports.expr(init)
                ));
            }
            Instruction::Call(expr) => {
                out.push_str(&format!("{indent}{};\n", imports.expr(expr)));
            }
            Instruction::If { condition, body } => {
                out.push_str(&format!("{indent}if ({}) {{\n", imports.expr(condition)));
                render_block(out, body, imports, depth + 1);
                out.push_str(&format!("{indent}}}\n"));
            }
            Instruction::Return(expr) => {
                out.push_str(&format!("{indent}return {};\n", imports.expr(expr)));
            }
        }
    }
}

/// Simple-name resolution for one compilation unit.
struct Imports {
    /// Qualified names written with an import statement, sorted
    imported: BTreeSet<String>,
    /// Qualified names that may be written by simple name
    simple: BTreeSet<String>,
}

impl Imports {
    fn resolve(unit: &GeneratedUnit) -> Self {
        let mut referenced = BTreeSet::new();
        for routine in &unit.routines {
            collect_type(&routine.return_type, &mut referenced);
            for parameter in &routine.parameters {
                collect_type(&parameter.ty, &mut referenced);
            }
            collect_block(&routine.body, &mut referenced);
        }

        let mut claimed: BTreeMap<String, String> = BTreeMap::new();
        claimed.insert(
            unit.class_name.clone(),
            qualify(&unit.package, &unit.class_name),
        );

        let implicit = |package: &str| {
            package.is_empty() || package == "java.lang" || package == unit.package
        };

        let mut simple = BTreeSet::new();
        let mut imported = BTreeSet::new();

        // Implicitly visible types claim their simple names first; same-package
        // types shadow java.lang.
        let (mut visible, foreign): (Vec<_>, Vec<_>) = referenced
            .into_iter()
            .partition(|(package, _): &(String, String)| implicit(package));
        visible.sort_by_key(|(package, _)| package == "java.lang" && unit.package != "java.lang");

        for (package, name) in visible.into_iter().chain(foreign) {
            let qualified = qualify(&package, &name);
            match claimed.get(&name) {
                Some(owner) if *owner != qualified => continue,
                Some(_) => {}
                None => {
                    claimed.insert(name.clone(), qualified.clone());
                }
            }
            if !implicit(&package) {
                imported.insert(qualified.clone());
            }
            simple.insert(qualified);
        }

        Self { imported, simple }
    }

    fn type_name(&self, ty: &TypeName) -> String {
        match ty {
            TypeName::Primitive(primitive) => primitive.keyword().to_string(),
            TypeName::Array(component) => format!("{}[]", self.type_name(component)),
            TypeName::Class { package, name } => {
                let qualified = qualify(package, name);
                if self.simple.contains(&qualified) {
                    name.clone()
                } else {
                    qualified
                }
            }
        }
    }

    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Var(name) => name.clone(),
            Expr::Str(value) => quote(value),
            Expr::Bool(value) => value.to_string(),
            Expr::ClassLiteral(ty) => format!("{}.class", self.type_name(ty)),
            Expr::StaticField { owner, field } => format!("{}.{field}", self.type_name(owner)),
            Expr::New { ty, args } => format!("new {}({})", self.type_name(ty), self.args(args)),
            Expr::Call {
                target,
                method,
                args,
            } => format!("{}.{method}({})", self.expr(target), self.args(args)),
            Expr::NotNull(inner) => format!("{} != null", self.expr(inner)),
        }
    }

    fn args(&self, args: &[Expr]) -> String {
        args.iter()
            .map(|arg| self.expr(arg))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn collect_type(ty: &TypeName, out: &mut BTreeSet<(String, String)>) {
    match ty {
        TypeName::Primitive(_) => {}
        TypeName::Array(component) => collect_type(component, out),
        TypeName::Class { package, name } => {
            out.insert((package.clone(), name.clone()));
        }
    }
}

fn collect_block(body: &[Instruction], out: &mut BTreeSet<(String, String)>) {
    for instruction in body {
        match instruction {
            Instruction::Declare { ty, init, .. } => {
                collect_type(ty, out);
                collect_expr(init, out);
            }
            Instruction::Call(expr) | Instruction::Return(expr) => collect_expr(expr, out),
            Instruction::If { condition, body } => {
                collect_expr(condition, out);
                collect_block(body, out);
            }
        }
    }
}

fn collect_expr(expr: &Expr, out: &mut BTreeSet<(String, String)>) {
    match expr {
        Expr::Var(_) | Expr::Str(_) | Expr::Bool(_) => {}
        Expr::ClassLiteral(ty) => collect_type(ty, out),
        Expr::StaticField { owner, .. } => collect_type(owner, out),
        Expr::New { ty, args } => {
            collect_type(ty, out);
            args.iter().for_each(|arg| collect_expr(arg, out));
        }
        Expr::Call { target, args, .. } => {
            collect_expr(target, out);
            args.iter().for_each(|arg| collect_expr(arg, out));
        }
        Expr::NotNull(inner) => collect_expr(inner, out),
    }
}

/// Java string literal for `value`.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Writes each unit to `<root>/<package path>/<Class>.java`.
#[derive(Debug)]
pub struct JavaFileBackend {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl JavaFileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files written so far, in emission order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl EmissionBackend for JavaFileBackend {
    fn emit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        let path = self.root.join(source_path(unit));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, render_unit(unit))?;
        debug!(path = %path.display(), "Wrote generated source");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps rendered sources in memory, keyed by qualified class name.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    sources: BTreeMap<String, String>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.sources.get(qualified_name).map(String::as_str)
    }

    pub fn sources(&self) -> &BTreeMap<String, String> {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl EmissionBackend for InMemoryBackend {
    fn emit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        self.sources
            .insert(unit.qualified_name(), render_unit(unit));
        Ok(())
    }
}
