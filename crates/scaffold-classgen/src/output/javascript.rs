//! JavaScript (ES6 class syntax) backend.
//!
//! Fields render as class fields, statics with the `static` keyword and
//! stubs return `null`. JavaScript class bodies cannot hold a plain
//! nested `class` declaration, so nested classes render as static class
//! expressions (`static Seed = class { ... };`), keeping the definition
//! inside the outer braces. No visibility keywords; names pass through
//! unchanged.

use super::capitalize;
use crate::indent::Indent;
use crate::ir::{Class, Field, Method, Package};
use crate::traits::Generator;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Static instance of the JavaScript generator for registry.
pub static JAVASCRIPT_GENERATOR: JavaScriptGenerator = JavaScriptGenerator;

pub struct JavaScriptGenerator;

impl Generator for JavaScriptGenerator {
    fn language(&self) -> &'static str {
        "js_es6"
    }

    fn extension(&self) -> &'static str {
        "js"
    }

    fn generate(&self, package: &Package) -> BTreeMap<String, String> {
        generate_javascript(package)
    }
}

/// Generate JavaScript source for every top-level class in `package`.
pub fn generate_javascript(package: &Package) -> BTreeMap<String, String> {
    let indent = Indent::for_spaces(package.use_spaces);
    package
        .classes
        .iter()
        .map(|class| (class.name.clone(), emit_class(class, &indent) + "\n"))
        .collect()
}

fn emit_class(class: &Class, indent: &Indent) -> String {
    let extends = match &class.parent {
        Some(parent) if !parent.name.is_empty() => format!("extends {} ", parent.name),
        _ => String::new(),
    };
    format!(
        "class {} {}{{{}}}",
        class.name,
        extends,
        emit_body(class, indent)
    )
}

fn emit_nested(class: &Class, indent: &Indent) -> String {
    let extends = match &class.parent {
        Some(parent) if !parent.name.is_empty() => format!("extends {} ", parent.name),
        _ => String::new(),
    };
    format!(
        "static {} = class {}{{{}}};",
        class.name,
        extends,
        emit_body(class, indent)
    )
}

fn emit_body(class: &Class, indent: &Indent) -> String {
    let mut parts: Vec<String> = Vec::new();

    let field_lines: Vec<String> = class.fields.iter().map(emit_field).collect();
    if !field_lines.is_empty() {
        parts.push(field_lines.join("\n"));
    }

    for method in &class.methods {
        parts.push(emit_method(method, indent));
    }

    for field in &class.fields {
        if field.getter {
            parts.push(format!(
                "get{}() {{\n{}return this.{};\n}}",
                capitalize(&field.name),
                indent.unit(),
                field.name
            ));
        }
        if field.setter {
            let cap = capitalize(&field.name);
            parts.push(format!(
                "set{}(new{}) {{\n{}this.{} = new{};\n}}",
                cap,
                cap,
                indent.unit(),
                field.name,
                cap
            ));
        }
    }

    for inner in &class.classes {
        parts.push(emit_nested(inner, indent));
    }

    if parts.is_empty() {
        return String::new();
    }
    format!("\n{}\n", indent.shift(&parts.join("\n\n"), 1))
}

fn emit_field(field: &Field) -> String {
    let mut out = String::new();
    if field.is_static {
        out.push_str("static ");
    }
    out.push_str(&field.name);
    if !field.default.is_empty() {
        out.push_str(" = ");
        out.push_str(&field.default);
    }
    out.push(';');
    out
}

fn emit_method(method: &Method, indent: &Indent) -> String {
    let mut out = String::new();
    if method.is_static {
        out.push_str("static ");
    }
    out.push_str(&method.name);
    out.push('(');
    for (i, parameter) in method.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&parameter.name);
    }
    out.push_str(") {");
    if !method.ret.is_empty() {
        write!(out, "\n{}return null;\n", indent.unit()).unwrap();
    }
    out.push('}');
    out
}
