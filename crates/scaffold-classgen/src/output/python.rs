//! Python backend.
//!
//! Indentation is the block structure, so the shared skeleton renders as
//! suites instead of brace pairs. Fields become class attributes (with
//! `None` standing in for a missing initializer), static methods get
//! `@staticmethod`, stubs are `pass` / `return None`. Python has no
//! visibility keywords; names pass through unchanged.

use super::capitalize;
use crate::indent::Indent;
use crate::ir::{Class, Field, Method, Package};
use crate::traits::Generator;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Static instance of the Python generator for registry.
pub static PYTHON_GENERATOR: PythonGenerator = PythonGenerator;

pub struct PythonGenerator;

impl Generator for PythonGenerator {
    fn language(&self) -> &'static str {
        "python"
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn generate(&self, package: &Package) -> BTreeMap<String, String> {
        generate_python(package)
    }
}

/// Generate Python source for every top-level class in `package`.
pub fn generate_python(package: &Package) -> BTreeMap<String, String> {
    let indent = Indent::for_spaces(package.use_spaces);
    package
        .classes
        .iter()
        .map(|class| (class.name.clone(), emit_class(class, &indent) + "\n"))
        .collect()
}

fn emit_class(class: &Class, indent: &Indent) -> String {
    let header = match &class.parent {
        Some(parent) if !parent.name.is_empty() => {
            format!("class {}({}):", class.name, parent.name)
        }
        _ => format!("class {}:", class.name),
    };

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
                "def get{}(self):\n{}return self.{}",
                capitalize(&field.name),
                indent.unit(),
                field.name
            ));
        }
        if field.setter {
            let cap = capitalize(&field.name);
            parts.push(format!(
                "def set{}(self, new{}):\n{}self.{} = new{}",
                cap,
                cap,
                indent.unit(),
                field.name,
                cap
            ));
        }
    }

    for inner in &class.classes {
        parts.push(emit_class(inner, indent));
    }

    if parts.is_empty() {
        parts.push("pass".to_string());
    }

    format!("{}\n{}", header, indent.shift(&parts.join("\n\n"), 1))
}

fn emit_field(field: &Field) -> String {
    let value = if field.default.is_empty() {
        "None"
    } else {
        &field.default
    };
    format!("{} = {}", field.name, value)
}

fn emit_method(method: &Method, indent: &Indent) -> String {
    let mut out = String::new();
    if method.is_static {
        out.push_str("@staticmethod\n");
    }
    out.push_str("def ");
    out.push_str(&method.name);
    out.push('(');
    if !method.is_static {
        out.push_str("self");
        if !method.parameters.is_empty() {
            out.push_str(", ");
        }
    }
    for (i, parameter) in method.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&parameter.name);
    }
    out.push_str("):");
    let body = if method.ret.is_empty() {
        "pass"
    } else {
        "return None"
    };
    write!(out, "\n{}{}", indent.unit(), body).unwrap();
    out
}
