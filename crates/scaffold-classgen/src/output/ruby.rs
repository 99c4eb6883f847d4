//! Ruby backend.
//!
//! Blocks close with `end` instead of braces. Fields render as instance
//! variables (`@name`, or `@@name` when static), statics as `def self.`,
//! stubs as `return nil`. Accessors follow the Ruby reader/writer naming
//! (`def colour` / `def colour=`). Visibility keywords are not rendered;
//! names pass through unchanged.

use crate::indent::Indent;
use crate::ir::{Class, Field, Method, Package};
use crate::traits::Generator;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Static instance of the Ruby generator for registry.
pub static RUBY_GENERATOR: RubyGenerator = RubyGenerator;

pub struct RubyGenerator;

impl Generator for RubyGenerator {
    fn language(&self) -> &'static str {
        "ruby"
    }

    fn extension(&self) -> &'static str {
        "rb"
    }

    fn generate(&self, package: &Package) -> BTreeMap<String, String> {
        generate_ruby(package)
    }
}

/// Generate Ruby source for every top-level class in `package`.
pub fn generate_ruby(package: &Package) -> BTreeMap<String, String> {
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
            format!("class {} < {}", class.name, parent.name)
        }
        _ => format!("class {}", class.name),
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
                "def {}\n{}return @{}\nend",
                field.name,
                indent.unit(),
                field.name
            ));
        }
        if field.setter {
            parts.push(format!(
                "def {}=(value)\n{}@{} = value\nend",
                field.name,
                indent.unit(),
                field.name
            ));
        }
    }

    for inner in &class.classes {
        parts.push(emit_class(inner, indent));
    }

    if parts.is_empty() {
        return format!("{}\nend", header);
    }
    format!(
        "{}\n{}\nend",
        header,
        indent.shift(&parts.join("\n\n"), 1)
    )
}

fn emit_field(field: &Field) -> String {
    let sigil = if field.is_static { "@@" } else { "@" };
    let value = if field.default.is_empty() {
        "nil"
    } else {
        &field.default
    };
    format!("{}{} = {}", sigil, field.name, value)
}

fn emit_method(method: &Method, indent: &Indent) -> String {
    let mut out = String::from("def ");
    if method.is_static {
        out.push_str("self.");
    }
    out.push_str(&method.name);
    if !method.parameters.is_empty() {
        out.push('(');
        for (i, parameter) in method.parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&parameter.name);
        }
        out.push(')');
    }
    if !method.ret.is_empty() {
        write!(out, "\n{}return nil", indent.unit()).unwrap();
    }
    out.push_str("\nend");
    out
}
