//! Go backend.
//!
//! Visibility is signalled by capitalization: `public` members get their
//! first letter uppercased, everything else keeps its name. Go has no
//! inheritance clause, no static/const keywords and no nested type
//! declarations, so the parent link is omitted and nested classes
//! flatten to sibling `type` blocks after the enclosing struct. Stub
//! bodies return `nil`.

use super::capitalize;
use crate::indent::Indent;
use crate::ir::{Class, Field, Method, Package};
use crate::traits::Generator;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Static instance of the Go generator for registry.
pub static GO_GENERATOR: GoGenerator = GoGenerator;

pub struct GoGenerator;

impl Generator for GoGenerator {
    fn language(&self) -> &'static str {
        "go"
    }

    fn extension(&self) -> &'static str {
        "go"
    }

    fn generate(&self, package: &Package) -> BTreeMap<String, String> {
        generate_go(package)
    }
}

/// Generate Go source for every top-level class in `package`.
pub fn generate_go(package: &Package) -> BTreeMap<String, String> {
    let indent = Indent::for_spaces(package.use_spaces);
    package
        .classes
        .iter()
        .map(|class| (class.name.clone(), emit_class(class, &indent) + "\n"))
        .collect()
}

fn emit_class(class: &Class, indent: &Indent) -> String {
    let mut fields = String::new();
    for field in &class.fields {
        fields.push_str(indent.unit());
        fields.push_str(&visible_name(&field.name, &field.access));
        fields.push(' ');
        fields.push_str(&field.ty);
        fields.push('\n');
    }
    if !fields.is_empty() {
        fields.insert(0, '\n');
    }

    let mut out = format!("type {} struct {{{}}}", class.name, fields);
    for method in &class.methods {
        out.push_str("\n\n");
        write!(out, "func ({}) {}", class.name, emit_method(method, indent)).unwrap();
    }
    for field in &class.fields {
        if field.getter {
            out.push_str("\n\n");
            out.push_str(&emit_getter(class, field, indent));
        }
        if field.setter {
            out.push_str("\n\n");
            out.push_str(&emit_setter(class, field, indent));
        }
    }
    for inner in &class.classes {
        out.push_str("\n\n");
        out.push_str(&emit_class(inner, indent));
    }
    out
}

fn emit_method(method: &Method, indent: &Indent) -> String {
    let mut out = visible_name(&method.name, &method.access);
    out.push('(');
    for (i, parameter) in method.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&parameter.name);
        out.push(' ');
        out.push_str(&parameter.ty);
    }
    out.push(')');
    if !method.ret.is_empty() {
        out.push(' ');
        out.push_str(&method.ret);
    }
    out.push_str(" {");
    if !method.ret.is_empty() {
        out.push('\n');
        out.push_str(indent.unit());
        out.push_str("return nil\n");
    }
    out.push('}');
    out
}

fn emit_getter(class: &Class, field: &Field, indent: &Indent) -> String {
    format!(
        "func (obj {}) Get{}() {} {{\n{}return obj.{}\n}}",
        class.name,
        capitalize(&field.name),
        field.ty,
        indent.unit(),
        visible_name(&field.name, &field.access),
    )
}

fn emit_setter(class: &Class, field: &Field, indent: &Indent) -> String {
    let cap = capitalize(&field.name);
    format!(
        "func (obj *{}) Set{}(new{} {}) {{\n{}obj.{} = new{}\n}}",
        class.name,
        cap,
        cap,
        field.ty,
        indent.unit(),
        visible_name(&field.name, &field.access),
        cap,
    )
}

fn visible_name(name: &str, access: &str) -> String {
    if access == "public" {
        capitalize(name)
    } else {
        name.to_string()
    }
}
