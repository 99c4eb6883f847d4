//! C# backend.
//!
//! Close to the Java rendering: explicit visibility keywords defaulting
//! to `private`, `static` before `const`, `return new <Type>();` stubs.
//! Differences: inheritance spells `: Parent` and the semantic `string`
//! type is already the native C# spelling, so no type mapping applies.

use super::capitalize;
use crate::indent::Indent;
use crate::ir::{Class, Field, Method, Package};
use crate::traits::Generator;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Static instance of the C# generator for registry.
pub static CSHARP_GENERATOR: CSharpGenerator = CSharpGenerator;

pub struct CSharpGenerator;

impl Generator for CSharpGenerator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn extension(&self) -> &'static str {
        "cs"
    }

    fn generate(&self, package: &Package) -> BTreeMap<String, String> {
        generate_csharp(package)
    }
}

/// Generate C# source for every top-level class in `package`.
pub fn generate_csharp(package: &Package) -> BTreeMap<String, String> {
    let indent = Indent::for_spaces(package.use_spaces);
    package
        .classes
        .iter()
        .map(|class| (class.name.clone(), emit_class(class, &indent) + "\n"))
        .collect()
}

fn emit_class(class: &Class, indent: &Indent) -> String {
    let inherits = match &class.parent {
        Some(parent) if !parent.name.is_empty() => format!(": {} ", parent.name),
        _ => String::new(),
    };

    let mut fields = String::new();
    for field in &class.fields {
        fields.push_str(&emit_field(field, indent));
        fields.push('\n');
    }
    if !fields.is_empty() {
        fields.insert(0, '\n');
    }

    let mut methods = String::new();
    for method in &class.methods {
        methods.push('\n');
        methods.push_str(&indent.shift(&emit_method(method, indent), 1));
        methods.push('\n');
    }
    let accessors = emit_accessors(&class.fields, indent);
    if !accessors.is_empty() {
        methods.push_str(&indent.shift(&accessors, 1));
    }

    let mut classes = String::new();
    for inner in &class.classes {
        classes.push('\n');
        classes.push_str(&indent.shift(&emit_class(inner, indent), 1));
        classes.push('\n');
    }

    if !classes.is_empty() {
        classes.push('\n');
    } else if !methods.is_empty() {
        methods.push('\n');
    } else if !fields.is_empty() {
        fields.push('\n');
    }

    format!(
        "class {} {}{{{}{}{}}}",
        class.name, inherits, fields, methods, classes
    )
}

fn emit_field(field: &Field, indent: &Indent) -> String {
    let mut out = indent.unit().to_string();
    out.push_str(&visibility(&field.access));
    if field.is_static {
        out.push_str("static ");
    }
    if field.is_const {
        out.push_str("const ");
    }
    out.push_str(&field.ty);
    out.push(' ');
    out.push_str(&field.name);
    if !field.default.is_empty() {
        out.push_str(" = ");
        out.push_str(&field.default);
    }
    out.push(';');
    out
}

fn emit_method(method: &Method, indent: &Indent) -> String {
    let mut out = visibility(&method.access);
    if method.is_static {
        out.push_str("static ");
    }
    if method.ret.is_empty() {
        out.push_str("void ");
    } else {
        out.push_str(&method.ret);
        out.push(' ');
    }
    out.push_str(&method.name);
    out.push('(');
    for (i, parameter) in method.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if parameter.is_const {
            out.push_str("const ");
        }
        out.push_str(&parameter.ty);
        out.push(' ');
        out.push_str(&parameter.name);
    }
    out.push_str(") {");
    if !method.ret.is_empty() {
        write!(out, "\n{}return new {}();\n", indent.unit(), method.ret).unwrap();
    }
    out.push('}');
    out
}

fn emit_accessors(fields: &[Field], indent: &Indent) -> String {
    let mut out = String::new();
    for field in fields {
        let cap = capitalize(&field.name);
        if field.getter {
            write!(
                out,
                "\npublic {} get{}() {{\n{}return {};\n}}\n",
                field.ty,
                cap,
                indent.unit(),
                field.name
            )
            .unwrap();
        }
        if field.setter {
            write!(
                out,
                "\npublic void set{}({} new{}) {{\n{}{} = new{};\n}}\n",
                cap,
                field.ty,
                cap,
                indent.unit(),
                field.name,
                cap
            )
            .unwrap();
        }
    }
    out
}

fn visibility(access: &str) -> String {
    if access.is_empty() || access == "default" {
        "private ".to_string()
    } else {
        format!("{} ", access)
    }
}
