//! C++ backend (header skeletons, `.h`).
//!
//! Members are grouped under `public:` / `protected:` / `private:`
//! labels (declaration order preserved within a section; empty and
//! `"default"` access land in `private`). The semantic `string` type
//! maps to `std::string`, `&`-pass parameters render as references and
//! non-void stubs return a default-constructed value.

use super::capitalize;
use crate::indent::Indent;
use crate::ir::{Class, Field, Method, Package};
use crate::traits::Generator;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Static instance of the C++ generator for registry.
pub static CPP_GENERATOR: CppGenerator = CppGenerator;

pub struct CppGenerator;

impl Generator for CppGenerator {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn extension(&self) -> &'static str {
        "h"
    }

    fn generate(&self, package: &Package) -> BTreeMap<String, String> {
        generate_cpp(package)
    }
}

/// Generate C++ header source for every top-level class in `package`.
pub fn generate_cpp(package: &Package) -> BTreeMap<String, String> {
    let indent = Indent::for_spaces(package.use_spaces);
    package
        .classes
        .iter()
        .map(|class| (class.name.clone(), emit_class(class, &indent) + "\n"))
        .collect()
}

fn emit_class(class: &Class, indent: &Indent) -> String {
    let inherit = match &class.parent {
        Some(parent) if !parent.name.is_empty() => {
            if parent.access.is_empty() {
                format!(" : {}", parent.name)
            } else {
                format!(" : {} {}", parent.access, parent.name)
            }
        }
        _ => String::new(),
    };

    let mut body = String::new();
    for section in ["public", "protected", "private"] {
        let mut parts: Vec<String> = Vec::new();

        let field_lines: Vec<String> = class
            .fields
            .iter()
            .filter(|f| section_of(&f.access) == section)
            .map(emit_field)
            .collect();
        if !field_lines.is_empty() {
            parts.push(indent.shift(&field_lines.join("\n"), 1));
        }

        for method in class
            .methods
            .iter()
            .filter(|m| section_of(&m.access) == section)
        {
            parts.push(indent.shift(&emit_method(method, indent), 1));
        }

        // Accessors are public by convention.
        if section == "public" {
            for field in &class.fields {
                if field.getter {
                    parts.push(indent.shift(&emit_getter(field, indent), 1));
                }
                if field.setter {
                    parts.push(indent.shift(&emit_setter(field, indent), 1));
                }
            }
        }

        for inner in class
            .classes
            .iter()
            .filter(|c| section_of(&c.access) == section)
        {
            parts.push(indent.shift(&emit_class(inner, indent), 1));
        }

        if !parts.is_empty() {
            body.push('\n');
            body.push_str(section);
            body.push_str(":\n");
            body.push_str(&parts.join("\n\n"));
            body.push('\n');
        }
    }

    format!("class {}{} {{{}}};", class.name, inherit, body)
}

fn emit_field(field: &Field) -> String {
    let mut out = String::new();
    if field.is_static {
        out.push_str("static ");
    }
    if field.is_const {
        out.push_str("const ");
    }
    out.push_str(&map_type(&field.ty));
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
    let mut out = String::new();
    if method.is_static {
        out.push_str("static ");
    }
    let ret = map_type(&method.ret);
    if ret.is_empty() {
        out.push_str("void ");
    } else {
        out.push_str(&ret);
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
        out.push_str(&map_type(&parameter.ty));
        out.push_str(&parameter.pass);
        out.push(' ');
        out.push_str(&parameter.name);
    }
    out.push(')');
    if method.is_const {
        out.push_str(" const");
    }
    out.push_str(" {");
    if !ret.is_empty() {
        write!(out, "\n{}return {}();\n", indent.unit(), ret).unwrap();
    }
    out.push('}');
    out
}

fn emit_getter(field: &Field, indent: &Indent) -> String {
    format!(
        "{} get{}() const {{\n{}return {};\n}}",
        map_type(&field.ty),
        capitalize(&field.name),
        indent.unit(),
        field.name,
    )
}

fn emit_setter(field: &Field, indent: &Indent) -> String {
    let cap = capitalize(&field.name);
    format!(
        "void set{}({} new{}) {{\n{}{} = new{};\n}}",
        cap,
        map_type(&field.ty),
        cap,
        indent.unit(),
        field.name,
        cap,
    )
}

fn section_of(access: &str) -> &'static str {
    match access {
        "public" => "public",
        "protected" => "protected",
        _ => "private",
    }
}

fn map_type(ty: &str) -> String {
    match ty {
        "string" => "std::string".to_string(),
        other => other.to_string(),
    }
}
