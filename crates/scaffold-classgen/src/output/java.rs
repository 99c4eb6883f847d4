//! Java backend.
//!
//! Visibility is an explicit keyword, defaulting to `private` when the
//! model leaves it empty or says `"default"`. The semantic `string` type
//! maps to `String`, inheritance renders as `extends`, and non-void stub
//! bodies return a freshly constructed `new <Type>()`.
//!
//! The model must be validated before calling into this backend; access
//! strings are emitted verbatim.

use super::capitalize;
use crate::indent::Indent;
use crate::ir::{Class, Field, Method, Package};
use crate::traits::Generator;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Static instance of the Java generator for registry.
pub static JAVA_GENERATOR: JavaGenerator = JavaGenerator;

pub struct JavaGenerator;

impl Generator for JavaGenerator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn generate(&self, package: &Package) -> BTreeMap<String, String> {
        generate_java(package)
    }
}

/// Generate Java source for every top-level class in `package`.
pub fn generate_java(package: &Package) -> BTreeMap<String, String> {
    let indent = Indent::for_spaces(package.use_spaces);
    package
        .classes
        .iter()
        .map(|class| (class.name.clone(), emit_class(class, &indent) + "\n"))
        .collect()
}

fn emit_class(class: &Class, indent: &Indent) -> String {
    let inherits = match &class.parent {
        Some(parent) if !parent.name.is_empty() => format!("extends {} ", parent.name),
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

    // Exactly one section owns the blank line before the closing brace:
    // the last populated one.
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
    let mut out = visibility(&method.access);
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
        out.push(' ');
        out.push_str(&parameter.name);
    }
    out.push_str(") {");
    if !ret.is_empty() {
        write!(out, "\n{}return new {}();\n", indent.unit(), ret).unwrap();
    }
    out.push('}');
    out
}

fn emit_accessors(fields: &[Field], indent: &Indent) -> String {
    let mut out = String::new();
    for field in fields {
        let ty = map_type(&field.ty);
        let cap = capitalize(&field.name);
        if field.getter {
            write!(
                out,
                "\npublic {} get{}() {{\n{}return {};\n}}\n",
                ty,
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
                ty,
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

fn map_type(ty: &str) -> String {
    match ty {
        "string" => "String".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Parameter;

    fn apple() -> Class {
        Class::new("Apple")
            .extends("Fruit", "public")
            .with_field(
                Field::new("colour", "string")
                    .with_access("public")
                    .with_default("\"red\""),
            )
            .with_field(Field::new("size", "int").with_default("1"))
    }

    #[test]
    fn class_header_and_fields() {
        let code = &generate_java(&Package::new(vec![apple()]))["Apple"];
        assert!(code.starts_with("class Apple extends Fruit {"));
        assert!(code.contains("\tpublic String colour = \"red\";\n"));
        // Empty access defaults to private.
        assert!(code.contains("\tprivate int size = 1;\n"));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn no_parent_no_extends() {
        let code = &generate_java(&Package::new(vec![Class::new("Seed")]))["Seed"];
        assert!(code.starts_with("class Seed {"));
        assert!(!code.contains("extends"));
    }

    #[test]
    fn method_rendering() {
        let class = Class::new("Apple")
            .with_method(
                Method::new("print").with_access("private").with_parameter({
                    let mut p = Parameter::new("colour", "string");
                    p.is_const = true;
                    p
                }),
            )
            .with_method({
                let mut m = Method::new("getSize").returning("int").with_access("protected");
                m.is_static = true;
                m
            });

        let code = &generate_java(&Package::new(vec![class]))["Apple"];
        assert!(code.contains("\tprivate void print(const String colour) {}\n"));
        assert!(code.contains("\tprotected static int getSize() {\n\t\treturn new int();\n\t}\n"));
    }

    #[test]
    fn string_return_maps_and_constructs_string() {
        let class =
            Class::new("Apple").with_method(Method::new("getColor").returning("string").with_access("public"));
        let code = &generate_java(&Package::new(vec![class]))["Apple"];
        assert!(code.contains("public String getColor() {"));
        assert!(code.contains("return new String();"));
    }

    #[test]
    fn static_before_const_on_fields() {
        let mut field = Field::new("sort", "string").with_access("public");
        field.is_static = true;
        field.is_const = true;
        let code = &generate_java(&Package::new(vec![Class::new("Apple").with_field(field)]))["Apple"];
        assert!(code.contains("public static const String sort;"));
    }

    #[test]
    fn accessor_synthesis() {
        let class = Class::new("Apple").with_field(
            Field::new("colour", "string")
                .with_access("private")
                .with_accessors(true, true),
        );

        let code = &generate_java(&Package::new(vec![class]))["Apple"];
        assert!(code.contains("\tpublic String getColour() {\n\t\treturn colour;\n\t}\n"));
        assert!(code.contains(
            "\tpublic void setColour(String newColour) {\n\t\tcolour = newColour;\n\t}\n"
        ));
    }

    #[test]
    fn nested_class_is_indented_inside_braces() {
        let class = Class::new("Apple")
            .with_field(Field::new("size", "int"))
            .with_class(Class::new("Seed").with_field(Field::new("weight", "int")));

        let files = generate_java(&Package::new(vec![class]));
        assert_eq!(files.len(), 1);
        let code = &files["Apple"];
        assert!(code.contains("\tclass Seed {\n"));
        assert!(code.contains("\t\tprivate int weight;"));
        // Nested definition closes before the outer brace.
        assert!(code.ends_with("\t}\n\n}\n"));
    }

    #[test]
    fn brace_balance() {
        let code = &generate_java(&Package::new(vec![
            apple().with_class(Class::new("Seed").with_method(Method::new("grow"))),
        ]))["Apple"];
        let open = code.matches('{').count();
        let close = code.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn spaces_flag_changes_indent() {
        let mut package = Package::new(vec![apple()]);
        package.use_spaces = true;
        let code = &generate_java(&package)["Apple"];
        assert!(code.contains("\n    public String colour = \"red\";\n"));
        assert!(!code.contains('\t'));
    }
}
