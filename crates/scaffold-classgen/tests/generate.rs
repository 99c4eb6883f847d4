//! Integration tests for scaffold-classgen.
//!
//! The `apple` fixtures describe the same model in all three input
//! formats: an `Apple` class extending `Fruit`, three fields, three
//! methods and a nested `Seed` class.

use scaffold_classgen::ir::{Class, Field, Method, Package};
use scaffold_classgen::{InputFormat, generator_for_language, generators, parse};

fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}", name);
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {} not found", name))
}

fn apple_package() -> Package {
    parse(InputFormat::Json, &load_fixture("apple.json")).unwrap()
}

// === Generator contract ===

#[test]
fn one_entry_per_top_level_class() {
    let package = Package::new(vec![
        Class::new("Apple").with_class(Class::new("Seed")),
        Class::new("Basket"),
    ]);

    for generator in generators() {
        let files = generator.generate(&package);
        assert_eq!(files.len(), 2, "backend {}", generator.language());
        assert!(files.contains_key("Apple"));
        assert!(files.contains_key("Basket"));
        // Nested classes never get their own entry.
        assert!(!files.contains_key("Seed"));
    }
}

#[test]
fn generation_is_idempotent() {
    let package = apple_package();
    for generator in generators() {
        let first = generator.generate(&package);
        let second = generator.generate(&package);
        assert_eq!(first, second, "backend {}", generator.language());
    }
}

#[test]
fn brace_balance() {
    let package = apple_package();
    for lang in ["go", "java", "cpp", "js_es6", "csharp"] {
        let generator = generator_for_language(lang).unwrap();
        for (name, code) in generator.generate(&package) {
            assert_eq!(
                code.matches('{').count(),
                code.matches('}').count(),
                "backend {} class {}",
                lang,
                name
            );
        }
    }
}

#[test]
fn duplicate_class_name_overwrites() {
    let package = Package::new(vec![
        Class::new("Apple").with_field(Field::new("first", "int")),
        Class::new("Apple").with_field(Field::new("second", "int")),
    ]);

    let files = generator_for_language("java").unwrap().generate(&package);
    assert_eq!(files.len(), 1);
    assert!(files["Apple"].contains("second"));
    assert!(!files["Apple"].contains("first"));
}

#[test]
fn unknown_language_has_no_generator() {
    assert!(generator_for_language("fortran").is_none());
}

// === Visibility rules ===

#[test]
fn go_capitalizes_public_names_only() {
    let package = apple_package();
    let code = &generator_for_language("go").unwrap().generate(&package)["Apple"];
    assert!(code.contains("Colour string"));
    assert!(code.contains("size int"));
    assert!(code.contains("func (Apple) GetColor() string"));
    assert!(code.contains("func (Apple) print("));
}

#[test]
fn java_default_access_is_private() {
    let class = Class::new("Widget")
        .with_field(Field::new("a", "int"))
        .with_field(Field::new("b", "int").with_access("default"))
        .with_field(Field::new("c", "int").with_access("public"));

    let code = &generator_for_language("java")
        .unwrap()
        .generate(&Package::new(vec![class]))["Widget"];
    assert!(code.contains("private int a;"));
    assert!(code.contains("private int b;"));
    assert!(code.contains("public int c;"));
}

// === Type mapping ===

#[test]
fn string_type_spelling_per_backend() {
    let package = apple_package();

    let java = &generator_for_language("java").unwrap().generate(&package)["Apple"];
    assert!(java.contains("public String colour"));

    let go = &generator_for_language("go").unwrap().generate(&package)["Apple"];
    assert!(go.contains("Colour string"));

    let cpp = &generator_for_language("cpp").unwrap().generate(&package)["Apple"];
    assert!(cpp.contains("std::string colour"));

    let csharp = &generator_for_language("csharp").unwrap().generate(&package)["Apple"];
    assert!(csharp.contains("public string colour"));
}

// === Accessor synthesis ===

#[test]
fn accessors_synthesized_exactly_once() {
    let package = apple_package();
    let code = &generator_for_language("java").unwrap().generate(&package)["Apple"];

    assert_eq!(code.matches("public int getSize() {").count(), 1);
    assert_eq!(code.matches("return size;").count(), 1);
    assert_eq!(code.matches("public void setSize(int newSize) {").count(), 1);
    assert_eq!(code.matches("size = newSize;").count(), 1);
}

// === End-to-end scenarios ===

#[test]
fn apple_under_java() {
    let package = apple_package();
    let code = &generator_for_language("java").unwrap().generate(&package)["Apple"];

    assert!(code.starts_with("class Apple extends Fruit {"));
    assert!(code.contains("public String colour = \"red\";"));
    assert!(code.contains("public static String sort = \"Golden\";"));
    assert!(code.contains("private int size = 1;"));
    assert!(code.contains("private void print(const String colour) {}"));
    assert!(code.contains("protected static int getSize() {"));
    assert!(code.contains("return new int();"));
}

#[test]
fn apple_under_go() {
    let package = apple_package();
    let code = &generator_for_language("go").unwrap().generate(&package)["Apple"];

    // No inheritance clause in Go.
    assert!(!code.contains("Fruit"));
    assert!(code.starts_with("type Apple struct {\n\tColour string\n\tSort string\n\tsize int\n}"));
    assert!(code.contains("func (Apple) print(colour string) {}"));
}

#[test]
fn nested_class_renders_one_level_deeper() {
    let package = apple_package();
    let code = &generator_for_language("java").unwrap().generate(&package)["Apple"];

    assert!(code.contains("\tclass Seed {"));
    assert!(code.contains("\t\tpublic int size;"));
    assert!(code.contains("\t\tpublic static int transform() {"));
}

// === Input format agreement ===

#[test]
fn all_formats_produce_the_same_output() {
    let from_json = parse(InputFormat::Json, &load_fixture("apple.json")).unwrap();
    let from_xml = parse(InputFormat::Xml, &load_fixture("apple.xml")).unwrap();
    let from_yaml = parse(InputFormat::Yaml, &load_fixture("apple.yml")).unwrap();

    for generator in generators() {
        let json_out = generator.generate(&from_json);
        assert_eq!(json_out, generator.generate(&from_xml), "xml vs json under {}", generator.language());
        assert_eq!(json_out, generator.generate(&from_yaml), "yaml vs json under {}", generator.language());
    }
}

// === Indentation ===

#[test]
fn spaces_flag_applies_to_every_backend() {
    let mut package = apple_package();
    package.use_spaces = true;

    for generator in generators() {
        let files = generator.generate(&package);
        let code = &files["Apple"];
        assert!(!code.contains('\t'), "backend {}", generator.language());
        assert!(code.contains("    "), "backend {}", generator.language());
    }
}

// === Malformed input is not a panic ===

#[test]
fn empty_class_name_yields_malformed_output_not_error() {
    let package = Package::new(vec![Class::new("")]);
    for generator in generators() {
        let files = generator.generate(&package);
        assert_eq!(files.len(), 1);
        assert!(files.contains_key(""));
    }
}

#[test]
fn unrecognized_access_passes_through_in_java() {
    let class = Class::new("Widget").with_method(Method::new("poke").with_access("internal"));
    let code = &generator_for_language("java")
        .unwrap()
        .generate(&Package::new(vec![class]))["Widget"];
    assert!(code.contains("internal void poke() {}"));
}
