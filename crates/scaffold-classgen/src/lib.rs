//! Polyglot class-skeleton generation from a language-agnostic class model.
//!
//! `scaffold-classgen` converts a class description (name, fields,
//! methods, inheritance, nesting) into compilable source stubs for
//! several target languages.
//!
//! # Architecture
//!
//! ```text
//! Input Formats         IR              Output Backends
//! ─────────────     ────────────     ──────────────────
//! XML          ─┐                 ┌─> Go structs
//! JSON         ─┼─> Package ──────┼─> Java classes
//! YAML         ─┘   (ir.rs)       ├─> C++ headers
//!                                 ├─> Python classes
//!                                 ├─> Ruby classes
//!                                 ├─> JavaScript (ES6) classes
//!                                 └─> C# classes
//! ```
//!
//! # Example
//!
//! ```
//! use scaffold_classgen::{generator_for_language, parse_json};
//!
//! let package = parse_json(
//!     r#"{ "classes": [{
//!         "name": "Apple",
//!         "parent": { "name": "Fruit", "access": "public" },
//!         "fields": [{ "name": "colour", "type": "string", "access": "public" }]
//!     }] }"#,
//! )
//! .unwrap();
//!
//! let generator = generator_for_language("java").unwrap();
//! let files = generator.generate(&package);
//! assert!(files["Apple"].starts_with("class Apple extends Fruit {"));
//! ```
//!
//! Generation is a pure projection: the IR is never mutated, the output
//! map has exactly one entry per top-level class, and repeated calls
//! yield byte-identical text. Method bodies are always placeholders;
//! no real logic is ever synthesized.
//!
//! # Feature Flags
//!
//! One `backend-*` flag per target language, all enabled by default:
//! `backend-go`, `backend-java`, `backend-cpp`, `backend-python`,
//! `backend-ruby`, `backend-js`, `backend-csharp`.

pub mod indent;
pub mod input;
pub mod ir;
pub mod output;
pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use indent::Indent;
pub use input::{InputFormat, ParseError, parse, parse_json, parse_xml, parse_yaml};

// Re-export traits
pub use traits::Generator;

// Re-export registry functions
pub use registry::{generator_for_language, generators, language_names, register_generator};

// Re-export generators
#[cfg(feature = "backend-go")]
pub use output::generate_go;

#[cfg(feature = "backend-java")]
pub use output::generate_java;

#[cfg(feature = "backend-cpp")]
pub use output::generate_cpp;

#[cfg(feature = "backend-python")]
pub use output::generate_python;

#[cfg(feature = "backend-ruby")]
pub use output::generate_ruby;

#[cfg(feature = "backend-js")]
pub use output::generate_javascript;

#[cfg(feature = "backend-csharp")]
pub use output::generate_csharp;
