//! Output backends for class-skeleton generation.
//!
//! Each backend takes an IR [`Package`](crate::ir::Package) and renders
//! one source blob per top-level class. All backends implement the
//! [`Generator`](crate::traits::Generator) trait for uniform access via
//! the registry.

// Go
#[cfg(feature = "backend-go")]
pub mod go;

#[cfg(feature = "backend-go")]
pub use go::{GoGenerator, generate_go};

// Java
#[cfg(feature = "backend-java")]
pub mod java;

#[cfg(feature = "backend-java")]
pub use java::{JavaGenerator, generate_java};

// C++
#[cfg(feature = "backend-cpp")]
pub mod cpp;

#[cfg(feature = "backend-cpp")]
pub use cpp::{CppGenerator, generate_cpp};

// Python
#[cfg(feature = "backend-python")]
pub mod python;

#[cfg(feature = "backend-python")]
pub use python::{PythonGenerator, generate_python};

// Ruby
#[cfg(feature = "backend-ruby")]
pub mod ruby;

#[cfg(feature = "backend-ruby")]
pub use ruby::{RubyGenerator, generate_ruby};

// JavaScript (ES6 classes)
#[cfg(feature = "backend-js")]
pub mod javascript;

#[cfg(feature = "backend-js")]
pub use javascript::{JavaScriptGenerator, generate_javascript};

// C#
#[cfg(feature = "backend-csharp")]
pub mod csharp;

#[cfg(feature = "backend-csharp")]
pub use csharp::{CSharpGenerator, generate_csharp};

/// Uppercase the first character, leaving the rest untouched.
///
/// Used both by capitalization-visibility backends (Go) and for accessor
/// names (`getColour`, `SetColour`).
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("colour"), "Colour");
        assert_eq!(capitalize("getSize"), "GetSize");
        assert_eq!(capitalize("X"), "X");
        assert_eq!(capitalize(""), "");
    }
}
