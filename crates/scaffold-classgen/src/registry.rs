//! Registry for code generation backends.

use crate::traits::Generator;
use std::sync::{OnceLock, RwLock};

/// Global registry of generators.
static GENERATORS: RwLock<Vec<&'static dyn Generator>> = RwLock::new(Vec::new());
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom generator.
///
/// Call this before any lookup to add generators beyond the built-in
/// set. Built-in generators are registered automatically on first use.
pub fn register_generator(generator: &'static dyn Generator) {
    GENERATORS.write().unwrap().push(generator);
}

/// Initialize built-in generators (called automatically on first use).
fn init_builtin() {
    INITIALIZED.get_or_init(|| {
        let mut generators = GENERATORS.write().unwrap();

        #[cfg(feature = "backend-go")]
        {
            generators.push(&crate::output::go::GO_GENERATOR);
        }

        #[cfg(feature = "backend-java")]
        {
            generators.push(&crate::output::java::JAVA_GENERATOR);
        }

        #[cfg(feature = "backend-cpp")]
        {
            generators.push(&crate::output::cpp::CPP_GENERATOR);
        }

        #[cfg(feature = "backend-python")]
        {
            generators.push(&crate::output::python::PYTHON_GENERATOR);
        }

        #[cfg(feature = "backend-ruby")]
        {
            generators.push(&crate::output::ruby::RUBY_GENERATOR);
        }

        #[cfg(feature = "backend-js")]
        {
            generators.push(&crate::output::javascript::JAVASCRIPT_GENERATOR);
        }

        #[cfg(feature = "backend-csharp")]
        {
            generators.push(&crate::output::csharp::CSHARP_GENERATOR);
        }
    });
}

/// Get a generator by language identifier.
///
/// `None` means "no such generator"; callers must treat that as fatal
/// and not proceed to generation.
pub fn generator_for_language(lang: &str) -> Option<&'static dyn Generator> {
    init_builtin();
    GENERATORS
        .read()
        .unwrap()
        .iter()
        .find(|g| g.language() == lang)
        .copied()
}

/// Get all registered generators.
pub fn generators() -> Vec<&'static dyn Generator> {
    init_builtin();
    GENERATORS.read().unwrap().clone()
}

/// List all registered language identifiers.
pub fn language_names() -> Vec<&'static str> {
    init_builtin();
    GENERATORS
        .read()
        .unwrap()
        .iter()
        .map(|g| g.language())
        .collect()
}
