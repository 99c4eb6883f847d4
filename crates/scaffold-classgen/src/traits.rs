//! The generator contract shared by all backends.

use crate::ir::Package;
use std::collections::BTreeMap;

/// A code generation backend for one target language.
///
/// Backends project a [`Package`] to source text: one entry per top-level
/// class, keyed by the class name. Nested classes render inline inside
/// their parent's text and never get their own entry.
///
/// The package is an unchecked precondition: backends assume access,
/// type and name values were validated by whatever produced the IR. A
/// malformed model yields malformed output, never a panic.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use scaffold_classgen::{Generator, ir::Package, register_generator};
/// use std::collections::BTreeMap;
///
/// struct KotlinGenerator;
///
/// impl Generator for KotlinGenerator {
///     fn language(&self) -> &'static str { "kotlin" }
///     fn extension(&self) -> &'static str { "kt" }
///     fn generate(&self, package: &Package) -> BTreeMap<String, String> { /* ... */ }
/// }
///
/// // Register before first use
/// register_generator(&KotlinGenerator);
/// ```
pub trait Generator: Send + Sync {
    /// Language identifier used for registry lookup (e.g. "java", "go").
    fn language(&self) -> &'static str;

    /// File extension for generated sources, without the dot (e.g.
    /// "java", "go", "h").
    fn extension(&self) -> &'static str;

    /// Render every top-level class of the package.
    fn generate(&self, package: &Package) -> BTreeMap<String, String>;
}
