//! Intermediate representation for class models.
//!
//! All input formats (XML, JSON, YAML) normalize to this IR before being
//! passed to output backends. The tree is plain data: backends borrow it
//! read-only and project it to text, they never mutate it.
//!
//! Access values (`"public"`, `"private"`, `"protected"`, `"default"` or
//! empty) are carried verbatim. Backends assume the model was well-formed
//! when it was produced; an unrecognized access string or an empty class
//! name yields malformed output, not an error.

use serde::{Deserialize, Serialize};

/// A complete class model: every top-level class of one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    /// Top-level classes, in declaration order. Names are expected to be
    /// unique; a duplicate silently overwrites the earlier entry in the
    /// generated output map.
    pub classes: Vec<Class>,
    /// Indent generated code with four spaces instead of a tab.
    pub use_spaces: bool,
}

/// A single class definition. Nested classes reuse the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Class {
    /// Class name, also the stem of the generated file.
    pub name: String,
    /// Visibility of the class itself (meaning is language-dependent).
    pub access: String,
    /// Inheritance target, if any. A name reference only: it does not
    /// have to resolve to another class in the same package.
    pub parent: Option<Parent>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    /// Nested class definitions, arbitrarily deep.
    pub classes: Vec<Class>,
}

/// An inheritance relation: the parent's name and the access level of the
/// relation itself (where the target language expresses that).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parent {
    pub name: String,
    pub access: String,
}

/// A field declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    /// Semantic type name; backends map it through their own type table
    /// (e.g. `string` becomes `String` in Java, `std::string` in C++).
    #[serde(rename = "type")]
    pub ty: String,
    pub access: String,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "const")]
    pub is_const: bool,
    /// Literal initializer text, emitted verbatim when non-empty.
    pub default: String,
    /// Synthesize a getter for this field.
    pub getter: bool,
    /// Synthesize a setter for this field.
    pub setter: bool,
}

/// A method declaration. Bodies are always stubs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Method {
    pub name: String,
    /// Semantic return type name; empty means "no value".
    #[serde(rename = "return")]
    pub ret: String,
    pub access: String,
    #[serde(rename = "static")]
    pub is_static: bool,
    /// The method does not mutate state, where the target language can
    /// express that (C++ trailing `const`).
    #[serde(rename = "const")]
    pub is_const: bool,
    pub parameters: Vec<Parameter>,
}

/// A method parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "const")]
    pub is_const: bool,
    /// By-reference marker (`&`), meaningful only to languages with
    /// reference-parameter syntax.
    pub pass: String,
}

impl Package {
    pub fn new(classes: Vec<Class>) -> Self {
        Self {
            classes,
            use_spaces: false,
        }
    }
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn extends(mut self, parent: impl Into<String>, access: impl Into<String>) -> Self {
        self.parent = Some(Parent {
            name: parent.into(),
            access: access.into(),
        });
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_accessors(mut self, getter: bool, setter: bool) -> Self {
        self.getter = getter;
        self.setter = setter;
        self
    }
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn returning(mut self, ret: impl Into<String>) -> Self {
        self.ret = ret.into();
        self
    }

    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }
}
