//! XML to IR parser.
//!
//! The document root is `<package>`; classes, fields, methods and
//! parameters are nested elements carrying the IR fields as attributes:
//!
//! ```xml
//! <package use_spaces="false">
//!   <class name="Apple">
//!     <parent name="Fruit" access="public"/>
//!     <field name="colour" type="string" access="public" default='"red"'/>
//!     <method name="print" access="private">
//!       <parameter name="colour" type="string" const="true" pass="&amp;"/>
//!     </method>
//!     <class name="Seed"/>
//!   </class>
//! </package>
//! ```

use super::ParseError;
use crate::ir::{Class, Field, Method, Package, Parameter, Parent};
use roxmltree::Node;

/// Parse an XML class model into a package.
pub fn parse_xml(source: &str) -> Result<Package, ParseError> {
    let doc = roxmltree::Document::parse(source)?;
    let root = doc.root_element();
    expect_element(&root, "package")?;

    let mut package = Package {
        classes: Vec::new(),
        use_spaces: bool_attr(&root, "use_spaces"),
    };
    for child in root.children().filter(Node::is_element) {
        package.classes.push(parse_class(&child)?);
    }
    Ok(package)
}

fn parse_class(node: &Node) -> Result<Class, ParseError> {
    expect_element(node, "class")?;

    let mut class = Class {
        name: string_attr(node, "name"),
        access: string_attr(node, "access"),
        ..Class::default()
    };
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "parent" => {
                class.parent = Some(Parent {
                    name: string_attr(&child, "name"),
                    access: string_attr(&child, "access"),
                });
            }
            "field" => class.fields.push(parse_field(&child)),
            "method" => class.methods.push(parse_method(&child)?),
            "class" => class.classes.push(parse_class(&child)?),
            got => {
                return Err(ParseError::UnexpectedElement {
                    expected: "parent, field, method or class".to_string(),
                    got: got.to_string(),
                });
            }
        }
    }
    Ok(class)
}

fn parse_field(node: &Node) -> Field {
    Field {
        name: string_attr(node, "name"),
        ty: string_attr(node, "type"),
        access: string_attr(node, "access"),
        is_static: bool_attr(node, "static"),
        is_const: bool_attr(node, "const"),
        default: string_attr(node, "default"),
        getter: bool_attr(node, "getter"),
        setter: bool_attr(node, "setter"),
    }
}

fn parse_method(node: &Node) -> Result<Method, ParseError> {
    let mut method = Method {
        name: string_attr(node, "name"),
        ret: string_attr(node, "return"),
        access: string_attr(node, "access"),
        is_static: bool_attr(node, "static"),
        is_const: bool_attr(node, "const"),
        parameters: Vec::new(),
    };
    for child in node.children().filter(Node::is_element) {
        expect_element(&child, "parameter")?;
        method.parameters.push(Parameter {
            name: string_attr(&child, "name"),
            ty: string_attr(&child, "type"),
            is_const: bool_attr(&child, "const"),
            pass: string_attr(&child, "pass"),
        });
    }
    Ok(method)
}

fn expect_element(node: &Node, expected: &str) -> Result<(), ParseError> {
    let got = node.tag_name().name();
    if got != expected {
        return Err(ParseError::UnexpectedElement {
            expected: expected.to_string(),
            got: got.to_string(),
        });
    }
    Ok(())
}

fn string_attr(node: &Node, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

fn bool_attr(node: &Node, name: &str) -> bool {
    node.attribute(name) == Some("true")
}
