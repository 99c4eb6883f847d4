//! JSON to IR parser.
//!
//! The JSON shape mirrors the IR field-for-field, so this is a direct
//! serde deserialization.

use super::ParseError;
use crate::ir::Package;

/// Parse a JSON class model into a package.
pub fn parse_json(source: &str) -> Result<Package, ParseError> {
    Ok(serde_json::from_str(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_model() {
        let package = parse_json(
            r#"{
                "use_spaces": true,
                "classes": [{
                    "name": "Apple",
                    "parent": { "name": "Fruit", "access": "public" },
                    "fields": [
                        { "name": "colour", "type": "string", "access": "public", "default": "\"red\"" }
                    ],
                    "methods": [
                        { "name": "print", "parameters": [{ "name": "colour", "type": "string", "const": true }] }
                    ]
                }]
            }"#,
        )
        .unwrap();

        assert!(package.use_spaces);
        let apple = &package.classes[0];
        assert_eq!(apple.parent.as_ref().unwrap().name, "Fruit");
        assert_eq!(apple.fields[0].default, "\"red\"");
        assert!(apple.methods[0].parameters[0].is_const);
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(parse_json("{"), Err(ParseError::Json(_))));
    }
}
