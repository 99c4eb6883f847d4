//! YAML to IR parser.
//!
//! Same shape as the JSON input, deserialized with serde_yaml.

use super::ParseError;
use crate::ir::Package;

/// Parse a YAML class model into a package.
pub fn parse_yaml(source: &str) -> Result<Package, ParseError> {
    Ok(serde_yaml::from_str(source)?)
}
