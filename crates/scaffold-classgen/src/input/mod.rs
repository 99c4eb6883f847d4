//! Input format parsers.
//!
//! Each parser reads one serialization of the class model and produces
//! an IR [`Package`](crate::ir::Package). The format is selected by the
//! input file's extension; anything unrecognized is a hard error.

mod json;
mod xml;
mod yaml;

pub use json::parse_json;
pub use xml::parse_xml;
pub use yaml::parse_yaml;

use crate::ir::Package;
use std::path::Path;

/// Error that can occur when reading a class model.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized format of input file '{0}'")]
    UnknownFormat(String),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected <{expected}> element, got <{got}>")]
    UnexpectedElement { expected: String, got: String },
}

/// A supported input serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Xml,
    Json,
    Yaml,
}

impl InputFormat {
    /// Select the format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match ext {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            _ => Err(ParseError::UnknownFormat(path.display().to_string())),
        }
    }
}

/// Parse `source` as `format` into a package.
pub fn parse(format: InputFormat, source: &str) -> Result<Package, ParseError> {
    match format {
        InputFormat::Xml => parse_xml(source),
        InputFormat::Json => parse_json(source),
        InputFormat::Yaml => parse_yaml(source),
    }
}
