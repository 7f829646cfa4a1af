//! Taxonomy documents.
//!
//! A document is either a bare array of top-level nodes, or an object whose `children` field
//! holds them (other root fields are ignored). All three formats are first read into a
//! `serde_json::Value` so shape errors are reported the same way regardless of syntax.

use crate::{Error, Result, Taxonomy, TaxonomyNode};
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Json,
    Json5,
    Yaml,
}

impl DocumentFormat {
    /// Picks a format from a file extension. Unknown or missing extensions fall back to JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let format = match ext.as_deref() {
            Some("json5") => Self::Json5,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        };
        tracing::debug!(path = %path.as_ref().display(), ?format, "detected document format");
        format
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Json5 => "JSON5",
            Self::Yaml => "YAML",
        }
    }

    /// Reads `text` into a plain JSON value using this format's syntax.
    pub fn parse_value(self, text: &str) -> Result<Value> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Json5 => json5::from_str(text).map_err(|e| Error::Json5 {
                message: e.to_string(),
            }),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "json5" => Ok(Self::Json5),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(Error::UnknownFormat {
                format: other.to_string(),
            }),
        }
    }
}

pub fn parse_taxonomy(text: &str, format: DocumentFormat) -> Result<Taxonomy> {
    let value = format.parse_value(text)?;
    taxonomy_from_value(value, format)
}

pub fn taxonomy_from_value(value: Value, format: DocumentFormat) -> Result<Taxonomy> {
    let nodes = match value {
        Value::Array(_) => value,
        Value::Object(mut root) => match root.remove("children") {
            Some(children @ Value::Array(_)) => children,
            // A root without children is an empty taxonomy, not a malformed one.
            None | Some(Value::Null) => return Ok(Taxonomy::default()),
            Some(_) => return Err(Error::UnexpectedShape { format }),
        },
        _ => return Err(Error::UnexpectedShape { format }),
    };
    let nodes: Vec<TaxonomyNode> = serde_json::from_value(nodes)?;
    Ok(Taxonomy::new(nodes))
}

impl Taxonomy {
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse_taxonomy(text, DocumentFormat::Json)
    }

    pub fn from_json5_str(text: &str) -> Result<Self> {
        parse_taxonomy(text, DocumentFormat::Json5)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        parse_taxonomy(text, DocumentFormat::Yaml)
    }
}
