//! Structured documents (JSON, YAML, TOML) as trees

use std::path::Path;

use serde_json::Value;

use super::SourceError;
use crate::TreeItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse document text into a JSON value
    pub fn parse(self, content: &str) -> Result<Value, ParseError> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Yaml => Ok(serde_yaml::from_str(content)?),
            Self::Toml => {
                let table: toml::Table = toml::from_str(content)?;
                Ok(toml_to_json(toml::Value::Table(table)))
            }
        }
    }
}

/// Error type for document parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Datetimes become strings; floats JSON cannot hold (NaN, inf) too.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(number) => Value::from(number),
        toml::Value::Float(number) => serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(number.to_string())),
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(values) => Value::Array(values.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Read and parse a document file into tree items.
pub fn document_items(path: &Path) -> Result<Vec<TreeItem<String>>, SourceError> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| SourceError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = format.parse(&content).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(value_items(&value))
}

/// Convert a value into the top-level rows of a tree.
///
/// Object entries become `key` nodes, array elements `[index]` nodes and
/// scalars `key: value` leaves. A scalar document is a single leaf.
pub fn value_items(value: &Value) -> Vec<TreeItem<String>> {
    match value {
        Value::Object(map) => map.iter().map(|(key, value)| entry(key.clone(), value)).collect(),
        Value::Array(values) => values
            .iter()
            .enumerate()
            .map(|(index, value)| entry(format!("[{index}]"), value))
            .collect(),
        scalar => vec![TreeItem::new_leaf(scalar_text(scalar))],
    }
}

fn entry(label: String, value: &Value) -> TreeItem<String> {
    match value {
        Value::Object(map) if map.is_empty() => TreeItem::new_leaf(format!("{label}: {{}}")),
        Value::Array(values) if values.is_empty() => TreeItem::new_leaf(format!("{label}: []")),
        Value::Object(_) | Value::Array(_) => TreeItem::new(label, value_items(value)),
        scalar => TreeItem::new_leaf(format!("{label}: {}", scalar_text(scalar))),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
