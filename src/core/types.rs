//! Domain types shared by the HTTP and CLI adapters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::GatewayError;

/// One bookmark entry as printed by the external tool.
///
/// The entry is kept exactly as parsed so a JSON response re-serializes
/// what the tool emitted, ids, nulls and unknown fields included. The
/// accessors below are lenient views used by the text and html renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkRecord(Value);

impl BookmarkRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Opaque id, whatever JSON type the tool used for it
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id").filter(|id| !id.is_null())
    }

    /// The url, or `""` when absent or not a string
    pub fn url(&self) -> &str {
        self.str_field("url")
    }

    /// The title, or `""` when absent, null or not a string
    pub fn title(&self) -> &str {
        self.str_field("title")
    }

    pub fn category(&self) -> &str {
        self.str_field("category")
    }

    /// Tags as display strings; non-string tags use their JSON form
    pub fn tags(&self) -> Vec<String> {
        match self.0.get("tags") {
            Some(Value::Array(tags)) => tags
                .iter()
                .map(|tag| match tag {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

/// Bookmark fields handed to the tool's `add` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
}

/// Client-selected output representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Text,
    #[default]
    Html,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Text => "text",
            Format::Html => "html",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Text => "text/plain; charset=utf-8",
            Format::Html => "text/html; charset=utf-8",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "text" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            other => Err(GatewayError::BadRequest(format!(
                "Unsupported format: {other}"
            ))),
        }
    }
}

/// Confirmation payload for a successful add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResponse {
    pub success: String,
}

impl Default for AddResponse {
    fn default() -> Self {
        Self {
            success: "Url added".to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
