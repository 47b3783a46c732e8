//! Request parameter decoding
//!
//! Parameters arrive in the query string, in an urlencoded form body or
//! in a JSON object body. All three are flattened into one
//! name -> value map per request.

use std::collections::HashMap;

use serde_json::Value;
use url::form_urlencoded;

use crate::core::error::{GatewayError, Result};
use crate::core::types::NewBookmark;

/// Per-request parameter map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    values: HashMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` string
    ///
    /// Used for both query strings and form bodies. The first value of a
    /// repeated key wins.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(input) {
            params
                .values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        params
    }

    /// Decode a JSON object body
    ///
    /// Strings are taken verbatim, numbers and booleans are stringified and
    /// `null` counts as absent.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| GatewayError::BadRequest(format!("Invalid JSON body: {e}")))?;

        let Value::Object(object) = value else {
            return Err(GatewayError::BadRequest(
                "JSON body must be an object".to_string(),
            ));
        };

        let mut params = Self::new();
        for (key, value) in object {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                Value::Array(_) | Value::Object(_) => {
                    return Err(GatewayError::BadRequest(format!(
                        "Parameter '{key}' must be a scalar"
                    )))
                }
            };
            params.values.insert(key, value);
        }
        Ok(params)
    }

    /// Decode a request body according to its content type
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self::new());
        }

        let is_json = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(body)
        } else {
            Ok(Self::from_urlencoded(body))
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a parameter, failing with `BadRequest` when it is absent
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| GatewayError::BadRequest(format!("Missing parameter: {key}")))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build the bookmark to add
    ///
    /// `url` must be present and non-empty; `title` and `category` default
    /// to the empty string and are left for the tool to judge.
    pub fn new_bookmark(&self) -> Result<NewBookmark> {
        let url = self.require("url")?;
        if url.trim().is_empty() {
            return Err(GatewayError::BadRequest(
                "Parameter 'url' cannot be empty".to_string(),
            ));
        }

        Ok(NewBookmark {
            url: url.to_string(),
            title: self.get("title").unwrap_or_default().to_string(),
            category: self.get("category").unwrap_or_default().to_string(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
