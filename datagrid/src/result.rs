//! Result sets and source payloads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ParseError;

/// One opaque data item, keyed by column field.
pub type Row = Map<String, Value>;

/// Parser turning a source payload into a result set.
pub type ParseFn = Arc<dyn Fn(Payload) -> Result<ResultSet, ParseError> + Send + Sync>;

/// A page of rows as delivered by a source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub data: Vec<Row>,
    /// Total row count across all pages. Absent means `data.len()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl ResultSet {
    pub fn new(data: Vec<Row>) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Total row count. A missing or zero total falls back to the number of
    /// rows delivered.
    pub fn total(&self) -> u64 {
        match self.total {
            Some(total) if total > 0 => total,
            _ => self.data.len() as u64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Raw output of a source before parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Textual body, decoded as JSON by the default parser.
    Text(String),
    /// Already structured data, passed through.
    Json(Value),
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<ResultSet> for Payload {
    fn from(result: ResultSet) -> Self {
        // ResultSet serialization is infallible: string keys, JSON values.
        Self::Json(serde_json::to_value(result).unwrap_or(Value::Null))
    }
}

/// Default parser: textual payloads are decoded as JSON, structured payloads
/// are interpreted directly.
pub fn parse_default(payload: Payload) -> Result<ResultSet, ParseError> {
    match payload {
        Payload::Text(text) => Ok(serde_json::from_str(&text)?),
        Payload::Json(value) => Ok(serde_json::from_value(value)?),
    }
}
