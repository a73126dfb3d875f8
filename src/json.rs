//! JSON ingestion boundary
//!
//! Converts parsed JSON documents into [`Value`] trees. serde_json is built
//! with `preserve_order`, so object key order survives into the [`Map`] and
//! from there into the serialized output.

use crate::error::Result;
use crate::value::{Map, Value};

/// Parses a JSON document into a [`Value`], preserving object key order.
pub fn from_json_str(input: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(input)?;
    Ok(Value::from(parsed))
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            // Integers beyond f64 precision are read lossily
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let map: Map = entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect();
                Self::Object(map)
            }
        }
    }
}
