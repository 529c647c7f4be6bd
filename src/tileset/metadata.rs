//! Typed access to loosely-typed tileset metadata.
//!
//! Tileset metadata arrives as a free-form JSON mapping. Every read goes
//! through [`Metadata`], which encodes the policy for each kind of field:
//!
//! - Descriptive strings (`name`, `attribution`, ...) fall back to a default
//!   when absent or of the wrong type.
//! - Zoom levels and bounds are required; absence or a bad shape is a
//!   [`MetadataError`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MetadataError;

/// Free-form tileset metadata with policy-aware accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert, mostly useful for constructing fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a raw value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Read a string field, returning `default` when it is absent or not a string.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Read a required integer field.
    ///
    /// Accepts integral numbers, floats without a fractional part, and
    /// decimal strings such as `"12"`.
    pub fn get_int(&self, key: &str) -> Result<i32, MetadataError> {
        let missing = || MetadataError::MissingZoomRange {
            key: key.to_string(),
        };

        match self.0.get(key) {
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    i32::try_from(i).map_err(|_| missing())
                } else {
                    n.as_f64().and_then(integral_f64).ok_or_else(missing)
                }
            }
            Some(Value::String(s)) => s.trim().parse::<i32>().map_err(|_| missing()),
            _ => Err(missing()),
        }
    }

    /// Read a required array of exactly `len` finite floats.
    ///
    /// Accepts a JSON array of numbers or a comma-separated string
    /// (`"xmin,ymin,xmax,ymax"`).
    pub fn get_float_array(&self, key: &str, len: usize) -> Result<Vec<f64>, MetadataError> {
        let values = match self.0.get(key) {
            None | Some(Value::Null) => return Err(MetadataError::MissingBounds),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_f64().ok_or_else(|| MetadataError::MalformedBounds {
                        reason: format!("{} element {} is not a number: {}", key, i, item),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(Value::String(s)) => s
                .split(',')
                .enumerate()
                .map(|(i, part)| {
                    part.trim()
                        .parse::<f64>()
                        .map_err(|_| MetadataError::MalformedBounds {
                            reason: format!("{} element {} is not a number: {:?}", key, i, part),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(MetadataError::MalformedBounds {
                    reason: format!("{} must be an array, got {}", key, json_type_name(other)),
                })
            }
        };

        if values.len() != len {
            return Err(MetadataError::MalformedBounds {
                reason: format!(
                    "{} must have {} elements, got {}",
                    key,
                    len,
                    values.len()
                ),
            });
        }

        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(MetadataError::MalformedBounds {
                reason: format!("{} element {} is not finite: {}", key, i, v),
            });
        }

        Ok(values)
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn integral_f64(f: f64) -> Option<i32> {
    if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
