use anyhow::{Context, Result};
use serde_bencode::value::Value as RawValue;
use std::collections::HashMap;

/// A decoded bencode value of any shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Byte string, not necessarily UTF-8
    Bytes(Vec<u8>),
    Integer(i64),
    List(Vec<Value>),
    /// Dictionary in no particular order; consumers sort keys themselves
    Dict(HashMap<Vec<u8>, Value>),
}

impl Value {
    /// Decode a complete bencoded buffer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawValue =
            serde_bencode::from_bytes(bytes).context("Failed to parse bencoded data")?;
        Ok(raw.into())
    }

    /// Byte string value from text
    pub fn string(s: &str) -> Self {
        Value::Bytes(s.as_bytes().to_vec())
    }
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Bytes(bytes) => Value::Bytes(bytes),
            RawValue::Int(n) => Value::Integer(n),
            RawValue::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            RawValue::Dict(map) => {
                Value::Dict(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
