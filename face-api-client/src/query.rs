//! Query string normalization
//!
//! The service expects query values as plain strings: booleans spelled
//! `true`/`false`, lists joined with commas, and no empty parameters at all.
//! Parameters can come from a typed struct ([`normalize_struct`]), a JSON
//! mapping ([`normalize`]) or call arguments ([`normalize_pairs`]); every
//! entry point runs the same rules and keeps the input order.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{FaceError, Result};

/// Normalized `(name, value)` query parameters, in input order.
pub type QueryParams = Vec<(String, String)>;

/// A single call argument destined for the query string.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Dropped from the query.
    Absent,
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl QueryValue {
    fn into_json(self) -> Value {
        match self {
            Self::Absent => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Int(n) => Value::from(n),
            Self::Text(s) => Value::String(s),
            Self::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

/// Normalizes a JSON mapping of parameters.
pub fn normalize(params: &Map<String, Value>) -> QueryParams {
    params
        .iter()
        .filter_map(|(name, value)| normalize_value(value).map(|v| (name.clone(), v)))
        .collect()
}

/// Normalizes the fields of a serializable struct, in declaration order.
///
/// A unit or `None` value yields no parameters; anything that does not
/// serialize to a JSON object is a serialization error.
pub fn normalize_struct<T: Serialize + ?Sized>(params: &T) -> Result<QueryParams> {
    let value = serde_json::to_value(params).map_err(|e| FaceError::Serialization {
        detail: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(normalize(&map)),
        Value::Null => Ok(Vec::new()),
        other => Err(FaceError::Serialization {
            detail: format!("query parameters must form a mapping, got {other}"),
        }),
    }
}

/// Normalizes call arguments given as `(name, value)` pairs.
pub fn normalize_pairs<'a, I>(pairs: I) -> QueryParams
where
    I: IntoIterator<Item = (&'a str, QueryValue)>,
{
    pairs
        .into_iter()
        .filter_map(|(name, value)| {
            normalize_value(&value.into_json()).map(|v| (name.to_string(), v))
        })
        .collect()
}

/// Appends percent-encoded parameters to `path`.
pub fn with_query(path: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect();
    format!("{path}?{}", encoded.join("&"))
}

fn normalize_value(value: &Value) -> Option<String> {
    let normalized = match value {
        Value::Null => return None,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(normalize_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    };
    (!normalized.is_empty()).then_some(normalized)
}
