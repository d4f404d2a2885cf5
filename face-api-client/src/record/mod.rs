//! Generic attribute record
//!
//! A [`Record`] is the boundary representation of every payload the service
//! returns: a flat, insertion-ordered mapping from attribute name to [`Value`].
//! At construction time the record's [`RecordSchema`] decides which attributes
//! are re-hydrated into nested records (single objects) or lists of records
//! (arrays of objects). After that the record is a plain value; application
//! code normally reads it through a typed view ([`Record::decode`]).
//!
//! # Rules
//! - A schema attribute missing from the payload stays missing, never an error
//! - A schema attribute present as `null` stays `null`
//! - A schema attribute present with the wrong JSON shape is a parse error
//! - Serializing a record yields exactly its attribute mapping, recursively

mod schema;
mod value;

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{FaceError, Result};

pub use schema::{RecordSchema, UNTYPED};
pub use value::Value;

/// Ordered attribute bag hydrated according to a [`RecordSchema`].
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static RecordSchema,
    attributes: Vec<(String, Value)>,
}

impl Record {
    /// Empty record of the given schema.
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            attributes: Vec::new(),
        }
    }

    /// Builds a record from caller-supplied literal attributes.
    ///
    /// No hydration happens: values are taken as given. Used for records whose
    /// content is known locally, e.g. right after a create call.
    pub fn from_pairs<I, K, V>(schema: &'static RecordSchema, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut record = Self::new(schema);
        for (key, value) in pairs {
            record.set(key, value);
        }
        record
    }

    /// Hydrates a decoded JSON object according to `schema`.
    pub fn hydrate(schema: &'static RecordSchema, raw: serde_json::Value) -> Result<Self> {
        match raw {
            serde_json::Value::Object(map) => Self::hydrate_map(schema, map),
            other => Err(FaceError::parse(format!(
                "{} expects a JSON object, got {}",
                schema.name,
                json_kind(&other)
            ))),
        }
    }

    /// Hydrates every element of a decoded JSON array, preserving order.
    pub fn hydrate_list(
        schema: &'static RecordSchema,
        raw: serde_json::Value,
    ) -> Result<Vec<Self>> {
        match raw {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| Self::hydrate(schema, item))
                .collect(),
            other => Err(FaceError::parse(format!(
                "{} list expects a JSON array, got {}",
                schema.name,
                json_kind(&other)
            ))),
        }
    }

    fn hydrate_map(
        schema: &'static RecordSchema,
        map: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self> {
        let mut attributes = Vec::with_capacity(map.len());

        for (key, raw) in map {
            let value = if raw.is_null() {
                Value::Null
            } else if let Some(nested) = schema.nested_schema(&key) {
                Value::Record(Self::hydrate(nested, raw)?)
            } else if let Some(element) = schema.list_schema(&key) {
                Value::Records(Self::hydrate_list(element, raw)?)
            } else {
                Value::from_json(raw)
            };
            attributes.push((key, value));
        }

        if let Some(each) = schema.each {
            for (_, value) in &mut attributes {
                if let Value::Raw(raw @ serde_json::Value::Object(_)) = value {
                    *value = Value::Record(Self::hydrate(each, raw.take())?);
                } else if !value.is_null() && value.as_record().is_none() {
                    return Err(FaceError::parse(format!(
                        "{} expects every attribute to be an object",
                        schema.name
                    )));
                }
            }
        }

        Ok(Self { schema, attributes })
    }

    /// Schema this record was built with.
    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// Type name of this record (the schema name).
    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    /// Returns the attribute, or `None` when it is not present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Returns a string attribute; `None` when absent, null or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets an attribute. An existing attribute keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Removes an attribute, returning its value if it was present.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        let index = self.attributes.iter().position(|(name, _)| name == key)?;
        Some(self.attributes.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.attributes.iter(),
        }
    }

    /// Flat attribute mapping as plain JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.attributes
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Decodes this record into a typed view.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.to_json()).map_err(|e| {
            FaceError::parse(format!("cannot decode {}: {e}", self.schema.name))
        })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name == other.schema.name && self.attributes == other.attributes
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (key, value) in &self.attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Iterator over the attributes of a [`Record`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
