//! Row access for the table engine.
//!
//! The engine never looks inside a row except through this module:
//! - `Row` exposes a stable identifier and named field lookup
//! - `FieldValue` is the small set of value shapes the engine can compare
//! - `Record` is the JSON-backed row used by the dashboard datasets

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Type alias for row identifiers (unique within one collection)
pub type RowId = String;

/// A single field value as seen by filtering and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Returns the string form used for search matching and mixed-type sorting.
    pub fn display_string(&self) -> String {
        self.to_string()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            // Integral values print without a fractional part ("42", not "42.0")
            FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Trait for anything the table engine can display.
///
/// Implementors only need a unique id and named field access; everything
/// else about the row stays opaque to the engine.
pub trait Row {
    /// Returns the unique identifier of this row
    fn id(&self) -> RowId;

    /// Gets a field value by name, `None` when the field is absent or null
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// Returns the display string for a field, blank when absent
    fn field_string(&self, key: &str) -> String {
        self.field(key).map(|v| v.display_string()).unwrap_or_default()
    }
}

/// Converts a JSON value into a field value.
///
/// Arrays and objects collapse to their compact JSON text so they still
/// display and sort as strings.
pub fn field_from_json(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(FieldValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        other => Some(FieldValue::Text(other.to_string())),
    }
}

/// A JSON-backed row: an id plus an ordered map of named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RowId,
    fields: Map<String, Value>,
}

impl Record {
    /// Creates an empty record with the given id.
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style setter, used heavily by the demo generator and tests.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Fields in insertion order (the id is not part of this list).
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl Row for Record {
    fn id(&self) -> RowId {
        self.id.clone()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        if key == "id" {
            return Some(FieldValue::Text(self.id.clone()));
        }
        self.fields.get(key).and_then(field_from_json)
    }
}

// Records serialize as a flat JSON object with the id first.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert("id".to_string(), Value::String(self.id.clone()));
        for (k, v) in &self.fields {
            object.insert(k.clone(), v.clone());
        }
        object.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let id = match fields.remove("id") {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(serde::de::Error::custom(format!(
                    "record id must be a string or number, got {}",
                    other
                )))
            }
            None => return Err(serde::de::Error::missing_field("id")),
        };
        Ok(Record { id, fields })
    }
}
