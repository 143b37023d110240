//! Loose schema for analysis payloads.
//!
//! The backend does not guarantee any shape beyond "a JSON object", so each
//! top-level field is decoded into a [`Field`]: a sum type whose variants name
//! the runtime JSON kind that actually arrived. Display code asks a `Field` for
//! text with an explicit default and never sees a raw object.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Field {
    /// Missing key or JSON `null`.
    #[default]
    Absent,
    Text(String),
    Number(Number),
    Flag(bool),
    Sequence(Vec<Value>),
    Object(Map<String, Value>),
}

impl Field {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// Nested lookup; anything other than an object yields `Absent`.
    pub fn get(&self, key: &str) -> Field {
        match self {
            Field::Object(map) => map.get(key).map(Field::from).unwrap_or_default(),
            _ => Field::Absent,
        }
    }

    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Field::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Length of a sequence, `0` for every other shape.
    pub fn count(&self) -> usize {
        self.items().map(<[Value]>::len).unwrap_or(0)
    }

    pub fn entries(&self) -> Option<&Map<String, Value>> {
        match self {
            Field::Object(map) => Some(map),
            _ => None,
        }
    }

    /// JavaScript-style truthiness, used where the backend treats empty
    /// strings and zeroes as "not provided".
    pub fn is_truthy(&self) -> bool {
        match self {
            Field::Absent => false,
            Field::Text(text) => !text.is_empty(),
            Field::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
            Field::Flag(flag) => *flag,
            Field::Sequence(_) | Field::Object(_) => true,
        }
    }

    /// Render as text, substituting `default` for shapes that have no safe
    /// textual form. Objects carrying a `title` render that title instead.
    pub fn text_or(&self, default: &str) -> String {
        match self {
            Field::Text(text) => text.clone(),
            Field::Number(number) => number.to_string(),
            Field::Flag(flag) => flag.to_string(),
            Field::Object(map) => match map.get("title").map(Field::from) {
                Some(title) if !title.is_absent() => title.text_or(default),
                _ => default.to_string(),
            },
            Field::Absent | Field::Sequence(_) => default.to_string(),
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Absent,
            Value::String(text) => Field::Text(text),
            Value::Number(number) => Field::Number(number),
            Value::Bool(flag) => Field::Flag(flag),
            Value::Array(items) => Field::Sequence(items),
            Value::Object(map) => Field::Object(map),
        }
    }
}

impl From<&Value> for Field {
    fn from(value: &Value) -> Self {
        Field::from(value.clone())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Field::from)
    }
}

/// The four analysis sections the UI knows about. Unknown keys are ignored and
/// missing keys stay [`Field::Absent`]; nothing is defaulted here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisPayload {
    pub summary: Field,
    pub entities: Field,
    pub compliance_report: Field,
    pub clause_traceability: Field,
}

/// Wrapper handed to the upload flow. `results` is always populated by
/// [`crate::ApiClient`]; other services may legitimately leave it empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadEnvelope {
    pub results: Option<AnalysisPayload>,
}
