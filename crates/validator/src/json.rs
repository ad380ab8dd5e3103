//! Conversion from `serde_json::Value`.
//!
//! Values read from JSON documents can be validated directly:
//!
//! ```
//! use tally_validator::prelude::*;
//! use serde_json::json;
//!
//! let manifest = json!({"role": "php,doc", "port": "8080"});
//!
//! assert!(must_be_pear_file_role().check(manifest["role"].clone()).is_valid());
//! assert!(MustBeIntegerInRange::new(1, 65535).check(manifest["port"].clone()).is_valid());
//! ```
//!
//! JSON objects become [`Value::Object`]s without a string form, so they
//! render as `(object) serde_json::Map`. Integers that do not fit an `i64`
//! become floats.

use std::borrow::Cow;

use crate::foundation::{Object, Value};

/// A JSON object carried as a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct JsonObject(pub serde_json::Map<String, serde_json::Value>);

impl Object for JsonObject {
    fn class_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("serde_json::Map")
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::object(JsonObject(map)),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}
