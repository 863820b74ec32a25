//! codecs/json.rs
//! JSON fallback codec, the universal last resort of the precedence chain.
//!
//! Writes the JSON text as a plain string payload. The read side obeys the
//! configured deserialization policy: eager parses into a document, lazy
//! hands the raw text back wrapped. Both policies share one type id, so a
//! lazy client can read an eager client's bytes and vice versa.

use serde_json::Value as JsonValue;

use crate::config::JsonDeserializationPolicy;
use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::Value;

/// Convert a fallback-category value into a JSON document. Total for
/// data-ish values, including unmatched tagged wrappers; the registered
/// polymorphic and binary kinds never reach this codec because the
/// precedence chain claims them earlier.
pub fn value_to_json(value: &Value) -> Result<JsonValue, SerializationError> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::I8(v) => Ok(JsonValue::from(*v)),
        Value::I16(v) => Ok(JsonValue::from(*v)),
        Value::I32(v) => Ok(JsonValue::from(*v)),
        Value::I64(v) => Ok(JsonValue::from(*v)),
        Value::F32(v) => number(*v as f64),
        Value::F64(v) => number(*v),
        Value::Number(v) => number(*v),
        Value::Str(s) => Ok(JsonValue::String(s.clone())),
        Value::List(xs) => {
            let mut arr = Vec::with_capacity(xs.len());
            for x in xs {
                arr.push(value_to_json(x)?);
            }
            Ok(JsonValue::Array(arr))
        }
        Value::Record(r) => {
            let mut map = serde_json::Map::new();
            for (name, field) in &r.fields {
                map.insert(name.clone(), value_to_json(field)?);
            }
            Ok(JsonValue::Object(map))
        }
        Value::Json(doc) => Ok(doc.clone()),
        // A tag with no codec behind it renders as the wrapped value; the
        // tag itself is a dispatch hint, not data.
        Value::Tagged(t) => value_to_json(&t.value),
        _ => Err(SerializationError::Validation(format!(
            "value kind {:?} has no JSON rendition",
            value.kind()
        ))),
    }
}

fn number(n: f64) -> Result<JsonValue, SerializationError> {
    serde_json::Number::from_f64(n)
        .map(JsonValue::Number)
        .ok_or_else(|| SerializationError::Validation(format!("non-finite number {n} in JSON value")))
}

pub struct JsonCodec {
    policy: JsonDeserializationPolicy,
}

impl JsonCodec {
    pub fn new(policy: JsonDeserializationPolicy) -> Self {
        JsonCodec { policy }
    }
}

impl Codec for JsonCodec {
    fn id(&self) -> i32 {
        type_ids::JSON
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            // Lazy wrapper: the caller vouches for the text, write verbatim.
            Value::JsonString(s) => {
                out.write_str(s);
                Ok(())
            }
            v => {
                let doc = value_to_json(v)?;
                let text = serde_json::to_string(&doc)
                    .map_err(|e| SerializationError::Validation(format!("JSON encode: {e}")))?;
                out.write_str(&text);
                Ok(())
            }
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let text = input.read_str()?;
        match self.policy {
            JsonDeserializationPolicy::Eager => {
                let doc: JsonValue = serde_json::from_str(&text)
                    .map_err(|e| SerializationError::Validation(format!("JSON decode: {e}")))?;
                Ok(Value::Json(doc))
            }
            JsonDeserializationPolicy::Lazy => Ok(Value::JsonString(text)),
        }
    }
}
