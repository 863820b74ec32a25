//! value/types.rs
//! The `Value` sum type plus the structured record shapes that ride on it.

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::codecs::compact::Schema;
use crate::envelope::Envelope;
use crate::value::ValueKind;

/// Arbitrary-precision integer as raw two's-complement big-endian bytes.
/// The engine transports the magnitude verbatim; arithmetic is the caller's
/// concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    pub bytes: Vec<u8>,
}

/// Arbitrary-precision decimal: unscaled big integer plus a base-10 scale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigDecimal {
    pub unscaled: BigInt,
    pub scale: i32,
}

/// Self-describing structured value (the compact-format candidate).
///
/// A record created through the generic-record path carries its `schema`
/// explicitly; a nominally-registered record carries only its type name and
/// lets the compact collaborator derive the schema.
#[derive(Clone, Debug)]
pub struct Record {
    pub type_name: String,
    pub fields: BTreeMap<String, Value>,
    pub schema: Option<Arc<Schema>>,
}

// Equality is structural; the schema is a transport detail of the compact
// collaborator and must not distinguish otherwise-identical records.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.fields == other.fields
    }
}

/// Factory-polymorphic value: dispatch by (factory id, class id) through
/// registered identified factories.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentifiedRecord {
    pub factory_id: i32,
    pub class_id: i32,
    pub fields: Vec<Value>,
}

/// Portable value: keyed like the identified format but with a versioned,
/// field-name-carrying wire representation.
#[derive(Clone, Debug, PartialEq)]
pub struct PortableRecord {
    pub factory_id: i32,
    pub class_id: i32,
    pub version: i32,
    pub fields: BTreeMap<String, Value>,
}

/// Value carrying a custom-serializer tag (`tag >= 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedValue {
    pub tag: i32,
    pub value: Box<Value>,
}

/// Partition-aware wrapper: `key` decides the envelope's partition hash,
/// `value` is what actually serializes. Header concern only; codecs never
/// see this wrapper.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedValue {
    pub key: Box<Value>,
    pub value: Box<Value>,
}

/// The closed universe of runtime values the engine can serialize.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Not a legal value at all; rejecting it is the caller's bug surfaced.
    Absent,
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    /// Width-agnostic numeric; encodes per the configured default number type.
    Number(f64),
    Str(String),
    /// Byte buffer; normalizes to the byte-array codec.
    Bytes(Bytes),
    /// Generic array; element codec chosen from the first element's kind.
    List(Vec<Value>),
    BigInt(BigInt),
    BigDecimal(BigDecimal),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    /// Eagerly parsed JSON document.
    Json(serde_json::Value),
    /// Lazily wrapped raw JSON text.
    JsonString(String),
    Record(Record),
    Identified(IdentifiedRecord),
    Portable(PortableRecord),
    Tagged(TaggedValue),
    Keyed(KeyedValue),
    /// Pre-serialized envelope; `to_data` passes it through unchanged.
    Data(Envelope),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Absent => ValueKind::Absent,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Number(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::Str,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::List(_) => ValueKind::List,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::BigDecimal(_) => ValueKind::BigDecimal,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::OffsetDateTime(_) => ValueKind::OffsetDateTime,
            Value::Json(_) => ValueKind::Json,
            Value::JsonString(_) => ValueKind::JsonString,
            Value::Record(_) => ValueKind::Record,
            Value::Identified(_) => ValueKind::Identified,
            Value::Portable(_) => ValueKind::Portable,
            Value::Tagged(_) => ValueKind::Tagged,
            Value::Keyed(_) => ValueKind::Keyed,
            Value::Data(_) => ValueKind::Data,
        }
    }

    // --- best-effort numeric coercion ---
    // `Number` narrows when the value is exactly representable; everything
    // else must already be the requested width. Mixed-kind arrays lean on
    // these, matching the source system's first-element heuristic.

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Value::I8(v) => Some(*v),
            Value::Number(n) => narrow_integral(*n, i8::MIN as f64, i8::MAX as f64).map(|v| v as i8),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::I8(v) => Some(*v as i16),
            Value::I16(v) => Some(*v),
            Value::Number(n) => {
                narrow_integral(*n, i16::MIN as f64, i16::MAX as f64).map(|v| v as i16)
            }
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I8(v) => Some(*v as i32),
            Value::I16(v) => Some(*v as i32),
            Value::I32(v) => Some(*v),
            Value::Number(n) => {
                narrow_integral(*n, i32::MIN as f64, i32::MAX as f64).map(|v| v as i32)
            }
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(v) => Some(*v as i64),
            Value::I16(v) => Some(*v as i64),
            Value::I32(v) => Some(*v as i64),
            Value::I64(v) => Some(*v),
            Value::Number(n) => {
                narrow_integral(*n, i64::MIN as f64, i64::MAX as f64).map(|v| v as i64)
            }
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::F32(v) => Some(*v),
            Value::Number(n) => Some(*n as f32),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            Value::Number(n) => Some(*n),
            Value::I8(v) => Some(*v as f64),
            Value::I16(v) => Some(*v as f64),
            Value::I32(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

fn narrow_integral(n: f64, min: f64, max: f64) -> Option<f64> {
    if n.fract() == 0.0 && n >= min && n <= max {
        Some(n)
    } else {
        None
    }
}

// --- ergonomic conversions ---

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(v))
    }
}
