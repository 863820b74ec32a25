//! registry/types.rs
//! Codec contract, registry key space, and construction-time errors.

use thiserror::Error;

use crate::cursor::{DataInput, DataOutput};
use crate::types::SerializationError;
use crate::value::Value;

/// The contract every value <-> bytes converter implements.
///
/// - `id` is stable and never reused while the registry lives.
/// - `write` appends payload bytes only, never the envelope header.
/// - `read` consumes exactly the bytes `write` produced and returns a value
///   deep-equal to the original.
/// - Implementations are deterministic and hold only configuration captured
///   at construction; they never mutate shared state while serializing.
pub trait Codec: Send + Sync {
    fn id(&self) -> i32;
    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError>;
    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError>;
}

/// Scalar kind vocabulary used for registry normalization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// Width-agnostic numeric; normalizes to the configured default.
    Number,
    Str,
    BigInt,
    BigDecimal,
    Uuid,
    Date,
    Time,
    DateTime,
    OffsetDateTime,
}

/// Closed key space of the registry's name -> id mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodecKey {
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Str,
    /// Byte array; the buffer kind and arrays of bytes normalize here.
    Bytes,
    BoolArray,
    I16Array,
    I32Array,
    I64Array,
    F32Array,
    F64Array,
    StrArray,
    BigInt,
    BigDecimal,
    Uuid,
    Date,
    Time,
    DateTime,
    OffsetDateTime,
    Json,
    Compact,
    Identified,
    Portable,
    /// User codec keyed by its declared tag id (>= 1).
    Custom(i32),
    /// Optional single fallback codec.
    Global,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate codec name: {key:?}")]
    DuplicateName { key: CodecKey },

    #[error("duplicate codec id: {id}")]
    DuplicateId { id: i32 },

    #[error("custom serializer ids must be >= 1, got {id}")]
    ReservedTypeId { id: i32 },

    #[error("duplicate identified factory id: {id}")]
    DuplicateFactory { id: i32 },
}
