//! types.rs
//! Unified serialization error covering cursor, envelope, registry, schema,
//! and resolution failures.
//!
//! - Ergonomic `From<T>` impls enable `?` across the engine.
//! - Messages aim to be stable and contextual for telemetry and logs.
//! - Every failure surfaces synchronously to the caller of the operation
//!   that hit it; nothing is retried inside the engine.

use thiserror::Error;

use crate::codecs::compact::SchemaError;
use crate::cursor::CursorError;
use crate::envelope::EnvelopeError;
use crate::registry::RegistryError;
use crate::value::ValueKind;

#[derive(Debug, Error)]
pub enum SerializationError {
    /// The absent-value sentinel was passed to `to_data`.
    #[error("cannot serialize an absent value")]
    Unserializable,

    /// The precedence chain was exhausted without a match.
    /// Only reachable under misconfiguration, the JSON fallback is total.
    #[error("no serializer found for value kind {kind:?}")]
    NoSerializerFound { kind: ValueKind },

    /// An envelope named a type id no registered codec answers to
    /// (version skew with the cluster, or corrupted bytes).
    #[error("no deserializer registered for type id {type_id}")]
    NoDeserializerFound { type_id: i32 },

    /// A codec received a value outside the kind it encodes.
    #[error("expected {expected} value, got {actual:?}")]
    KindMismatch {
        expected: &'static str,
        actual: ValueKind,
    },

    /// A partition key chain recursed past the engine's depth cap.
    #[error("partition key nesting exceeded {max} levels")]
    KeyDepthExceeded { max: usize },

    /// An identified payload named a factory id nobody registered.
    #[error("no identified factory registered for factory id {factory_id}")]
    UnknownFactory { factory_id: i32 },

    /// Registry invariant violated during facade construction.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Envelope-level error (header validation or parse).
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// Cursor-level error (bounds, length prefixes, text decoding).
    #[error("cursor error: {0}")]
    Cursor(#[from] CursorError),

    /// Compact schema catalog error.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Generic high-level validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
