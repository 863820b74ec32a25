//! resolve/resolver.rs
//! Precedence-ordered codec dispatch.
//!
//! Classification is total: every value kind maps to exactly one capability,
//! and the dispatcher turns that capability into a registry key. Only the
//! fallback rungs involve an ordered search (global serializer first, then
//! the JSON rendition), and the JSON rung never fails to match. The one
//! remaining failure is a registry with a rung missing, reported with the
//! value's kind in hand.

use std::sync::Arc;

use crate::codecs::compact::SchemaCatalog;
use crate::config::DefaultNumberType;
use crate::registry::{Codec, CodecKey, CodecRegistry, ScalarKind};
use crate::resolve::Capability;
use crate::types::SerializationError;
use crate::value::Value;

/// Scalar classification. `None` means the value is not scalar-shaped and
/// belongs to another rung of the chain.
pub fn scalar_kind_of(value: &Value) -> Option<ScalarKind> {
    match value {
        Value::Bool(_) => Some(ScalarKind::Bool),
        Value::I8(_) => Some(ScalarKind::I8),
        Value::I16(_) => Some(ScalarKind::I16),
        Value::I32(_) => Some(ScalarKind::I32),
        Value::I64(_) => Some(ScalarKind::I64),
        Value::F32(_) => Some(ScalarKind::F32),
        Value::F64(_) => Some(ScalarKind::F64),
        Value::Number(_) => Some(ScalarKind::Number),
        Value::Str(_) => Some(ScalarKind::Str),
        Value::BigInt(_) => Some(ScalarKind::BigInt),
        Value::BigDecimal(_) => Some(ScalarKind::BigDecimal),
        Value::Uuid(_) => Some(ScalarKind::Uuid),
        Value::Date(_) => Some(ScalarKind::Date),
        Value::Time(_) => Some(ScalarKind::Time),
        Value::DateTime(_) => Some(ScalarKind::DateTime),
        Value::OffsetDateTime(_) => Some(ScalarKind::OffsetDateTime),
        _ => None,
    }
}

/// Map a value onto its capability. Total; never errors.
pub fn classify(value: &Value, catalog: &SchemaCatalog) -> Capability {
    if let Some(kind) = scalar_kind_of(value) {
        return Capability::Scalar(kind);
    }
    match value {
        Value::Absent => Capability::Invalid,
        Value::Null => Capability::Null,
        Value::Bytes(_) => Capability::Array(ScalarKind::I8),
        // First-element heuristic: an empty array has no element to look at
        // and encodes as the configured default number array.
        Value::List(items) => match items.first() {
            None => Capability::Array(ScalarKind::Number),
            Some(first) => match scalar_kind_of(first) {
                Some(elem) => Capability::Array(elem),
                None => Capability::Fallback,
            },
        },
        Value::Tagged(t) => Capability::CustomTagged(t.tag),
        Value::Identified(_) => Capability::FactoryPolymorphic,
        Value::Portable(_) => Capability::PortablePolymorphic,
        Value::Record(r) => {
            if r.schema.is_some() || catalog.is_registered(&r.type_name) {
                Capability::Structured
            } else {
                Capability::Fallback
            }
        }
        Value::Json(_) | Value::JsonString(_) => Capability::Fallback,
        // Pre-serialized and partition-wrapped values are unwrapped by the
        // facade before dispatch; seeing one here is a facade bug.
        Value::Data(_) | Value::Keyed(_) => Capability::Invalid,
        _ => Capability::Fallback,
    }
}

/// Resolve a value to the codec that will write it.
pub fn resolve(
    registry: &CodecRegistry,
    catalog: &SchemaCatalog,
    default_number: DefaultNumberType,
    value: &Value,
) -> Result<Arc<dyn Codec>, SerializationError> {
    let capability = classify(value, catalog);
    log::trace!("dispatch {:?} -> {:?}", value.kind(), capability);

    let key = match capability {
        Capability::Invalid => return Err(SerializationError::Unserializable),
        Capability::Null => CodecKey::Null,
        Capability::Scalar(kind) => CodecRegistry::scalar_key(kind, default_number),
        Capability::Array(elem) => match CodecRegistry::array_key(elem, default_number) {
            Some(key) => key,
            None => return fallback(registry, value),
        },
        Capability::Structured => CodecKey::Compact,
        Capability::FactoryPolymorphic => CodecKey::Identified,
        Capability::PortablePolymorphic => CodecKey::Portable,
        Capability::CustomTagged(tag) => {
            if let Some(codec) = registry.lookup(CodecKey::Custom(tag)) {
                return Ok(codec.clone());
            }
            // Unmatched tags keep falling: global serializer, then the JSON
            // rendition of the wrapped value.
            return fallback(registry, value);
        }
        Capability::Fallback => return fallback(registry, value),
    };

    registry
        .lookup(key)
        .cloned()
        .ok_or(SerializationError::NoSerializerFound { kind: value.kind() })
}

/// Last rungs of the chain: global serializer, then the JSON codec.
fn fallback(
    registry: &CodecRegistry,
    value: &Value,
) -> Result<Arc<dyn Codec>, SerializationError> {
    if let Some(global) = registry.lookup(CodecKey::Global) {
        log::trace!("dispatch {:?} -> global serializer", value.kind());
        return Ok(global.clone());
    }
    if let Some(json) = registry.lookup(CodecKey::Json) {
        log::trace!("dispatch {:?} -> JSON fallback", value.kind());
        return Ok(json.clone());
    }
    Err(SerializationError::NoSerializerFound { kind: value.kind() })
}
