//! registry/registry.rs
//! Frozen registry: pure lookups plus the name normalization rules.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::DefaultNumberType;
use crate::registry::{Codec, CodecKey, ScalarKind};

pub struct CodecRegistry {
    by_key: HashMap<CodecKey, i32>,
    by_id: HashMap<i32, Arc<dyn Codec>>,
}

impl CodecRegistry {
    pub(crate) fn new(by_key: HashMap<CodecKey, i32>, by_id: HashMap<i32, Arc<dyn Codec>>) -> Self {
        CodecRegistry { by_key, by_id }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Pure lookup; absence is `None`, never an error.
    pub fn lookup(&self, key: CodecKey) -> Option<&Arc<dyn Codec>> {
        self.by_key.get(&key).and_then(|id| self.by_id.get(id))
    }

    pub fn lookup_by_id(&self, id: i32) -> Option<&Arc<dyn Codec>> {
        self.by_id.get(&id)
    }

    pub fn id_of(&self, key: CodecKey) -> Option<i32> {
        self.by_key.get(&key).copied()
    }

    /// Scalar name normalization: the logical number kind resolves to the
    /// configured default number representation.
    pub fn scalar_key(kind: ScalarKind, default_number: DefaultNumberType) -> CodecKey {
        match kind {
            ScalarKind::Bool => CodecKey::Bool,
            ScalarKind::I8 => CodecKey::I8,
            ScalarKind::I16 => CodecKey::I16,
            ScalarKind::I32 => CodecKey::I32,
            ScalarKind::I64 => CodecKey::I64,
            ScalarKind::F32 => CodecKey::F32,
            ScalarKind::F64 => CodecKey::F64,
            ScalarKind::Number => default_number.scalar_key(),
            ScalarKind::Str => CodecKey::Str,
            ScalarKind::BigInt => CodecKey::BigInt,
            ScalarKind::BigDecimal => CodecKey::BigDecimal,
            ScalarKind::Uuid => CodecKey::Uuid,
            ScalarKind::Date => CodecKey::Date,
            ScalarKind::Time => CodecKey::Time,
            ScalarKind::DateTime => CodecKey::DateTime,
            ScalarKind::OffsetDateTime => CodecKey::OffsetDateTime,
        }
    }

    /// Array name normalization: element kind + `Array`, with bytes folding
    /// into the byte-array codec. Kinds without an array codec return `None`
    /// and fall through the precedence chain.
    pub fn array_key(elem: ScalarKind, default_number: DefaultNumberType) -> Option<CodecKey> {
        match elem {
            ScalarKind::Bool => Some(CodecKey::BoolArray),
            ScalarKind::I8 => Some(CodecKey::Bytes),
            ScalarKind::I16 => Some(CodecKey::I16Array),
            ScalarKind::I32 => Some(CodecKey::I32Array),
            ScalarKind::I64 => Some(CodecKey::I64Array),
            ScalarKind::F32 => Some(CodecKey::F32Array),
            ScalarKind::F64 => Some(CodecKey::F64Array),
            ScalarKind::Number => Some(default_number.array_key()),
            ScalarKind::Str => Some(CodecKey::StrArray),
            _ => None,
        }
    }
}
