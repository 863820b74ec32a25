//! config.rs
//! Configuration surface consumed by the serialization engine.
//!
//! All options are captured at facade construction; nothing here is
//! consulted again once the registry is frozen, except through the values
//! the codecs copied out of it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::codecs::compact::CompactSerializer;
use crate::codecs::identified::IdentifiedFactory;
use crate::cursor::ByteOrderKind;
use crate::registry::{Codec, CodecKey};

/// Which scalar codec the logical number kind resolves to, for both bare
/// numerics and empty/untyped arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultNumberType {
    Double,
    Short,
    Integer,
    Long,
    Float,
    Byte,
}

impl DefaultNumberType {
    pub fn scalar_key(self) -> CodecKey {
        match self {
            DefaultNumberType::Double => CodecKey::F64,
            DefaultNumberType::Short => CodecKey::I16,
            DefaultNumberType::Integer => CodecKey::I32,
            DefaultNumberType::Long => CodecKey::I64,
            DefaultNumberType::Float => CodecKey::F32,
            DefaultNumberType::Byte => CodecKey::I8,
        }
    }

    pub fn array_key(self) -> CodecKey {
        match self {
            DefaultNumberType::Double => CodecKey::F64Array,
            DefaultNumberType::Short => CodecKey::I16Array,
            DefaultNumberType::Integer => CodecKey::I32Array,
            DefaultNumberType::Long => CodecKey::I64Array,
            DefaultNumberType::Float => CodecKey::F32Array,
            DefaultNumberType::Byte => CodecKey::Bytes,
        }
    }
}

impl Default for DefaultNumberType {
    fn default() -> Self {
        DefaultNumberType::Double
    }
}

/// Eager parses JSON payloads into documents on read; Lazy hands back the
/// raw text wrapped, deferring the parse to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonDeserializationPolicy {
    Eager,
    Lazy,
}

impl Default for JsonDeserializationPolicy {
    fn default() -> Self {
        JsonDeserializationPolicy::Eager
    }
}

/// Facade construction input. Builder-style `with_*` methods; the facade
/// validates and freezes everything in its constructor.
#[derive(Clone)]
pub struct SerializationConfig {
    pub default_number_type: DefaultNumberType,
    pub is_big_endian: bool,
    pub json_string_deserialization_policy: JsonDeserializationPolicy,
    /// factory id -> reconstruction factory; merged with the reserved
    /// built-in factory ids at construction.
    pub data_serializable_factories: HashMap<i32, Arc<dyn IdentifiedFactory>>,
    /// User codecs, each keyed by its declared tag id.
    pub custom_serializers: Vec<Arc<dyn Codec>>,
    /// User codecs for nominally-registered compact types.
    pub compact_serializers: Vec<Arc<dyn CompactSerializer>>,
    /// Optional single fallback codec consulted before the JSON fallback.
    pub global_serializer: Option<Arc<dyn Codec>>,
}

impl Default for SerializationConfig {
    fn default() -> Self {
        SerializationConfig {
            default_number_type: DefaultNumberType::default(),
            is_big_endian: true,
            json_string_deserialization_policy: JsonDeserializationPolicy::default(),
            data_serializable_factories: HashMap::new(),
            custom_serializers: Vec::new(),
            compact_serializers: Vec::new(),
            global_serializer: None,
        }
    }
}

impl SerializationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn byte_order(&self) -> ByteOrderKind {
        if self.is_big_endian {
            ByteOrderKind::Big
        } else {
            ByteOrderKind::Little
        }
    }

    pub fn with_default_number_type(mut self, kind: DefaultNumberType) -> Self {
        self.default_number_type = kind;
        self
    }

    pub fn with_big_endian(mut self, big_endian: bool) -> Self {
        self.is_big_endian = big_endian;
        self
    }

    pub fn with_json_policy(mut self, policy: JsonDeserializationPolicy) -> Self {
        self.json_string_deserialization_policy = policy;
        self
    }

    pub fn with_factory(mut self, id: i32, factory: Arc<dyn IdentifiedFactory>) -> Self {
        self.data_serializable_factories.insert(id, factory);
        self
    }

    pub fn with_custom_serializer(mut self, codec: Arc<dyn Codec>) -> Self {
        self.custom_serializers.push(codec);
        self
    }

    pub fn with_compact_serializer(mut self, serializer: Arc<dyn CompactSerializer>) -> Self {
        self.compact_serializers.push(serializer);
        self
    }

    pub fn with_global_serializer(mut self, codec: Arc<dyn Codec>) -> Self {
        self.global_serializer = Some(codec);
        self
    }
}

impl fmt::Debug for SerializationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializationConfig")
            .field("default_number_type", &self.default_number_type)
            .field("is_big_endian", &self.is_big_endian)
            .field(
                "json_string_deserialization_policy",
                &self.json_string_deserialization_policy,
            )
            .field("factories", &self.data_serializable_factories.len())
            .field("custom_serializers", &self.custom_serializers.len())
            .field("compact_serializers", &self.compact_serializers.len())
            .field("global_serializer", &self.global_serializer.is_some())
            .finish()
    }
}
