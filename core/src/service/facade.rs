//! service/facade.rs
//! `SerializationService`: registry construction, `to_data` / `to_object`,
//! and the object context nested codecs reach back through.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use crate::codecs::array::{
    BooleanArrayCodec, ByteArrayCodec, DoubleArrayCodec, FloatArrayCodec, IntegerArrayCodec,
    LongArrayCodec, ShortArrayCodec, StringArrayCodec,
};
use crate::codecs::bignum::{BigDecimalCodec, BigIntegerCodec};
use crate::codecs::compact::{CompactCodec, Schema, SchemaCatalog};
use crate::codecs::identified::{GenericIdentifiedFactory, IdentifiedCodec, IdentifiedFactory};
use crate::codecs::json::JsonCodec;
use crate::codecs::null::NullCodec;
use crate::codecs::portable::PortableCodec;
use crate::codecs::primitive::{
    BooleanCodec, ByteCodec, DoubleCodec, FloatCodec, IntegerCodec, LongCodec, ShortCodec,
    StringCodec,
};
use crate::codecs::temporal::{
    LocalDateCodec, LocalDateTimeCodec, LocalTimeCodec, OffsetDateTimeCodec,
};
use crate::codecs::uuid::UuidCodec;
use crate::config::{DefaultNumberType, SerializationConfig};
use crate::constants::{reserved_factory_ids, BuiltinTypeId, MAX_PARTITION_KEY_DEPTH};
use crate::cursor::{ByteOrderKind, DataInput, DataOutput, ObjectContext};
use crate::envelope::{self, Envelope};
use crate::registry::{CodecKey, CodecRegistry, RegistryBuilder, RegistryError};
use crate::resolve::resolve;
use crate::service::{DefaultPartitioningStrategy, PartitioningStrategy};
use crate::types::SerializationError;
use crate::utils::enum_name_or_hex;
use crate::value::Value;

/// Shared engine state: frozen registry, schema catalog, wire options.
/// Also the [`ObjectContext`] implementation, so cursors created here can
/// embed and extract nested objects.
struct ServiceCore {
    registry: CodecRegistry,
    catalog: Arc<SchemaCatalog>,
    order: ByteOrderKind,
    default_number: DefaultNumberType,
}

impl ServiceCore {
    fn encode(
        self: &Arc<Self>,
        value: &Value,
        partition_hash: i32,
    ) -> Result<Envelope, SerializationError> {
        let codec = resolve(&self.registry, &self.catalog, self.default_number, value)?;
        let mut out = DataOutput::with_context(self.order, self.clone() as Arc<dyn ObjectContext>);
        envelope::write_header(&mut out, partition_hash, codec.id());
        codec.write(&mut out, value)?;
        Ok(envelope::seal(out)?)
    }
}

impl ObjectContext for ServiceCore {
    fn write_object(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            // Partition wrappers are header-level; nested positions embed
            // the wrapped value only.
            Value::Keyed(k) => self.write_object(out, &k.value),
            // Pre-serialized envelopes embed as their type id + payload.
            Value::Data(env) => {
                out.write_i32(env.type_id(self.order));
                out.write_raw(env.payload());
                Ok(())
            }
            v => {
                let codec = resolve(&self.registry, &self.catalog, self.default_number, v)?;
                out.write_i32(codec.id());
                codec.write(out, v)
            }
        }
    }

    fn read_object(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let type_id = input.read_i32()?;
        let codec = self
            .registry
            .lookup_by_id(type_id)
            .ok_or(SerializationError::NoDeserializerFound { type_id })?;
        codec.read(input)
    }
}

/// The serialization engine facade.
///
/// Construction freezes the codec registry from the supplied configuration;
/// every later call is a pure function of the frozen state (the schema
/// catalog being the one, internally synchronized, exception).
#[derive(Clone)]
pub struct SerializationService {
    core: Arc<ServiceCore>,
    strategy: Arc<dyn PartitioningStrategy>,
}

impl SerializationService {
    pub fn new(config: SerializationConfig) -> Result<Self, SerializationError> {
        Self::with_strategy(config, Arc::new(DefaultPartitioningStrategy))
    }

    pub fn with_strategy(
        config: SerializationConfig,
        strategy: Arc<dyn PartitioningStrategy>,
    ) -> Result<Self, SerializationError> {
        let order = config.byte_order();
        let default_number = config.default_number_type;

        let catalog = Arc::new(SchemaCatalog::new());
        for serializer in &config.compact_serializers {
            catalog.register_type_name(serializer.type_name());
        }

        let mut factories: HashMap<i32, Arc<dyn IdentifiedFactory>> = HashMap::new();
        factories.insert(
            reserved_factory_ids::GENERIC,
            Arc::new(GenericIdentifiedFactory),
        );
        for (id, factory) in &config.data_serializable_factories {
            if factories.insert(*id, factory.clone()).is_some() {
                return Err(RegistryError::DuplicateFactory { id: *id }.into());
            }
        }

        let mut builder = RegistryBuilder::new();
        builder.register(CodecKey::Null, Arc::new(NullCodec))?;
        builder.register(CodecKey::Bool, Arc::new(BooleanCodec))?;
        builder.register(CodecKey::I8, Arc::new(ByteCodec))?;
        builder.register(CodecKey::I16, Arc::new(ShortCodec))?;
        builder.register(CodecKey::I32, Arc::new(IntegerCodec))?;
        builder.register(CodecKey::I64, Arc::new(LongCodec))?;
        builder.register(CodecKey::F32, Arc::new(FloatCodec))?;
        builder.register(CodecKey::F64, Arc::new(DoubleCodec))?;
        builder.register(CodecKey::Str, Arc::new(StringCodec))?;
        builder.register(CodecKey::Bytes, Arc::new(ByteArrayCodec))?;
        builder.register(CodecKey::BoolArray, Arc::new(BooleanArrayCodec))?;
        builder.register(CodecKey::I16Array, Arc::new(ShortArrayCodec))?;
        builder.register(CodecKey::I32Array, Arc::new(IntegerArrayCodec))?;
        builder.register(CodecKey::I64Array, Arc::new(LongArrayCodec))?;
        builder.register(CodecKey::F32Array, Arc::new(FloatArrayCodec))?;
        builder.register(CodecKey::F64Array, Arc::new(DoubleArrayCodec))?;
        builder.register(CodecKey::StrArray, Arc::new(StringArrayCodec))?;
        builder.register(CodecKey::BigInt, Arc::new(BigIntegerCodec))?;
        builder.register(CodecKey::BigDecimal, Arc::new(BigDecimalCodec))?;
        builder.register(CodecKey::Uuid, Arc::new(UuidCodec))?;
        builder.register(CodecKey::Date, Arc::new(LocalDateCodec))?;
        builder.register(CodecKey::Time, Arc::new(LocalTimeCodec))?;
        builder.register(CodecKey::DateTime, Arc::new(LocalDateTimeCodec))?;
        builder.register(CodecKey::OffsetDateTime, Arc::new(OffsetDateTimeCodec))?;
        builder.register(
            CodecKey::Json,
            Arc::new(JsonCodec::new(config.json_string_deserialization_policy)),
        )?;
        builder.register(
            CodecKey::Compact,
            Arc::new(CompactCodec::new(
                catalog.clone(),
                &config.compact_serializers,
            )),
        )?;
        builder.register(
            CodecKey::Identified,
            Arc::new(IdentifiedCodec::new(factories)),
        )?;
        builder.register(CodecKey::Portable, Arc::new(PortableCodec))?;

        for codec in &config.custom_serializers {
            builder.register_custom(codec.clone())?;
        }
        if let Some(global) = &config.global_serializer {
            builder.register(CodecKey::Global, global.clone())?;
        }

        let registry = builder.freeze();
        log::debug!(
            "serialization registry frozen: {} codecs, {:?} byte order, default number {:?}",
            registry.len(),
            order,
            default_number
        );

        Ok(SerializationService {
            core: Arc::new(ServiceCore {
                registry,
                catalog,
                order,
                default_number,
            }),
            strategy,
        })
    }

    pub fn byte_order(&self) -> ByteOrderKind {
        self.core.order
    }

    /// Serialize a value into an envelope using the facade's partitioning
    /// strategy.
    pub fn to_data(&self, value: &Value) -> Result<Envelope, SerializationError> {
        self.to_data_with_strategy(value, self.strategy.as_ref())
    }

    /// Serialize with a caller-supplied partitioning strategy.
    pub fn to_data_with_strategy(
        &self,
        value: &Value,
        strategy: &dyn PartitioningStrategy,
    ) -> Result<Envelope, SerializationError> {
        self.to_data_at_depth(value, strategy, 0)
    }

    fn to_data_at_depth(
        &self,
        value: &Value,
        strategy: &dyn PartitioningStrategy,
        depth: usize,
    ) -> Result<Envelope, SerializationError> {
        if depth > MAX_PARTITION_KEY_DEPTH {
            return Err(SerializationError::KeyDepthExceeded {
                max: MAX_PARTITION_KEY_DEPTH,
            });
        }
        match value {
            // Already serialized; to_data is idempotent.
            Value::Data(env) => Ok(env.clone()),
            Value::Keyed(keyed) => {
                let key_data = self.to_data_at_depth(&keyed.key, strategy, depth + 1)?;
                let hash = strategy.of_key_bytes(key_data.as_bytes());
                match &*keyed.value {
                    Value::Data(env) => Ok(env.clone()),
                    v => self.core.encode(v, hash),
                }
            }
            v => self.core.encode(v, strategy.of_value(v)),
        }
    }

    /// Deserialize an envelope back into a value.
    pub fn to_object(&self, data: &Envelope) -> Result<Value, SerializationError> {
        let type_id = data.type_id(self.core.order);
        log::trace!(
            "decode envelope: type {}, {} payload bytes",
            enum_name_or_hex::<BuiltinTypeId>(type_id),
            data.payload().len()
        );
        let codec = self
            .core
            .registry
            .lookup_by_id(type_id)
            .ok_or(SerializationError::NoDeserializerFound { type_id })?;
        let mut input =
            DataInput::with_context(data.payload_bytes(), self.core.order, self.core.clone());
        codec.read(&mut input)
    }

    /// Embed a value at the cursor's position: type id + payload, no
    /// envelope header.
    pub fn write_object(
        &self,
        out: &mut DataOutput,
        value: &Value,
    ) -> Result<(), SerializationError> {
        self.core.write_object(out, value)
    }

    /// Read an embedded value from the cursor's position.
    pub fn read_object(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        self.core.read_object(input)
    }

    /// Bind a compact schema to a nominal type name.
    pub fn register_schema(&self, schema: Schema, type_name: &str) {
        self.core.catalog.register_schema(Arc::new(schema), type_name);
    }

    /// Output cursor wired to this engine; custom serializers use these to
    /// embed nested objects.
    pub fn new_output(&self) -> DataOutput {
        DataOutput::with_context(self.core.order, self.core.clone())
    }

    /// Input cursor wired to this engine.
    pub fn new_input(&self, bytes: Bytes) -> DataInput {
        DataInput::with_context(bytes, self.core.order, self.core.clone())
    }
}
