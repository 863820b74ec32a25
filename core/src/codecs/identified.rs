//! codecs/identified.rs
//! Factory-polymorphic ("identified") collaborator.
//!
//! The payload names a factory and a class; the reading side must hold a
//! factory with the same id or the decode fails outright. Factory id 0 is
//! reserved for the built-in generic factory, which reconstructs positional
//! field lists without user code.

use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::{IdentifiedRecord, Value};

/// Reconstructs identified payloads for one factory id.
pub trait IdentifiedFactory: Send + Sync {
    fn read(
        &self,
        factory_id: i32,
        class_id: i32,
        input: &mut DataInput,
    ) -> Result<Value, SerializationError>;
}

/// Built-in factory behind [`crate::constants::reserved_factory_ids::GENERIC`]:
/// positional fields, each through the object codec.
pub struct GenericIdentifiedFactory;

impl IdentifiedFactory for GenericIdentifiedFactory {
    fn read(
        &self,
        factory_id: i32,
        class_id: i32,
        input: &mut DataInput,
    ) -> Result<Value, SerializationError> {
        // Each embedded field carries at least its i32 type id.
        let count = input.read_len_of(4)?;
        let mut fields = Vec::with_capacity(count);
        for _ in 0..count {
            fields.push(input.read_object()?);
        }
        Ok(Value::Identified(IdentifiedRecord {
            factory_id,
            class_id,
            fields,
        }))
    }
}

pub struct IdentifiedCodec {
    factories: HashMap<i32, Arc<dyn IdentifiedFactory>>,
}

impl IdentifiedCodec {
    pub fn new(factories: HashMap<i32, Arc<dyn IdentifiedFactory>>) -> Self {
        IdentifiedCodec { factories }
    }
}

impl Codec for IdentifiedCodec {
    fn id(&self) -> i32 {
        type_ids::IDENTIFIED
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let record = match value {
            Value::Identified(r) => r,
            _ => {
                return Err(SerializationError::KindMismatch {
                    expected: "identified record",
                    actual: value.kind(),
                })
            }
        };
        out.write_i32(record.factory_id);
        out.write_i32(record.class_id);
        out.write_i32(record.fields.len() as i32);
        for field in &record.fields {
            out.write_object(field)?;
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let factory_id = input.read_i32()?;
        let class_id = input.read_i32()?;
        let factory = self
            .factories
            .get(&factory_id)
            .ok_or(SerializationError::UnknownFactory { factory_id })?;
        factory.read(factory_id, class_id, input)
    }
}
