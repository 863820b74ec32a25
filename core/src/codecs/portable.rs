//! codecs/portable.rs
//! Versioned-polymorphic ("portable") collaborator.
//!
//! Unlike the identified format, fields travel as (name, object) pairs so a
//! reader on a different class version can still locate the fields it knows.
//! Names are written in sorted order, which keeps encoding deterministic.

use std::collections::BTreeMap;

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::{PortableRecord, Value};

pub struct PortableCodec;

impl Codec for PortableCodec {
    fn id(&self) -> i32 {
        type_ids::PORTABLE
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let record = match value {
            Value::Portable(r) => r,
            _ => {
                return Err(SerializationError::KindMismatch {
                    expected: "portable record",
                    actual: value.kind(),
                })
            }
        };
        out.write_i32(record.factory_id);
        out.write_i32(record.class_id);
        out.write_i32(record.version);
        out.write_i32(record.fields.len() as i32);
        for (name, field) in &record.fields {
            out.write_str(name);
            out.write_object(field)?;
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let factory_id = input.read_i32()?;
        let class_id = input.read_i32()?;
        let version = input.read_i32()?;
        // Each pair carries at least a name length prefix and a type id.
        let count = input.read_len_of(8)?;
        let mut fields = BTreeMap::new();
        for _ in 0..count {
            let name = input.read_str()?;
            let field = input.read_object()?;
            fields.insert(name, field);
        }
        Ok(Value::Portable(PortableRecord {
            factory_id,
            class_id,
            version,
            fields,
        }))
    }
}
