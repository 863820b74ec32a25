//! codecs/null.rs
//! Null codec: empty payload, type id 0.

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::Value;

pub struct NullCodec;

impl Codec for NullCodec {
    fn id(&self) -> i32 {
        type_ids::NULL
    }

    fn write(&self, _out: &mut DataOutput, _value: &Value) -> Result<(), SerializationError> {
        Ok(())
    }

    fn read(&self, _input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::Null)
    }
}
