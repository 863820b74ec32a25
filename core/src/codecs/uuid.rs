//! codecs/uuid.rs
//! UUID codec: most-significant then least-significant 64 bits.

use uuid::Uuid;

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::Value;

pub struct UuidCodec;

impl Codec for UuidCodec {
    fn id(&self) -> i32 {
        type_ids::UUID
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::Uuid(u) => {
                let (msb, lsb) = u.as_u64_pair();
                out.write_i64(msb as i64);
                out.write_i64(lsb as i64);
                Ok(())
            }
            _ => Err(SerializationError::KindMismatch {
                expected: "uuid",
                actual: value.kind(),
            }),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let msb = input.read_i64()? as u64;
        let lsb = input.read_i64()? as u64;
        Ok(Value::Uuid(Uuid::from_u64_pair(msb, lsb)))
    }
}
