//! codecs/bignum.rs
//! Arbitrary-precision integer and decimal codecs. The magnitude travels as
//! two's-complement big-endian bytes regardless of the cursor byte order;
//! that representation is shared with the other language clients.

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::{BigDecimal, BigInt, Value};

fn mismatch(expected: &'static str, value: &Value) -> SerializationError {
    SerializationError::KindMismatch {
        expected,
        actual: value.kind(),
    }
}

pub struct BigIntegerCodec;

impl Codec for BigIntegerCodec {
    fn id(&self) -> i32 {
        type_ids::BIG_INTEGER
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::BigInt(v) => {
                out.write_byte_array(&v.bytes);
                Ok(())
            }
            _ => Err(mismatch("big integer", value)),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::BigInt(BigInt {
            bytes: input.read_byte_array()?,
        }))
    }
}

pub struct BigDecimalCodec;

impl Codec for BigDecimalCodec {
    fn id(&self) -> i32 {
        type_ids::BIG_DECIMAL
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::BigDecimal(v) => {
                out.write_byte_array(&v.unscaled.bytes);
                out.write_i32(v.scale);
                Ok(())
            }
            _ => Err(mismatch("big decimal", value)),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let unscaled = BigInt {
            bytes: input.read_byte_array()?,
        };
        let scale = input.read_i32()?;
        Ok(Value::BigDecimal(BigDecimal { unscaled, scale }))
    }
}
