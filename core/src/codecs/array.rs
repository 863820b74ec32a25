//! codecs/array.rs
//! Array codecs: i32 element count + elements in the cursor's byte order.
//!
//! Elements are coerced through the value accessors; a heterogeneous array
//! encodes best-effort under its first element's kind, exactly as the
//! source system does. Changing that heuristic would break wire
//! compatibility with deployed clusters.

use bytes::Bytes;

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::Value;

fn mismatch(expected: &'static str, value: &Value) -> SerializationError {
    SerializationError::KindMismatch {
        expected,
        actual: value.kind(),
    }
}

fn elements<'v>(expected: &'static str, value: &'v Value) -> Result<&'v [Value], SerializationError> {
    match value {
        Value::List(xs) => Ok(xs),
        _ => Err(mismatch(expected, value)),
    }
}

/// Byte arrays serve double duty: the buffer kind writes raw, and generic
/// arrays of bytes coerce element-wise. Reads always come back as a buffer.
pub struct ByteArrayCodec;

impl Codec for ByteArrayCodec {
    fn id(&self) -> i32 {
        type_ids::BYTE_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        match value {
            Value::Bytes(b) => {
                out.write_byte_array(b);
                Ok(())
            }
            Value::List(xs) => {
                out.write_i32(xs.len() as i32);
                for x in xs {
                    let v = x.as_i8().ok_or_else(|| mismatch("byte", x))?;
                    out.write_i8(v);
                }
                Ok(())
            }
            _ => Err(mismatch("byte array", value)),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::Bytes(Bytes::from(input.read_byte_array()?)))
    }
}

pub struct BooleanArrayCodec;

impl Codec for BooleanArrayCodec {
    fn id(&self) -> i32 {
        type_ids::BOOLEAN_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let xs = elements("boolean array", value)?;
        out.write_i32(xs.len() as i32);
        for x in xs {
            let v = x.as_bool().ok_or_else(|| mismatch("boolean", x))?;
            out.write_bool(v);
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let len = input.read_len_of(1)?;
        let mut xs = Vec::with_capacity(len);
        for _ in 0..len {
            xs.push(Value::Bool(input.read_bool()?));
        }
        Ok(Value::List(xs))
    }
}

pub struct ShortArrayCodec;

impl Codec for ShortArrayCodec {
    fn id(&self) -> i32 {
        type_ids::SHORT_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let xs = elements("short array", value)?;
        out.write_i32(xs.len() as i32);
        for x in xs {
            let v = x.as_i16().ok_or_else(|| mismatch("short", x))?;
            out.write_i16(v);
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let len = input.read_len_of(2)?;
        let mut xs = Vec::with_capacity(len);
        for _ in 0..len {
            xs.push(Value::I16(input.read_i16()?));
        }
        Ok(Value::List(xs))
    }
}

pub struct IntegerArrayCodec;

impl Codec for IntegerArrayCodec {
    fn id(&self) -> i32 {
        type_ids::INTEGER_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let xs = elements("integer array", value)?;
        out.write_i32(xs.len() as i32);
        for x in xs {
            let v = x.as_i32().ok_or_else(|| mismatch("integer", x))?;
            out.write_i32(v);
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let len = input.read_len_of(4)?;
        let mut xs = Vec::with_capacity(len);
        for _ in 0..len {
            xs.push(Value::I32(input.read_i32()?));
        }
        Ok(Value::List(xs))
    }
}

pub struct LongArrayCodec;

impl Codec for LongArrayCodec {
    fn id(&self) -> i32 {
        type_ids::LONG_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let xs = elements("long array", value)?;
        out.write_i32(xs.len() as i32);
        for x in xs {
            let v = x.as_i64().ok_or_else(|| mismatch("long", x))?;
            out.write_i64(v);
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let len = input.read_len_of(8)?;
        let mut xs = Vec::with_capacity(len);
        for _ in 0..len {
            xs.push(Value::I64(input.read_i64()?));
        }
        Ok(Value::List(xs))
    }
}

pub struct FloatArrayCodec;

impl Codec for FloatArrayCodec {
    fn id(&self) -> i32 {
        type_ids::FLOAT_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let xs = elements("float array", value)?;
        out.write_i32(xs.len() as i32);
        for x in xs {
            let v = x.as_f32().ok_or_else(|| mismatch("float", x))?;
            out.write_f32(v);
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let len = input.read_len_of(4)?;
        let mut xs = Vec::with_capacity(len);
        for _ in 0..len {
            xs.push(Value::F32(input.read_f32()?));
        }
        Ok(Value::List(xs))
    }
}

pub struct DoubleArrayCodec;

impl Codec for DoubleArrayCodec {
    fn id(&self) -> i32 {
        type_ids::DOUBLE_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let xs = elements("double array", value)?;
        out.write_i32(xs.len() as i32);
        for x in xs {
            let v = x.as_f64().ok_or_else(|| mismatch("double", x))?;
            out.write_f64(v);
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let len = input.read_len_of(8)?;
        let mut xs = Vec::with_capacity(len);
        for _ in 0..len {
            xs.push(Value::F64(input.read_f64()?));
        }
        Ok(Value::List(xs))
    }
}

/// String arrays honor the null length sentinel per element.
pub struct StringArrayCodec;

impl Codec for StringArrayCodec {
    fn id(&self) -> i32 {
        type_ids::STRING_ARRAY
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let xs = elements("string array", value)?;
        out.write_i32(xs.len() as i32);
        for x in xs {
            match x {
                Value::Str(s) => out.write_str_nullable(Some(s)),
                Value::Null => out.write_str_nullable(None),
                _ => return Err(mismatch("string", x)),
            }
        }
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        // Each element carries at least its own length prefix.
        let len = input.read_len_of(4)?;
        let mut xs = Vec::with_capacity(len);
        for _ in 0..len {
            xs.push(match input.read_str_nullable()? {
                Some(s) => Value::Str(s),
                None => Value::Null,
            });
        }
        Ok(Value::List(xs))
    }
}
