//! codecs/primitive.rs
//! Scalar codecs: boolean, the integer widths, the float widths, string.
//!
//! Numeric writes go through the value's best-effort accessors so the
//! width-agnostic `Number` kind lands on whichever codec the configuration
//! resolved it to.

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

pub struct BooleanCodec;

impl Codec for BooleanCodec {
    fn id(&self) -> i32 {
        type_ids::BOOLEAN
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_bool().ok_or_else(|| mismatch("boolean", value))?;
        out.write_bool(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::Bool(input.read_bool()?))
    }
}

pub struct ByteCodec;

impl Codec for ByteCodec {
    fn id(&self) -> i32 {
        type_ids::BYTE
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_i8().ok_or_else(|| mismatch("byte", value))?;
        out.write_i8(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::I8(input.read_i8()?))
    }
}

pub struct ShortCodec;

impl Codec for ShortCodec {
    fn id(&self) -> i32 {
        type_ids::SHORT
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_i16().ok_or_else(|| mismatch("short", value))?;
        out.write_i16(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::I16(input.read_i16()?))
    }
}

pub struct IntegerCodec;

impl Codec for IntegerCodec {
    fn id(&self) -> i32 {
        type_ids::INTEGER
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_i32().ok_or_else(|| mismatch("integer", value))?;
        out.write_i32(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::I32(input.read_i32()?))
    }
}

pub struct LongCodec;

impl Codec for LongCodec {
    fn id(&self) -> i32 {
        type_ids::LONG
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_i64().ok_or_else(|| mismatch("long", value))?;
        out.write_i64(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::I64(input.read_i64()?))
    }
}

pub struct FloatCodec;

impl Codec for FloatCodec {
    fn id(&self) -> i32 {
        type_ids::FLOAT
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_f32().ok_or_else(|| mismatch("float", value))?;
        out.write_f32(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::F32(input.read_f32()?))
    }
}

pub struct DoubleCodec;

impl Codec for DoubleCodec {
    fn id(&self) -> i32 {
        type_ids::DOUBLE
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_f64().ok_or_else(|| mismatch("double", value))?;
        out.write_f64(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::F64(input.read_f64()?))
    }
}

pub struct StringCodec;

impl Codec for StringCodec {
    fn id(&self) -> i32 {
        type_ids::STRING
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let v = value.as_str().ok_or_else(|| mismatch("string", value))?;
        out.write_str(v);
        Ok(())
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        Ok(Value::Str(input.read_str()?))
    }
}
