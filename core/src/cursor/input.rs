//! cursor/input.rs
//! Bounds-checked input cursor over an immutable byte sequence.

use std::sync::Arc;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::Bytes;

use crate::constants::NULL_ARRAY_LENGTH;
use crate::cursor::{ByteOrderKind, CursorError, ObjectContext};
use crate::types::SerializationError;
use crate::value::Value;

pub struct DataInput {
    bytes: Bytes,
    pos: usize,
    order: ByteOrderKind,
    ctx: Option<Arc<dyn ObjectContext>>,
}

impl DataInput {
    /// Cursor without an object context; primitives only.
    pub fn detached(bytes: Bytes, order: ByteOrderKind) -> Self {
        DataInput {
            bytes,
            pos: 0,
            order,
            ctx: None,
        }
    }

    /// Cursor wired to a dispatch engine, able to read nested objects.
    pub fn with_context(bytes: Bytes, order: ByteOrderKind, ctx: Arc<dyn ObjectContext>) -> Self {
        DataInput {
            bytes,
            pos: 0,
            order,
            ctx: Some(ctx),
        }
    }

    pub fn order(&self) -> ByteOrderKind {
        self.order
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&[u8], CursorError> {
        if self.remaining() < n {
            return Err(CursorError::Truncated {
                need: n,
                have: self.remaining(),
            });
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    // --- primitives ---

    pub fn read_u8(&mut self) -> Result<u8, CursorError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_bool(&mut self) -> Result<bool, CursorError> {
        Ok(self.take(1)?[0] != 0)
    }

    pub fn read_i8(&mut self) -> Result<i8, CursorError> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16, CursorError> {
        let order = self.order;
        let b = self.take(2)?;
        Ok(match order {
            ByteOrderKind::Big => BigEndian::read_i16(b),
            ByteOrderKind::Little => LittleEndian::read_i16(b),
        })
    }

    pub fn read_i32(&mut self) -> Result<i32, CursorError> {
        let order = self.order;
        let b = self.take(4)?;
        Ok(match order {
            ByteOrderKind::Big => BigEndian::read_i32(b),
            ByteOrderKind::Little => LittleEndian::read_i32(b),
        })
    }

    pub fn read_i64(&mut self) -> Result<i64, CursorError> {
        let order = self.order;
        let b = self.take(8)?;
        Ok(match order {
            ByteOrderKind::Big => BigEndian::read_i64(b),
            ByteOrderKind::Little => LittleEndian::read_i64(b),
        })
    }

    pub fn read_f32(&mut self) -> Result<f32, CursorError> {
        let order = self.order;
        let b = self.take(4)?;
        Ok(match order {
            ByteOrderKind::Big => BigEndian::read_f32(b),
            ByteOrderKind::Little => LittleEndian::read_f32(b),
        })
    }

    pub fn read_f64(&mut self) -> Result<f64, CursorError> {
        let order = self.order;
        let b = self.take(8)?;
        Ok(match order {
            ByteOrderKind::Big => BigEndian::read_f64(b),
            ByteOrderKind::Little => LittleEndian::read_f64(b),
        })
    }

    // --- composites ---

    /// Non-negative i32 length prefix, validated before allocation.
    pub fn read_len(&mut self) -> Result<usize, CursorError> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(CursorError::InvalidLength(len));
        }
        Ok(len as usize)
    }

    /// Element count prefix, additionally bounded against the bytes actually
    /// present: a count that cannot fit in the remaining input is rejected
    /// before anything is allocated, so a corrupt length fails the read
    /// instead of the process.
    pub fn read_len_of(&mut self, min_element_size: usize) -> Result<usize, CursorError> {
        let len = self.read_len()?;
        let have = self.remaining();
        if len > have / min_element_size.max(1) {
            return Err(CursorError::Truncated {
                need: len.saturating_mul(min_element_size),
                have,
            });
        }
        Ok(len)
    }

    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, CursorError> {
        let len = self.read_len()?;
        Ok(self.take(len)?.to_vec())
    }

    pub fn read_str(&mut self) -> Result<String, CursorError> {
        let bytes = self.read_byte_array()?;
        String::from_utf8(bytes).map_err(|_| CursorError::InvalidUtf8)
    }

    /// `read_str`, honoring the null length sentinel.
    pub fn read_str_nullable(&mut self) -> Result<Option<String>, CursorError> {
        let len = self.read_i32()?;
        if len == NULL_ARRAY_LENGTH {
            return Ok(None);
        }
        if len < 0 {
            return Err(CursorError::InvalidLength(len));
        }
        let bytes = self.take(len as usize)?.to_vec();
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| CursorError::InvalidUtf8)
    }

    /// Read a nested value: type id + payload, no envelope header.
    pub fn read_object(&mut self) -> Result<Value, SerializationError> {
        let ctx = self
            .ctx
            .clone()
            .ok_or_else(|| SerializationError::Validation("cursor has no object context".into()))?;
        ctx.read_object(self)
    }
}
