//! cursor/output.rs
//! Append-only output cursor. Codecs write payload bytes here; the facade
//! writes the envelope header through the same cursor before handing it over.

use std::sync::Arc;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::Bytes;

use crate::constants::NULL_ARRAY_LENGTH;
use crate::cursor::{ByteOrderKind, ObjectContext};
use crate::types::SerializationError;
use crate::value::Value;

pub struct DataOutput {
    buf: Vec<u8>,
    order: ByteOrderKind,
    ctx: Option<Arc<dyn ObjectContext>>,
}

impl DataOutput {
    /// Cursor without an object context; primitives only.
    pub fn detached(order: ByteOrderKind) -> Self {
        DataOutput {
            buf: Vec::new(),
            order,
            ctx: None,
        }
    }

    /// Cursor wired to a dispatch engine, able to embed nested objects.
    pub fn with_context(order: ByteOrderKind, ctx: Arc<dyn ObjectContext>) -> Self {
        DataOutput {
            buf: Vec::new(),
            order,
            ctx: Some(ctx),
        }
    }

    pub fn order(&self) -> ByteOrderKind {
        self.order
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.buf)
    }

    // --- primitives ---

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.buf.push(v as u8);
    }

    pub fn write_i8(&mut self, v: i8) {
        self.buf.push(v as u8);
    }

    pub fn write_i16(&mut self, v: i16) {
        let mut b = [0u8; 2];
        match self.order {
            ByteOrderKind::Big => BigEndian::write_i16(&mut b, v),
            ByteOrderKind::Little => LittleEndian::write_i16(&mut b, v),
        }
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i32(&mut self, v: i32) {
        let mut b = [0u8; 4];
        match self.order {
            ByteOrderKind::Big => BigEndian::write_i32(&mut b, v),
            ByteOrderKind::Little => LittleEndian::write_i32(&mut b, v),
        }
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i64(&mut self, v: i64) {
        let mut b = [0u8; 8];
        match self.order {
            ByteOrderKind::Big => BigEndian::write_i64(&mut b, v),
            ByteOrderKind::Little => LittleEndian::write_i64(&mut b, v),
        }
        self.buf.extend_from_slice(&b);
    }

    pub fn write_f32(&mut self, v: f32) {
        let mut b = [0u8; 4];
        match self.order {
            ByteOrderKind::Big => BigEndian::write_f32(&mut b, v),
            ByteOrderKind::Little => LittleEndian::write_f32(&mut b, v),
        }
        self.buf.extend_from_slice(&b);
    }

    pub fn write_f64(&mut self, v: f64) {
        let mut b = [0u8; 8];
        match self.order {
            ByteOrderKind::Big => BigEndian::write_f64(&mut b, v),
            ByteOrderKind::Little => LittleEndian::write_f64(&mut b, v),
        }
        self.buf.extend_from_slice(&b);
    }

    // --- composites ---

    /// Raw bytes, no length prefix.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// i32 byte length + raw bytes.
    pub fn write_byte_array(&mut self, bytes: &[u8]) {
        self.write_i32(bytes.len() as i32);
        self.buf.extend_from_slice(bytes);
    }

    /// i32 byte length + UTF-8 bytes.
    pub fn write_str(&mut self, s: &str) {
        self.write_byte_array(s.as_bytes());
    }

    /// `write_str`, with the null length sentinel for absent elements.
    pub fn write_str_nullable(&mut self, s: Option<&str>) {
        match s {
            Some(s) => self.write_str(s),
            None => self.write_i32(NULL_ARRAY_LENGTH),
        }
    }

    /// Embed a nested value: type id + payload, no envelope header.
    pub fn write_object(&mut self, value: &Value) -> Result<(), SerializationError> {
        let ctx = self
            .ctx
            .clone()
            .ok_or_else(|| SerializationError::Validation("cursor has no object context".into()))?;
        ctx.write_object(self, value)
    }
}
