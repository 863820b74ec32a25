//! cursor/mod.rs
//! Positional byte cursors for codec payloads.
//!
//! Industry notes:
//! - One byte order per facade instance; header and payload share it.
//! - A cursor is owned exclusively by the operation that created it and is
//!   never aliased across concurrent calls.
//! - Nested objects reach back into the engine through `ObjectContext`, so
//!   codecs can embed values without holding a facade reference.

pub mod input;
pub mod output;

pub use input::*;
pub use output::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::SerializationError;
use crate::value::Value;

/// Wire byte order, fixed per facade instance and agreed with the cluster.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrderKind {
    Big,
    Little,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor truncated: need {need} more bytes, {have} remaining")]
    Truncated { need: usize, have: usize },

    #[error("invalid utf-8 in string payload")]
    InvalidUtf8,

    #[error("invalid length prefix: {0}")]
    InvalidLength(i32),
}

/// Seam back into the dispatch engine for nested (embedded) values.
/// Implemented by the facade's core; codecs only see the cursors.
pub trait ObjectContext: Send + Sync {
    fn write_object(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError>;
    fn read_object(&self, input: &mut DataInput) -> Result<Value, SerializationError>;
}
