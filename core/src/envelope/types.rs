//! envelope/types.rs
//! Immutable envelope buffer and its validation error.

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

use crate::constants::HEADER_LEN;
use crate::cursor::ByteOrderKind;
use crate::envelope::decode;

/// Wire layout:
///
/// ```text
/// [ partition_hash (4) ]
/// [ type_id        (4) ]
/// [ payload        (N) ]
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    bytes: Bytes,
}

impl Envelope {
    /// Wrap serialized bytes. A complete envelope always carries the full
    /// header; anything shorter is rejected, never partially interpreted.
    pub fn from_bytes(bytes: Bytes) -> Result<Self, EnvelopeError> {
        if bytes.len() < HEADER_LEN {
            return Err(EnvelopeError::Truncated {
                need: HEADER_LEN,
                have: bytes.len(),
            });
        }
        Ok(Envelope { bytes })
    }

    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, EnvelopeError> {
        Self::from_bytes(Bytes::from(bytes))
    }

    pub fn partition_hash(&self, order: ByteOrderKind) -> i32 {
        decode::read_partition_hash(&self.bytes, order)
    }

    pub fn type_id(&self, order: ByteOrderKind) -> i32 {
        decode::read_type_id(&self.bytes, order)
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    pub fn payload_bytes(&self) -> Bytes {
        self.bytes.slice(HEADER_LEN..)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn total_len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = &self.bytes[..self.bytes.len().min(16)];
        write!(
            f,
            "Envelope {{ len: {}, head: {} }}",
            self.bytes.len(),
            hex::encode(preview)
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("truncated envelope: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },
}
