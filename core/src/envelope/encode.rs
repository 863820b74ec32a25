//! envelope/encode.rs
//! Header writer; the resolved codec appends the payload after it.

use crate::cursor::DataOutput;
use crate::envelope::{Envelope, EnvelopeError};

/// Write the fixed header into a fresh cursor. Field order is load-bearing:
/// partition hash first, type id second.
pub fn write_header(out: &mut DataOutput, partition_hash: i32, type_id: i32) {
    out.write_i32(partition_hash);
    out.write_i32(type_id);
}

/// Seal a finished cursor into an immutable envelope.
pub fn seal(out: DataOutput) -> Result<Envelope, EnvelopeError> {
    Envelope::from_bytes(out.into_bytes())
}
