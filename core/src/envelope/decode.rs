//! envelope/decode.rs
//! Fixed-offset header reads over an already-validated envelope buffer.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::constants::{PARTITION_HASH_OFFSET, TYPE_ID_OFFSET};
use crate::cursor::ByteOrderKind;

// Callers guarantee the buffer passed length validation at construction,
// so these reads are infallible.

pub fn read_partition_hash(bytes: &[u8], order: ByteOrderKind) -> i32 {
    read_i32_at(bytes, PARTITION_HASH_OFFSET, order)
}

pub fn read_type_id(bytes: &[u8], order: ByteOrderKind) -> i32 {
    read_i32_at(bytes, TYPE_ID_OFFSET, order)
}

fn read_i32_at(bytes: &[u8], off: usize, order: ByteOrderKind) -> i32 {
    let b = &bytes[off..off + 4];
    match order {
        ByteOrderKind::Big => BigEndian::read_i32(b),
        ByteOrderKind::Little => LittleEndian::read_i32(b),
    }
}
