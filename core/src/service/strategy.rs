//! service/strategy.rs
//! Partition hash policy.

use crate::constants::PARTITION_HASH_SEED;
use crate::utils::murmur3_x86_32;
use crate::value::Value;

/// Decides the partition hash written into the envelope header.
///
/// `of_value` covers values serialized without an explicit partition key;
/// `of_key_bytes` covers keyed values and sees the key's serialized bytes,
/// so equal keys always land on equal hashes no matter how they were built.
pub trait PartitioningStrategy: Send + Sync {
    fn of_value(&self, _value: &Value) -> i32 {
        0
    }

    fn of_key_bytes(&self, bytes: &[u8]) -> i32 {
        murmur3_x86_32(bytes, PARTITION_HASH_SEED)
    }
}

/// Cluster-default policy: zero hash for plain values, murmur3 over the
/// serialized key for keyed values.
pub struct DefaultPartitioningStrategy;

impl PartitioningStrategy for DefaultPartitioningStrategy {}
