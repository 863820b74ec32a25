//! envelope/mod.rs
//! The wire unit (`Data`): partition hash + type id + opaque payload.
//!
//! Industry notes:
//! - Fixed 8-byte header enables deterministic IO and simple embedding.
//! - Byte order is per facade instance and must match the cluster; both
//!   header and payload use the same order.
//! - Envelopes are immutable value objects with no facade back-reference.

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::*;
pub use encode::*;
pub use types::*;
