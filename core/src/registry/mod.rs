//! registry/mod.rs
//! Codec contract and the frozen name <-> id <-> codec registry.
//!
//! Industry notes:
//! - Built exactly once per facade, read-only afterwards; concurrent
//!   `to_data`/`to_object` callers never need a lock here.
//! - Keys are a closed enum, not free-form strings: an unregistered name is
//!   a compile error, not a runtime surprise.

pub mod builder;
pub mod registry;
pub mod types;

pub use builder::*;
pub use registry::*;
pub use types::*;
