//! service/mod.rs
//! The serialization facade: the one entry point callers hold.
//!
//! Industry notes:
//! - Everything is wired and validated in the constructor; after that the
//!   facade is immutable except for schema registration, which the catalog
//!   guards itself.
//! - The facade is cheap to clone and safe to share across threads.

mod facade;
mod strategy;

pub use facade::SerializationService;
pub use strategy::{DefaultPartitioningStrategy, PartitioningStrategy};
