//! value/mod.rs
//! The closed runtime value universe the engine serializes.
//!
//! Industry notes:
//! - A single sum type replaces duck-typed probing: classification is an
//!   exhaustive match, so dispatch can never be ambiguous about order.
//! - Values are plain data; nothing here references the facade.

pub mod kind;
pub mod types;

pub use kind::*;
pub use types::*;
