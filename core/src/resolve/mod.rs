//! resolve/mod.rs
//! Capability classification and codec dispatch.

mod resolver;
mod types;

pub use resolver::{classify, resolve, scalar_kind_of};
pub use types::Capability;
