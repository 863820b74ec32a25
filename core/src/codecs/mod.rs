//! codecs/mod.rs
//! Built-in collaborator codecs registered into the registry at facade
//! construction. Each implements the `Codec` contract; payload layouts are
//! deterministic and fixed, the receiving cluster member may be another
//! language entirely.

pub mod array;
pub mod bignum;
pub mod compact;
pub mod identified;
pub mod json;
pub mod null;
pub mod portable;
pub mod primitive;
pub mod temporal;
pub mod uuid;
