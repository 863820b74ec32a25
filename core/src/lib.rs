//! datagrid-core
//!
//! Binary serialization engine for a partition-aware data grid client.
//!
//! Values enter as the closed [`value::Value`] universe, leave as
//! [`envelope::Envelope`] wire units (partition hash + type id + payload),
//! and come back deep-equal. Dispatch is a fixed precedence chain over a
//! registry frozen at facade construction.
//!
//! Entry point: [`service::SerializationService`].

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Value universe and configuration
pub mod config;
pub mod value;

// Wire layers
pub mod cursor;
pub mod envelope;

// Dispatch engine
pub mod codecs;
pub mod registry;
pub mod resolve;
pub mod service;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codecs::compact::{CompactSerializer, Schema, SchemaField};
    pub use crate::codecs::identified::IdentifiedFactory;
    pub use crate::config::{DefaultNumberType, JsonDeserializationPolicy, SerializationConfig};
    pub use crate::cursor::{ByteOrderKind, DataInput, DataOutput};
    pub use crate::envelope::Envelope;
    pub use crate::registry::Codec;
    pub use crate::service::{
        DefaultPartitioningStrategy, PartitioningStrategy, SerializationService,
    };
    pub use crate::types::SerializationError;
    pub use crate::value::{
        BigDecimal, BigInt, IdentifiedRecord, KeyedValue, PortableRecord, Record, TaggedValue,
        Value, ValueKind,
    };
}
