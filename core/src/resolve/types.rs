//! resolve/types.rs
//! The capability vocabulary the dispatcher speaks.

use crate::registry::ScalarKind;

/// What a value is capable of, serialization-wise. One value maps to exactly
/// one capability; the dispatcher turns the capability into a registry key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Not a value at all; serialization must fail loudly.
    Invalid,
    Null,
    Scalar(ScalarKind),
    /// Homogeneous-by-assumption array, classified by its first element.
    Array(ScalarKind),
    /// Self-describing structured record (compact format).
    Structured,
    /// Factory-polymorphic record (identified format).
    FactoryPolymorphic,
    /// Versioned-polymorphic record (portable format).
    PortablePolymorphic,
    /// Value claimed by a user codec with this tag.
    CustomTagged(i32),
    /// Global serializer if present, otherwise the JSON rendition.
    Fallback,
}
