//! value/kind.rs
//! Kind tags for classification and diagnostics.

/// One tag per `Value` variant. Used in error messages and by the resolver's
/// classification step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absent,
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Number,
    Str,
    Bytes,
    List,
    BigInt,
    BigDecimal,
    Uuid,
    Date,
    Time,
    DateTime,
    OffsetDateTime,
    Json,
    JsonString,
    Record,
    Identified,
    Portable,
    Tagged,
    Keyed,
    Data,
}
