//! constants.rs
//! Stable wire type ids, envelope header layout, and engine limits.
//!
//! Industry notes:
//! - Type ids are mirrored by every cluster member regardless of language;
//!   never renumber a shipped id.
//! - Built-in ids are negative, custom serializer ids are positive (>= 1).
//! - The envelope header is 8 bytes, fixed length, offsets below.

use num_enum::TryFromPrimitive;

/// Envelope header field offsets (bytes).
pub const PARTITION_HASH_OFFSET: usize = 0;
pub const TYPE_ID_OFFSET: usize = 4;
/// Fixed envelope header size in bytes.
pub const HEADER_LEN: usize = 8;

/// Length prefix written for a null element inside an array payload.
pub const NULL_ARRAY_LENGTH: i32 = -1;

/// Maximum nesting of partition keys before `to_data` refuses to recurse.
pub const MAX_PARTITION_KEY_DEPTH: usize = 8;

/// Seed for the murmur3 partition hash (shared by all cluster members).
pub const PARTITION_HASH_SEED: u32 = 0x01000193;

/// Wire type ids for the built-in codecs (mirrored in every client).
pub mod type_ids {
    pub const NULL: i32 = 0;
    pub const PORTABLE: i32 = -1;
    pub const IDENTIFIED: i32 = -2;
    pub const BYTE: i32 = -3;
    pub const BOOLEAN: i32 = -4;
    pub const SHORT: i32 = -6;
    pub const INTEGER: i32 = -7;
    pub const LONG: i32 = -8;
    pub const FLOAT: i32 = -9;
    pub const DOUBLE: i32 = -10;
    pub const STRING: i32 = -11;
    pub const BYTE_ARRAY: i32 = -12;
    pub const BOOLEAN_ARRAY: i32 = -13;
    pub const SHORT_ARRAY: i32 = -15;
    pub const INTEGER_ARRAY: i32 = -16;
    pub const LONG_ARRAY: i32 = -17;
    pub const FLOAT_ARRAY: i32 = -18;
    pub const DOUBLE_ARRAY: i32 = -19;
    pub const STRING_ARRAY: i32 = -20;
    pub const UUID: i32 = -21;
    pub const BIG_INTEGER: i32 = -26;
    pub const BIG_DECIMAL: i32 = -27;
    pub const LOCAL_DATE: i32 = -51;
    pub const LOCAL_TIME: i32 = -52;
    pub const LOCAL_DATE_TIME: i32 = -53;
    pub const OFFSET_DATE_TIME: i32 = -54;
    pub const COMPACT: i32 = -55;
    pub const JSON: i32 = -130;
}

/// Factory ids reserved for internal subsystems; user factories must not
/// claim these.
pub mod reserved_factory_ids {
    /// Built-in generic identified factory.
    pub const GENERIC: i32 = 0;
}

/// Built-in type id registry as an enum, for diagnostics only.
/// Wire encode/decode always goes through the raw `type_ids` constants.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum BuiltinTypeId {
    Null           = type_ids::NULL,
    Portable       = type_ids::PORTABLE,
    Identified     = type_ids::IDENTIFIED,
    Byte           = type_ids::BYTE,
    Boolean        = type_ids::BOOLEAN,
    Short          = type_ids::SHORT,
    Integer        = type_ids::INTEGER,
    Long           = type_ids::LONG,
    Float          = type_ids::FLOAT,
    Double         = type_ids::DOUBLE,
    String         = type_ids::STRING,
    ByteArray      = type_ids::BYTE_ARRAY,
    BooleanArray   = type_ids::BOOLEAN_ARRAY,
    ShortArray     = type_ids::SHORT_ARRAY,
    IntegerArray   = type_ids::INTEGER_ARRAY,
    LongArray      = type_ids::LONG_ARRAY,
    FloatArray     = type_ids::FLOAT_ARRAY,
    DoubleArray    = type_ids::DOUBLE_ARRAY,
    StringArray    = type_ids::STRING_ARRAY,
    Uuid           = type_ids::UUID,
    BigInteger     = type_ids::BIG_INTEGER,
    BigDecimal     = type_ids::BIG_DECIMAL,
    LocalDate      = type_ids::LOCAL_DATE,
    LocalTime      = type_ids::LOCAL_TIME,
    LocalDateTime  = type_ids::LOCAL_DATE_TIME,
    OffsetDateTime = type_ids::OFFSET_DATE_TIME,
    Compact        = type_ids::COMPACT,
    Json           = type_ids::JSON,
}
