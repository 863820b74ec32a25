//! codecs/compact.rs
//! Self-describing structured format ("compact") collaborator.
//!
//! Industry notes:
//! - The payload carries only a 64-bit schema fingerprint; the schema itself
//!   lives in the catalog and is replicated out-of-band by the cluster.
//! - Schema derivation is deterministic: field order is the record's sorted
//!   field-name order, so two clients derive identical fingerprints.
//! - The catalog is the engine's one post-construction mutation point
//!   (`register_schema` pass-through); it guards itself with an RwLock.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, RwLock};

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::type_ids;
use crate::cursor::{DataInput, DataOutput};
use crate::registry::Codec;
use crate::types::SerializationError;
use crate::value::{Record, Value, ValueKind};

/// Field kind tags that feed the schema fingerprint.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum FieldKind {
    Null = 0x00,
    Bool = 0x01,
    I8 = 0x02,
    I16 = 0x03,
    I32 = 0x04,
    I64 = 0x05,
    F32 = 0x06,
    F64 = 0x07,
    Number = 0x08,
    Str = 0x09,
    Bytes = 0x0a,
    List = 0x0b,
    BigInt = 0x0c,
    BigDecimal = 0x0d,
    Uuid = 0x0e,
    Date = 0x0f,
    Time = 0x10,
    DateTime = 0x11,
    OffsetDateTime = 0x12,
    Json = 0x13,
    Record = 0x14,
    /// Anything else embeddable through the object codec path.
    Object = 0x1f,
}

fn field_kind_of(value: &Value) -> FieldKind {
    match value.kind() {
        ValueKind::Null => FieldKind::Null,
        ValueKind::Bool => FieldKind::Bool,
        ValueKind::I8 => FieldKind::I8,
        ValueKind::I16 => FieldKind::I16,
        ValueKind::I32 => FieldKind::I32,
        ValueKind::I64 => FieldKind::I64,
        ValueKind::F32 => FieldKind::F32,
        ValueKind::F64 => FieldKind::F64,
        ValueKind::Number => FieldKind::Number,
        ValueKind::Str => FieldKind::Str,
        ValueKind::Bytes => FieldKind::Bytes,
        ValueKind::List => FieldKind::List,
        ValueKind::BigInt => FieldKind::BigInt,
        ValueKind::BigDecimal => FieldKind::BigDecimal,
        ValueKind::Uuid => FieldKind::Uuid,
        ValueKind::Date => FieldKind::Date,
        ValueKind::Time => FieldKind::Time,
        ValueKind::DateTime => FieldKind::DateTime,
        ValueKind::OffsetDateTime => FieldKind::OffsetDateTime,
        ValueKind::Json | ValueKind::JsonString => FieldKind::Json,
        ValueKind::Record => FieldKind::Record,
        _ => FieldKind::Object,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
}

/// Compact schema: type name, ordered fields, fingerprint id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    pub type_name: String,
    pub fields: Vec<SchemaField>,
    pub id: i64,
}

impl Schema {
    /// Build a schema with an explicit field order (generic-record path).
    pub fn new(type_name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        let type_name = type_name.into();
        let id = fingerprint(&type_name, &fields);
        Schema {
            type_name,
            fields,
            id,
        }
    }

    /// Derive the schema of a record from its sorted field names.
    pub fn derive(type_name: &str, fields: &BTreeMap<String, Value>) -> Self {
        let fields = fields
            .iter()
            .map(|(name, value)| SchemaField {
                name: name.clone(),
                kind: field_kind_of(value),
            })
            .collect();
        Schema::new(type_name, fields)
    }
}

/// FNV-1a 64 over type name and field (name, kind) pairs. Stable across
/// releases; a changed fingerprint is a changed schema as far as the
/// cluster is concerned.
fn fingerprint(type_name: &str, fields: &[SchemaField]) -> i64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut h = OFFSET;
    let mut mix = |bytes: &[u8]| {
        for b in bytes {
            h ^= *b as u64;
            h = h.wrapping_mul(PRIME);
        }
    };
    mix(type_name.as_bytes());
    mix(&[0x00]);
    for field in fields {
        mix(field.name.as_bytes());
        mix(&[0x00, field.kind as u8]);
    }
    h as i64
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Schema id seen on the wire with no catalog entry (the cluster has a
    /// schema this client never learned).
    #[error("unknown compact schema id {id}")]
    UnknownSchema { id: i64 },
}

#[derive(Default)]
struct CatalogInner {
    by_id: HashMap<i64, Arc<Schema>>,
    by_name: HashMap<String, Arc<Schema>>,
    registered_names: HashSet<String>,
}

/// Schema catalog shared by the compact codec and the resolver predicate.
#[derive(Default)]
pub struct SchemaCatalog {
    inner: RwLock<CatalogInner>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a type name as compact-serializable (nominal registration).
    pub fn register_type_name(&self, type_name: &str) {
        let mut inner = self.inner.write().unwrap();
        inner.registered_names.insert(type_name.to_owned());
    }

    /// Nominal registration predicate consulted by the resolver.
    pub fn is_registered(&self, type_name: &str) -> bool {
        let inner = self.inner.read().unwrap();
        inner.registered_names.contains(type_name) || inner.by_name.contains_key(type_name)
    }

    /// `register_schema` pass-through: bind a schema to a nominal type.
    pub fn register_schema(&self, schema: Arc<Schema>, type_name: &str) {
        let mut inner = self.inner.write().unwrap();
        inner.by_id.insert(schema.id, schema.clone());
        inner.by_name.insert(type_name.to_owned(), schema);
        inner.registered_names.insert(type_name.to_owned());
    }

    /// Insert-if-absent used on the write path so in-process reads always
    /// find the schema they need.
    pub fn ensure(&self, schema: Schema) -> Arc<Schema> {
        let mut inner = self.inner.write().unwrap();
        inner
            .by_id
            .entry(schema.id)
            .or_insert_with(|| Arc::new(schema))
            .clone()
    }

    pub fn schema_by_id(&self, id: i64) -> Option<Arc<Schema>> {
        self.inner.read().unwrap().by_id.get(&id).cloned()
    }
}

/// User codec for a nominally-registered compact type.
pub trait CompactSerializer: Send + Sync {
    fn type_name(&self) -> &str;
    fn write(
        &self,
        out: &mut DataOutput,
        record: &Record,
        schema: &Schema,
    ) -> Result<(), SerializationError>;
    fn read(&self, input: &mut DataInput, schema: &Schema) -> Result<Record, SerializationError>;
}

// Generic record path: field values in schema order, each through the
// object codec. Absent fields write as null so schema evolution on the
// reading side stays tolerant.

fn write_generic(
    out: &mut DataOutput,
    record: &Record,
    schema: &Schema,
) -> Result<(), SerializationError> {
    for field in &schema.fields {
        match record.fields.get(&field.name) {
            Some(value) => out.write_object(value)?,
            None => out.write_object(&Value::Null)?,
        }
    }
    Ok(())
}

fn read_generic(input: &mut DataInput, schema: &Schema) -> Result<Record, SerializationError> {
    let mut fields = BTreeMap::new();
    for field in &schema.fields {
        fields.insert(field.name.clone(), input.read_object()?);
    }
    Ok(Record {
        type_name: schema.type_name.clone(),
        fields,
        schema: None,
    })
}

pub struct CompactCodec {
    catalog: Arc<SchemaCatalog>,
    serializers: HashMap<String, Arc<dyn CompactSerializer>>,
}

impl CompactCodec {
    pub fn new(catalog: Arc<SchemaCatalog>, serializers: &[Arc<dyn CompactSerializer>]) -> Self {
        let serializers = serializers
            .iter()
            .map(|s| (s.type_name().to_owned(), s.clone()))
            .collect();
        CompactCodec {
            catalog,
            serializers,
        }
    }
}

impl Codec for CompactCodec {
    fn id(&self) -> i32 {
        type_ids::COMPACT
    }

    fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
        let record = match value {
            Value::Record(r) => r,
            _ => {
                return Err(SerializationError::KindMismatch {
                    expected: "compact record",
                    actual: value.kind(),
                })
            }
        };
        let schema = match &record.schema {
            Some(explicit) => self.catalog.ensure((**explicit).clone()),
            None => self
                .catalog
                .ensure(Schema::derive(&record.type_name, &record.fields)),
        };
        out.write_i64(schema.id);
        match self.serializers.get(&record.type_name) {
            Some(user) => user.write(out, record, &schema),
            None => write_generic(out, record, &schema),
        }
    }

    fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
        let id = input.read_i64()?;
        let schema = self
            .catalog
            .schema_by_id(id)
            .ok_or(SchemaError::UnknownSchema { id })?;
        let record = match self.serializers.get(&schema.type_name) {
            Some(user) => user.read(input, &schema)?,
            None => read_generic(input, &schema)?,
        };
        Ok(Value::Record(record))
    }
}
