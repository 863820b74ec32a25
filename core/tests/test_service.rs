// End-to-end facade coverage: construction, precedence dispatch, partition
// hashing, configuration sensitivity, and error behavior.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use bytes::Bytes;
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use serde_json::json;
    use uuid::Uuid;

    use datagrid_core::codecs::json::value_to_json;
    use datagrid_core::constants::{type_ids, PARTITION_HASH_SEED};
    use datagrid_core::envelope::Envelope;
    use datagrid_core::prelude::*;
    use datagrid_core::registry::RegistryError;
    use datagrid_core::utils::murmur3_x86_32;
    use datagrid_core::value::{BigDecimal, BigInt};

    fn service() -> SerializationService {
        SerializationService::new(SerializationConfig::new()).unwrap()
    }

    fn roundtrip(svc: &SerializationService, value: Value) -> Value {
        let env = svc.to_data(&value).unwrap();
        svc.to_object(&env).unwrap()
    }

    fn record(type_name: &str, fields: &[(&str, Value)]) -> Record {
        Record {
            type_name: type_name.to_owned(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
            schema: None,
        }
    }

    // --- Scalar round trips ---

    #[test]
    fn scalars_roundtrip_deep_equal() {
        let svc = service();
        assert_eq!(roundtrip(&svc, Value::Bool(true)), Value::Bool(true));
        assert_eq!(roundtrip(&svc, Value::I8(-5)), Value::I8(-5));
        assert_eq!(roundtrip(&svc, Value::I16(1000)), Value::I16(1000));
        assert_eq!(roundtrip(&svc, Value::I32(70_000)), Value::I32(70_000));
        assert_eq!(roundtrip(&svc, Value::I64(1 << 40)), Value::I64(1 << 40));
        assert_eq!(roundtrip(&svc, Value::F32(0.5)), Value::F32(0.5));
        assert_eq!(roundtrip(&svc, Value::F64(-0.25)), Value::F64(-0.25));
        assert_eq!(
            roundtrip(&svc, Value::from("héllo wörld")),
            Value::from("héllo wörld")
        );
    }

    #[test]
    fn number_encodes_as_double_by_default() {
        let svc = service();
        let env = svc.to_data(&Value::Number(14.0)).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::DOUBLE);
        assert_eq!(svc.to_object(&env).unwrap(), Value::F64(14.0));
    }

    #[test]
    fn number_honors_configured_default_integer() {
        let config =
            SerializationConfig::new().with_default_number_type(DefaultNumberType::Integer);
        let svc = SerializationService::new(config).unwrap();
        let env = svc.to_data(&Value::Number(14.0)).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::INTEGER);
        assert_eq!(svc.to_object(&env).unwrap(), Value::I32(14));
    }

    // --- Arrays ---

    #[test]
    fn empty_array_with_byte_default_reads_back_as_empty_buffer() {
        let config = SerializationConfig::new().with_default_number_type(DefaultNumberType::Byte);
        let svc = SerializationService::new(config).unwrap();
        let env = svc.to_data(&Value::List(vec![])).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::BYTE_ARRAY);
        assert_eq!(svc.to_object(&env).unwrap(), Value::Bytes(Bytes::new()));
    }

    #[test]
    fn typed_arrays_roundtrip() {
        let svc = service();
        let longs = Value::List(vec![Value::I64(1), Value::I64(-2), Value::I64(3)]);
        assert_eq!(roundtrip(&svc, longs.clone()), longs);

        let strings = Value::List(vec![
            Value::Str("a".into()),
            Value::Null,
            Value::Str("c".into()),
        ]);
        assert_eq!(roundtrip(&svc, strings.clone()), strings);

        let buffer = Value::Bytes(Bytes::from_static(&[1, 2, 3]));
        assert_eq!(roundtrip(&svc, buffer.clone()), buffer);
    }

    #[test]
    fn mixed_array_coerces_under_first_element() {
        let svc = service();
        let mixed = Value::List(vec![Value::I64(7), Value::Number(8.0)]);
        let env = svc.to_data(&mixed).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::LONG_ARRAY);
        assert_eq!(
            svc.to_object(&env).unwrap(),
            Value::List(vec![Value::I64(7), Value::I64(8)])
        );
    }

    // --- Rich scalars ---

    #[test]
    fn rich_scalars_roundtrip() {
        let svc = service();

        let id = Value::Uuid(Uuid::from_u128(0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10));
        assert_eq!(roundtrip(&svc, id.clone()), id);

        let date = Value::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(roundtrip(&svc, date.clone()), date);

        let stamp = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 12, 30, 45)
            .unwrap();
        let odt = Value::OffsetDateTime(stamp);
        assert_eq!(roundtrip(&svc, odt.clone()), odt);

        let big = Value::BigInt(BigInt {
            bytes: vec![0x7f, 0xff, 0xff],
        });
        assert_eq!(roundtrip(&svc, big.clone()), big);

        let dec = Value::BigDecimal(BigDecimal {
            unscaled: BigInt { bytes: vec![0x05] },
            scale: 2,
        });
        assert_eq!(roundtrip(&svc, dec.clone()), dec);
    }

    // --- JSON fallback ---

    #[test]
    fn unregistered_record_falls_back_to_json() {
        let svc = service();
        let value = Value::Record(record(
            "employee",
            &[("age", Value::I32(30)), ("name", Value::from("Ada"))],
        ));
        let env = svc.to_data(&value).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::JSON);
        assert_eq!(
            svc.to_object(&env).unwrap(),
            Value::Json(json!({"age": 30, "name": "Ada"}))
        );
    }

    #[test]
    fn lazy_policy_returns_raw_json_text() {
        let config = SerializationConfig::new().with_json_policy(JsonDeserializationPolicy::Lazy);
        let svc = SerializationService::new(config).unwrap();
        let value = Value::JsonString(r#"{"a":1}"#.to_owned());
        assert_eq!(roundtrip(&svc, value.clone()), value);
    }

    // --- Compact ---

    #[test]
    fn registered_record_roundtrips_through_compact() {
        let svc = service();
        let rec = record(
            "employee",
            &[("age", Value::I32(30)), ("name", Value::from("Ada"))],
        );
        svc.register_schema(Schema::derive("employee", &rec.fields), "employee");

        let env = svc.to_data(&Value::Record(rec.clone())).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::COMPACT);
        assert_eq!(svc.to_object(&env).unwrap(), Value::Record(rec));
    }

    #[test]
    fn explicit_schema_forces_compact_without_registration() {
        let svc = service();
        let mut rec = record("point", &[("x", Value::F64(1.0)), ("y", Value::F64(2.0))]);
        rec.schema = Some(Arc::new(Schema::derive("point", &rec.fields)));

        let env = svc.to_data(&Value::Record(rec.clone())).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::COMPACT);
        assert_eq!(svc.to_object(&env).unwrap(), Value::Record(rec));
    }

    // --- Identified and portable ---

    #[test]
    fn generic_identified_roundtrips() {
        let svc = service();
        let value = Value::Identified(IdentifiedRecord {
            factory_id: 0,
            class_id: 7,
            fields: vec![Value::I32(1), Value::from("two"), Value::Null],
        });
        let env = svc.to_data(&value).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::IDENTIFIED);
        assert_eq!(svc.to_object(&env).unwrap(), value);
    }

    #[test]
    fn unknown_factory_id_fails_decode() {
        let svc = service();
        let value = Value::Identified(IdentifiedRecord {
            factory_id: 9,
            class_id: 1,
            fields: vec![],
        });
        let env = svc.to_data(&value).unwrap();
        let err = svc.to_object(&env).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::UnknownFactory { factory_id: 9 }
        ));
    }

    #[test]
    fn reserved_factory_id_is_rejected_at_construction() {
        struct NoopFactory;
        impl IdentifiedFactory for NoopFactory {
            fn read(
                &self,
                _factory_id: i32,
                _class_id: i32,
                _input: &mut DataInput,
            ) -> Result<Value, SerializationError> {
                Ok(Value::Null)
            }
        }

        let config = SerializationConfig::new().with_factory(0, Arc::new(NoopFactory));
        let err = SerializationService::new(config).err().unwrap();
        assert!(matches!(
            err,
            SerializationError::Registry(RegistryError::DuplicateFactory { id: 0 })
        ));
    }

    #[test]
    fn portable_roundtrips_with_version() {
        let svc = service();
        let value = Value::Portable(PortableRecord {
            factory_id: 1,
            class_id: 2,
            version: 3,
            fields: [
                ("n".to_owned(), Value::I64(9)),
                ("s".to_owned(), Value::from("p")),
            ]
            .into_iter()
            .collect(),
        });
        let env = svc.to_data(&value).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::PORTABLE);
        assert_eq!(svc.to_object(&env).unwrap(), value);
    }

    // --- Custom and global serializers ---

    struct ReverseStringCodec;

    impl Codec for ReverseStringCodec {
        fn id(&self) -> i32 {
            42
        }

        fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
            match value {
                Value::Tagged(t) => match t.value.as_str() {
                    Some(s) => {
                        out.write_str(&s.chars().rev().collect::<String>());
                        Ok(())
                    }
                    None => Err(SerializationError::Validation("expected string".into())),
                },
                _ => Err(SerializationError::Validation("expected tagged".into())),
            }
        }

        fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
            let s: String = input.read_str()?.chars().rev().collect();
            Ok(Value::Tagged(TaggedValue {
                tag: 42,
                value: Box::new(Value::Str(s)),
            }))
        }
    }

    #[test]
    fn unmatched_tag_falls_back_to_json_rendition() {
        let svc = service();
        let value = Value::Tagged(TaggedValue {
            tag: 7,
            value: Box::new(Value::from("payload")),
        });
        let env = svc.to_data(&value).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), type_ids::JSON);
        assert_eq!(svc.to_object(&env).unwrap(), Value::Json(json!("payload")));
    }

    #[test]
    fn custom_serializer_claims_its_tag() {
        let config = SerializationConfig::new().with_custom_serializer(Arc::new(ReverseStringCodec));
        let svc = SerializationService::new(config).unwrap();

        let value = Value::Tagged(TaggedValue {
            tag: 42,
            value: Box::new(Value::from("abc")),
        });
        let env = svc.to_data(&value).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), 42);
        assert_eq!(svc.to_object(&env).unwrap(), value);
    }

    struct GlobalJsonCodec;

    impl Codec for GlobalJsonCodec {
        fn id(&self) -> i32 {
            99
        }

        fn write(&self, out: &mut DataOutput, value: &Value) -> Result<(), SerializationError> {
            let doc = value_to_json(value)?;
            let text = serde_json::to_string(&doc)
                .map_err(|e| SerializationError::Validation(e.to_string()))?;
            out.write_str(&text);
            Ok(())
        }

        fn read(&self, input: &mut DataInput) -> Result<Value, SerializationError> {
            let doc = serde_json::from_str(&input.read_str()?)
                .map_err(|e| SerializationError::Validation(e.to_string()))?;
            Ok(Value::Json(doc))
        }
    }

    #[test]
    fn global_serializer_wins_over_json_fallback() {
        let config = SerializationConfig::new().with_global_serializer(Arc::new(GlobalJsonCodec));
        let svc = SerializationService::new(config).unwrap();

        let value = Value::Record(record("free_form", &[("k", Value::I32(1))]));
        let env = svc.to_data(&value).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Big), 99);
        assert_eq!(svc.to_object(&env).unwrap(), Value::Json(json!({"k": 1})));
    }

    // --- Partition hashing ---

    #[test]
    fn plain_values_carry_zero_partition_hash() {
        let svc = service();
        let env = svc.to_data(&Value::I32(5)).unwrap();
        assert_eq!(env.partition_hash(ByteOrderKind::Big), 0);
    }

    #[test]
    fn keyed_value_hashes_the_serialized_key() {
        let svc = service();
        let keyed = Value::Keyed(KeyedValue {
            key: Box::new(Value::from("key")),
            value: Box::new(Value::I64(1)),
        });
        let env = svc.to_data(&keyed).unwrap();

        let key_env = svc.to_data(&Value::from("key")).unwrap();
        let expected = murmur3_x86_32(key_env.as_bytes(), PARTITION_HASH_SEED);
        assert_eq!(env.partition_hash(ByteOrderKind::Big), expected);
        assert_eq!(svc.to_object(&env).unwrap(), Value::I64(1));
    }

    #[test]
    fn runaway_key_nesting_is_refused() {
        let svc = service();
        let mut value = Value::from("k");
        for _ in 0..10 {
            value = Value::Keyed(KeyedValue {
                key: Box::new(value),
                value: Box::new(Value::I32(1)),
            });
        }
        let err = svc.to_data(&value).unwrap_err();
        assert!(matches!(err, SerializationError::KeyDepthExceeded { .. }));
    }

    // --- Pass-through and errors ---

    #[test]
    fn to_data_is_idempotent_on_envelopes() {
        let svc = service();
        let env = svc.to_data(&Value::from("once")).unwrap();
        let again = svc.to_data(&Value::Data(env.clone())).unwrap();
        assert_eq!(again, env);
    }

    #[test]
    fn unknown_type_id_names_the_id() {
        let svc = service();
        let mut bytes = vec![0u8; 4];
        bytes.extend_from_slice(&12345i32.to_be_bytes());
        let env = Envelope::from_vec(bytes).unwrap();
        let err = svc.to_object(&env).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::NoDeserializerFound { type_id: 12345 }
        ));
    }

    #[test]
    fn corrupt_array_length_fails_the_call_not_the_process() {
        let svc = service();
        // Envelope claiming i32::MAX boolean elements with a one-byte payload.
        let mut bytes = vec![0u8; 4];
        bytes.extend_from_slice(&type_ids::BOOLEAN_ARRAY.to_be_bytes());
        bytes.extend_from_slice(&i32::MAX.to_be_bytes());
        bytes.push(1);
        let env = Envelope::from_vec(bytes).unwrap();
        let err = svc.to_object(&env).unwrap_err();
        assert!(matches!(err, SerializationError::Cursor(_)));
    }

    #[test]
    fn absent_value_is_rejected() {
        let svc = service();
        let err = svc.to_data(&Value::Absent).unwrap_err();
        assert!(matches!(err, SerializationError::Unserializable));
    }

    // --- Engine-wired cursors ---

    #[test]
    fn engine_cursors_embed_nested_objects() {
        let svc = service();
        let mut out = svc.new_output();
        svc.write_object(&mut out, &Value::from("nested")).unwrap();
        svc.write_object(&mut out, &Value::Null).unwrap();

        let mut input = svc.new_input(out.into_bytes());
        assert_eq!(svc.read_object(&mut input).unwrap(), Value::from("nested"));
        assert_eq!(svc.read_object(&mut input).unwrap(), Value::Null);
        assert_eq!(input.remaining(), 0);
    }

    // --- Byte order ---

    #[test]
    fn little_endian_facade_roundtrips_and_flips_the_header() {
        let config = SerializationConfig::new().with_big_endian(false);
        let svc = SerializationService::new(config).unwrap();
        assert_eq!(svc.byte_order(), ByteOrderKind::Little);

        let env = svc.to_data(&Value::I32(0x01020304)).unwrap();
        assert_eq!(env.type_id(ByteOrderKind::Little), type_ids::INTEGER);
        assert_eq!(svc.to_object(&env).unwrap(), Value::I32(0x01020304));
    }
}
