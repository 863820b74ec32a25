// Validates capability classification and the precedence chain's dispatch
// decisions, including the fallback rungs.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use bytes::Bytes;
    use datagrid_core::codecs::compact::SchemaCatalog;
    use datagrid_core::codecs::json::JsonCodec;
    use datagrid_core::codecs::null::NullCodec;
    use datagrid_core::codecs::primitive::StringCodec;
    use datagrid_core::config::{DefaultNumberType, JsonDeserializationPolicy};
    use datagrid_core::constants::type_ids;
    use datagrid_core::registry::{CodecKey, CodecRegistry, RegistryBuilder, ScalarKind};
    use datagrid_core::resolve::{classify, resolve, Capability};
    use datagrid_core::types::SerializationError;
    use datagrid_core::value::{Record, TaggedValue, Value};

    fn record(type_name: &str) -> Value {
        Value::Record(Record {
            type_name: type_name.to_owned(),
            fields: BTreeMap::new(),
            schema: None,
        })
    }

    fn small_registry() -> CodecRegistry {
        let mut b = RegistryBuilder::new();
        b.register(CodecKey::Null, Arc::new(NullCodec)).unwrap();
        b.register(CodecKey::Str, Arc::new(StringCodec)).unwrap();
        b.register(
            CodecKey::Json,
            Arc::new(JsonCodec::new(JsonDeserializationPolicy::Eager)),
        )
        .unwrap();
        b.freeze()
    }

    // --- Classification ---

    #[test]
    fn scalars_classify_by_kind() {
        let catalog = SchemaCatalog::new();
        assert_eq!(
            classify(&Value::I32(1), &catalog),
            Capability::Scalar(ScalarKind::I32)
        );
        assert_eq!(
            classify(&Value::Number(1.0), &catalog),
            Capability::Scalar(ScalarKind::Number)
        );
        assert_eq!(
            classify(&Value::Str("s".into()), &catalog),
            Capability::Scalar(ScalarKind::Str)
        );
        assert_eq!(classify(&Value::Null, &catalog), Capability::Null);
        assert_eq!(classify(&Value::Absent, &catalog), Capability::Invalid);
    }

    #[test]
    fn buffers_classify_as_byte_arrays() {
        let catalog = SchemaCatalog::new();
        assert_eq!(
            classify(&Value::Bytes(Bytes::from_static(b"ab")), &catalog),
            Capability::Array(ScalarKind::I8)
        );
    }

    #[test]
    fn lists_classify_by_first_element() {
        let catalog = SchemaCatalog::new();
        assert_eq!(
            classify(&Value::List(vec![]), &catalog),
            Capability::Array(ScalarKind::Number)
        );
        assert_eq!(
            classify(&Value::List(vec![Value::Str("a".into())]), &catalog),
            Capability::Array(ScalarKind::Str)
        );
        // Mixed array: the first element decides, the rest must coerce.
        assert_eq!(
            classify(
                &Value::List(vec![Value::I64(1), Value::Number(2.0)]),
                &catalog
            ),
            Capability::Array(ScalarKind::I64)
        );
        // Arrays of structured values fall through to the JSON rendition.
        assert_eq!(
            classify(&Value::List(vec![record("point")]), &catalog),
            Capability::Fallback
        );
    }

    #[test]
    fn records_classify_by_registration() {
        let catalog = SchemaCatalog::new();
        assert_eq!(classify(&record("employee"), &catalog), Capability::Fallback);

        catalog.register_type_name("employee");
        assert_eq!(
            classify(&record("employee"), &catalog),
            Capability::Structured
        );
        assert_eq!(classify(&record("other"), &catalog), Capability::Fallback);
    }

    #[test]
    fn tagged_values_classify_by_tag() {
        let catalog = SchemaCatalog::new();
        let tagged = Value::Tagged(TaggedValue {
            tag: 7,
            value: Box::new(Value::Null),
        });
        assert_eq!(classify(&tagged, &catalog), Capability::CustomTagged(7));
    }

    // --- Dispatch ---

    #[test]
    fn scalar_dispatch_picks_the_registered_codec() {
        let reg = small_registry();
        let catalog = SchemaCatalog::new();
        let codec = resolve(
            &reg,
            &catalog,
            DefaultNumberType::Double,
            &Value::Str("s".into()),
        )
        .unwrap();
        assert_eq!(codec.id(), type_ids::STRING);
    }

    #[test]
    fn unregistered_records_fall_back_to_json() {
        let reg = small_registry();
        let catalog = SchemaCatalog::new();
        let codec = resolve(&reg, &catalog, DefaultNumberType::Double, &record("x")).unwrap();
        assert_eq!(codec.id(), type_ids::JSON);
    }

    #[test]
    fn unmatched_tag_falls_back_to_json() {
        let reg = small_registry();
        let catalog = SchemaCatalog::new();
        let tagged = Value::Tagged(TaggedValue {
            tag: 7,
            value: Box::new(Value::from("payload")),
        });
        let codec = resolve(&reg, &catalog, DefaultNumberType::Double, &tagged).unwrap();
        assert_eq!(codec.id(), type_ids::JSON);
    }

    #[test]
    fn absent_is_unserializable() {
        let reg = small_registry();
        let catalog = SchemaCatalog::new();
        let err = resolve(&reg, &catalog, DefaultNumberType::Double, &Value::Absent)
            .err()
            .unwrap();
        assert!(matches!(err, SerializationError::Unserializable));
    }
}
