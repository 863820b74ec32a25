// Validates registry construction invariants and the key normalization
// rules (number defaults, byte-array folding).

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use datagrid_core::codecs::null::NullCodec;
    use datagrid_core::codecs::primitive::{IntegerCodec, StringCodec};
    use datagrid_core::config::DefaultNumberType;
    use datagrid_core::constants::type_ids;
    use datagrid_core::cursor::{DataInput, DataOutput};
    use datagrid_core::registry::{
        Codec, CodecKey, CodecRegistry, RegistryBuilder, RegistryError, ScalarKind,
    };
    use datagrid_core::types::SerializationError;
    use datagrid_core::value::Value;

    struct FakeCodec(i32);

    impl Codec for FakeCodec {
        fn id(&self) -> i32 {
            self.0
        }
        fn write(&self, _out: &mut DataOutput, _value: &Value) -> Result<(), SerializationError> {
            Ok(())
        }
        fn read(&self, _input: &mut DataInput) -> Result<Value, SerializationError> {
            Ok(Value::Null)
        }
    }

    // --- Construction invariants ---

    #[test]
    fn duplicate_key_fails_construction() {
        let mut b = RegistryBuilder::new();
        b.register(CodecKey::I32, Arc::new(IntegerCodec)).unwrap();
        assert_eq!(
            b.register(CodecKey::I32, Arc::new(FakeCodec(100))).unwrap_err(),
            RegistryError::DuplicateName { key: CodecKey::I32 }
        );
    }

    #[test]
    fn duplicate_id_fails_construction() {
        let mut b = RegistryBuilder::new();
        b.register(CodecKey::I32, Arc::new(IntegerCodec)).unwrap();
        assert_eq!(
            b.register(CodecKey::I64, Arc::new(FakeCodec(type_ids::INTEGER)))
                .unwrap_err(),
            RegistryError::DuplicateId {
                id: type_ids::INTEGER
            }
        );
    }

    #[test]
    fn custom_ids_below_one_are_reserved() {
        let mut b = RegistryBuilder::new();
        assert_eq!(
            b.register_custom(Arc::new(FakeCodec(0))).unwrap_err(),
            RegistryError::ReservedTypeId { id: 0 }
        );
        assert_eq!(
            b.register_custom(Arc::new(FakeCodec(-5))).unwrap_err(),
            RegistryError::ReservedTypeId { id: -5 }
        );
        b.register_custom(Arc::new(FakeCodec(1))).unwrap();
    }

    // --- Frozen lookups ---

    #[test]
    fn frozen_registry_resolves_key_and_id() {
        let mut b = RegistryBuilder::new();
        b.register(CodecKey::Null, Arc::new(NullCodec)).unwrap();
        b.register(CodecKey::Str, Arc::new(StringCodec)).unwrap();
        let reg = b.freeze();

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.id_of(CodecKey::Str), Some(type_ids::STRING));
        assert!(reg.lookup(CodecKey::Str).is_some());
        assert!(reg.lookup_by_id(type_ids::STRING).is_some());
        assert!(reg.lookup(CodecKey::I32).is_none());
        assert!(reg.lookup_by_id(12345).is_none());
    }

    // --- Name normalization ---

    #[test]
    fn number_scalar_normalizes_to_configured_default() {
        assert_eq!(
            CodecRegistry::scalar_key(ScalarKind::Number, DefaultNumberType::Double),
            CodecKey::F64
        );
        assert_eq!(
            CodecRegistry::scalar_key(ScalarKind::Number, DefaultNumberType::Integer),
            CodecKey::I32
        );
        assert_eq!(
            CodecRegistry::scalar_key(ScalarKind::I64, DefaultNumberType::Integer),
            CodecKey::I64
        );
    }

    #[test]
    fn byte_arrays_fold_into_the_buffer_codec() {
        assert_eq!(
            CodecRegistry::array_key(ScalarKind::I8, DefaultNumberType::Double),
            Some(CodecKey::Bytes)
        );
        assert_eq!(
            CodecRegistry::array_key(ScalarKind::Number, DefaultNumberType::Byte),
            Some(CodecKey::Bytes)
        );
        assert_eq!(
            CodecRegistry::array_key(ScalarKind::Uuid, DefaultNumberType::Double),
            None
        );
    }
}
