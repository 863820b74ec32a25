// Property coverage: arbitrary values survive the envelope round trip
// deep-equal, and serialization is byte-for-byte deterministic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use datagrid_core::prelude::*;

    fn service() -> SerializationService {
        SerializationService::new(SerializationConfig::new()).unwrap()
    }

    proptest! {
        #[test]
        fn strings_roundtrip(s in ".*") {
            let svc = service();
            let env = svc.to_data(&Value::Str(s.clone())).unwrap();
            prop_assert_eq!(svc.to_object(&env).unwrap(), Value::Str(s));
        }

        #[test]
        fn long_arrays_roundtrip(xs in proptest::collection::vec(any::<i64>(), 1..64)) {
            let svc = service();
            let value = Value::List(xs.into_iter().map(Value::I64).collect());
            let env = svc.to_data(&value).unwrap();
            prop_assert_eq!(svc.to_object(&env).unwrap(), value);
        }

        #[test]
        fn buffers_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let svc = service();
            let value = Value::from(bytes);
            let env = svc.to_data(&value).unwrap();
            prop_assert_eq!(svc.to_object(&env).unwrap(), value);
        }

        #[test]
        fn finite_doubles_roundtrip(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
            let svc = service();
            let env = svc.to_data(&Value::F64(x)).unwrap();
            prop_assert_eq!(svc.to_object(&env).unwrap(), Value::F64(x));
        }

        #[test]
        fn serialization_is_deterministic(s in ".*") {
            let svc = service();
            let value = Value::Str(s);
            let a = svc.to_data(&value).unwrap();
            let b = svc.to_data(&value).unwrap();
            prop_assert_eq!(a.as_bytes(), b.as_bytes());
        }
    }
}
