//! registry/builder.rs
//! Mutable construction stage of the registry. Registration happens here and
//! only here; `freeze` hands out the read-only form.

use std::collections::HashMap;
use std::sync::Arc;

use crate::registry::{Codec, CodecKey, CodecRegistry, RegistryError};

#[derive(Default)]
pub struct RegistryBuilder {
    by_key: HashMap<CodecKey, i32>,
    by_id: HashMap<i32, Arc<dyn Codec>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert both mappings, or fail the whole construction.
    /// Every id maps back to exactly one key; duplicates on either side are
    /// construction-time failures, never silent overwrites.
    pub fn register(&mut self, key: CodecKey, codec: Arc<dyn Codec>) -> Result<(), RegistryError> {
        let id = codec.id();
        if self.by_key.contains_key(&key) {
            return Err(RegistryError::DuplicateName { key });
        }
        if self.by_id.contains_key(&id) {
            return Err(RegistryError::DuplicateId { id });
        }
        self.by_key.insert(key, id);
        self.by_id.insert(id, codec);
        Ok(())
    }

    /// User codec registered under its declared tag id. Tags below 1 collide
    /// with the built-in id space and are rejected.
    pub fn register_custom(&mut self, codec: Arc<dyn Codec>) -> Result<(), RegistryError> {
        let id = codec.id();
        if id < 1 {
            return Err(RegistryError::ReservedTypeId { id });
        }
        self.register(CodecKey::Custom(id), codec)
    }

    pub fn freeze(self) -> CodecRegistry {
        CodecRegistry::new(self.by_key, self.by_id)
    }
}
