//! Shared test utilities for tasklet-store unit tests.

pub(crate) mod helpers {
    use std::io::ErrorKind;

    use crate::error::StoreError;
    use crate::gateway::PersistenceGateway;
    use crate::medium::{KeyValueStore, MemoryStore};
    use crate::store::TaskStore;

    /// A fresh store over an empty in-memory medium.
    pub fn memory_store() -> TaskStore<MemoryStore> {
        TaskStore::open(PersistenceGateway::new(MemoryStore::new()))
    }

    /// A store over a medium that counts writes.
    pub fn counting_store() -> TaskStore<CountingStore> {
        TaskStore::open(PersistenceGateway::new(CountingStore::default()))
    }

    /// In-memory medium that records how many times `set` was called.
    #[derive(Debug, Default)]
    pub struct CountingStore {
        pub inner: MemoryStore,
        pub writes: usize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.writes += 1;
            self.inner.set(key, value)
        }
    }

    /// A medium whose every read and write fails.
    #[derive(Debug)]
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::io("failing", ErrorKind::PermissionDenied.into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::io("failing", ErrorKind::PermissionDenied.into()))
        }
    }
}
