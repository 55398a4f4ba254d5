pub mod file;
pub mod memory;

use std::sync::Arc;

use feed_data::PostId;

use serde::{de::DeserializeOwned, Serialize};

use thiserror::Error;

use tracing::{debug, warn};

/// Key of the serialized post list.
pub const FEED_KEY: &str = "feed:posts";

/// Key of the serialized comment list for one post.
pub fn comments_key(post_id: PostId) -> String {
    format!("feed:post:{}:comments", post_id)
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO: {0}")]
    IO(#[from] std::io::Error),

    #[error("Storage: {0}")]
    Backend(String),
}

/// Durable key-value medium, consumed through get/set/remove only.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Cloneable handle over a storage backend with a JSON round-trip contract.
///
/// Both directions fail soft. A load that cannot produce a value returns
/// `None` and the caller substitutes its documented default; a save that
/// cannot complete is dropped and the in-memory state stays the source of
/// truth for the session. No retry, no queueing.
#[derive(Clone)]
pub struct StorageBridge {
    backend: Arc<dyn StorageBackend>,
}

impl StorageBridge {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Load and decode the value under `key`.
    ///
    /// Missing key, backend failure and malformed payload all come back as
    /// `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.backend.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(key, "no stored payload");

                return None;
            }
            Err(error) => {
                warn!(key, %error, "storage read failed");

                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key, %error, "stored payload did not decode");

                None
            }
        }
    }

    /// Encode `value` and store it under `key`, best effort.
    pub fn save<T: ?Sized + Serialize>(&self, key: &str, value: &T) {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(error) => {
                warn!(key, %error, "value did not encode, mutation dropped");

                return;
            }
        };

        if let Err(error) = self.backend.set(key, &text) {
            warn!(key, %error, "storage write failed, mutation dropped");
        }
    }

    /// Remove whatever is stored under `key`, best effort.
    pub fn clear(&self, key: &str) {
        if let Err(error) = self.backend.remove(key) {
            warn!(key, %error, "storage remove failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{memory::MemoryStorage, *};

    /// Backend that refuses everything, for the soft-fail contract.
    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Backend("nope".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("nope".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("nope".into()))
        }
    }

    #[test]
    fn roundtrip() {
        let bridge = StorageBridge::new(MemoryStorage::new());

        bridge.save("numbers", &vec![1u32, 2, 3]);

        assert_eq!(bridge.load::<Vec<u32>>("numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn absent_key_loads_none() {
        let bridge = StorageBridge::new(MemoryStorage::new());

        assert_eq!(bridge.load::<Vec<u32>>("nothing"), None);
    }

    #[test]
    fn malformed_payload_loads_none() {
        let memory = MemoryStorage::new();
        memory.insert_raw("numbers", "not json at all");

        let bridge = StorageBridge::new(memory);

        assert_eq!(bridge.load::<Vec<u32>>("numbers"), None);
    }

    #[test]
    fn wrong_shape_loads_none() {
        let memory = MemoryStorage::new();
        memory.insert_raw("numbers", r#"{"a":1}"#);

        let bridge = StorageBridge::new(memory);

        assert_eq!(bridge.load::<Vec<u32>>("numbers"), None);
    }

    #[test]
    fn broken_backend_fails_soft() {
        let bridge = StorageBridge::new(BrokenStorage);

        bridge.save("key", &vec![1u32]);
        bridge.clear("key");

        assert_eq!(bridge.load::<Vec<u32>>("key"), None);
    }

    #[test]
    fn key_layout() {
        assert_eq!(comments_key(1), "feed:post:1:comments");
        assert_eq!(comments_key(42), "feed:post:42:comments");
    }
}
