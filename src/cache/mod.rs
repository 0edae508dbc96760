// Cache module: keyed blob storage with a JSON layer on top.
// One contract, two backends: an in-process map and an S3 bucket.

pub mod memory;
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

pub use memory::MemoryCache;
pub use s3::S3Cache;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Raw byte-level storage contract shared by all cache backends.
///
/// A missing key is `Ok(None)`, never an error; errors are reserved for
/// genuine I/O failure against the backing store.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn save(&self, key: &str, payload: &[u8], content_type: &str) -> Result<()>;
}

/// Typed cache handle over a shared backend.
///
/// Adds the JSON convenience layer; which backend sits underneath is a
/// start-up configuration decision, invisible to callers.
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn CacheBackend>,
}

impl Cache {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Volatile in-process cache.
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryCache::new()))
    }

    pub async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.backend.get(key).await
    }

    pub async fn save_bytes(&self, key: &str, payload: &[u8], content_type: &str) -> Result<()> {
        self.backend.save(key, payload, content_type).await
    }

    /// Read and decode a JSON entry.
    ///
    /// Absence is `Ok(None)` (a cache miss is not an error); an entry that
    /// exists but fails to decode is an error, not a miss.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key).await? {
            Some(payload) => Ok(Some(serde_json::from_slice(&payload)?)),
            None => Ok(None),
        }
    }

    /// Serialize a value and store it under the JSON content type.
    pub async fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_vec(value)?;
        self.backend
            .save(key, &payload, CONTENT_TYPE_JSON)
            .await
    }
}
