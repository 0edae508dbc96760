// Volatile in-process cache backend.
// Fallback for environments without a configured remote bucket; contents do
// not survive a restart and are never evicted.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::Result;

use super::CacheBackend;

#[derive(Debug, Clone)]
struct Entry {
    payload: Vec<u8>,
    content_type: String,
}

/// In-memory map backend, safe for concurrent readers and writers.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content type recorded for a key, if present.
    pub fn content_type(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).map(|e| e.content_type.clone())
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).map(|e| e.payload.clone()))
    }

    async fn save(&self, key: &str, payload: &[u8], content_type: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.to_string(),
            Entry {
                payload: payload.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}
