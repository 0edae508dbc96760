// S3 cache backend.
// Stores cache entries as objects in one logical bucket; a missing object is
// translated into the backend contract's "absent" result.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

use crate::error::{ContribsError, Result};

use super::CacheBackend;

/// Remote cache backend over an S3-compatible object store.
pub struct S3Cache {
    client: Client,
    bucket: String,
}

impl S3Cache {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from the ambient AWS environment configuration.
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket)
    }
}

#[async_trait]
impl CacheBackend for S3Cache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                // NoSuchKey is the well-defined "absent" signal, not a failure.
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_no_such_key())
                {
                    debug!(bucket = %self.bucket, %key, "cache object does not exist");
                    return Ok(None);
                }
                return Err(ContribsError::Cache(format!("S3 GetObject: {err}")));
            }
        };

        let payload = output
            .body
            .collect()
            .await
            .map_err(|err| ContribsError::Cache(format!("read S3 GetObject body: {err}")))?
            .into_bytes()
            .to_vec();

        debug!(bucket = %self.bucket, %key, bytes = payload.len(), "cache object read");
        Ok(Some(payload))
    }

    async fn save(&self, key: &str, payload: &[u8], content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(payload.to_vec()))
            .content_type(content_type)
            .send()
            .await
            .map_err(|err| ContribsError::Cache(format!("S3 PutObject: {err}")))?;

        debug!(bucket = %self.bucket, %key, bytes = payload.len(), "cache object written");
        Ok(())
    }
}
