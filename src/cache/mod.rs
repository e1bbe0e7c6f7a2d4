// Cache Gateway - TTL key/value store for slow-changing discovery data
//
// Every discovery operation (supported currencies, required bank fields)
// reads through this gateway. Values are stored as JSON so heterogeneous
// payloads share one backend. A miss is never an error.

mod memory;

pub use memory::InMemoryCache;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// TTL applied to discovery data (currency pairs, requirement schemas).
/// These change rarely upstream; a whole day is comfortably safe.
pub const DISCOVERY_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Errors from cache backends
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),

    #[error("cached value could not be encoded or decoded: {0}")]
    Codec(String),
}

/// Key/value store with per-entry TTL.
///
/// Entries are created on first miss and expire on their own; the engine
/// never invalidates explicitly. Concurrent misses for the same key may both
/// fetch upstream and both write - accepted, since cached values are
/// read-mostly and idempotent to recompute.
#[async_trait]
pub trait CacheGateway: Send + Sync {
    /// Look up a key. Expired entries read as absent.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError>;

    /// Store a value under a key for `ttl`.
    async fn set(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Duration,
    ) -> Result<(), CacheError>;
}

/// Typed read-through helper over the JSON gateway
pub async fn get_typed<T: DeserializeOwned>(
    cache: &dyn CacheGateway,
    key: &str,
) -> Result<Option<T>, CacheError> {
    match cache.get(key).await? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| CacheError::Codec(e.to_string())),
        None => Ok(None),
    }
}

/// Typed write helper over the JSON gateway
pub async fn set_typed<T: Serialize>(
    cache: &dyn CacheGateway,
    key: &str,
    value: &T,
    ttl: Duration,
) -> Result<(), CacheError> {
    let value = serde_json::to_value(value).map_err(|e| CacheError::Codec(e.to_string()))?;
    cache.set(key, value, ttl).await
}
