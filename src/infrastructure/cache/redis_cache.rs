//! Redis-backed cache implementation.

use super::service::{AnalysisCache, CacheError, CacheResult};
use crate::domain::entities::DomainAnalysis;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache storing each user's latest analysis as JSON.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// Reads are fail-open: errors are logged and reported as a miss.
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the entry TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "analysis:latest:".to_string(),
        })
    }

    fn build_key(&self, user: &str) -> String {
        format!("{}{}", self.key_prefix, user.to_lowercase())
    }
}

#[async_trait]
impl AnalysisCache for RedisCache {
    async fn latest(&self, user: &str) -> CacheResult<Option<DomainAnalysis>> {
        let key = self.build_key(user);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<DomainAnalysis>(&raw) {
                Ok(analysis) => {
                    debug!("Cache HIT: {}", key);
                    Ok(Some(analysis))
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn store_latest(&self, user: &str, analysis: &DomainAnalysis) -> CacheResult<()> {
        let key = self.build_key(user);
        let payload = serde_json::to_string(analysis)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, payload, self.ttl_seconds)
            .await
            .map_err(|e| CacheError::OperationError(format!("SET {}: {}", key, e)))?;

        debug!("Cache SET: {} (TTL: {}s)", key, self.ttl_seconds);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
