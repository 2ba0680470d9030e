//! In-process cache used when Redis is not configured.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::service::{AnalysisCache, CacheResult};
use crate::domain::entities::DomainAnalysis;

/// Keeps the latest analysis per user in memory.
///
/// Entries expire after the configured TTL and are dropped lazily on read.
/// Contents do not survive a restart and are not shared between instances.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, (Instant, DomainAnalysis)>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        debug!(ttl_seconds = ttl.as_secs(), "Using in-memory analysis cache");
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Users are keyed case-insensitively, matching the Redis backend.
    fn build_key(user: &str) -> String {
        user.to_lowercase()
    }
}

#[async_trait]
impl AnalysisCache for MemoryCache {
    async fn latest(&self, user: &str) -> CacheResult<Option<DomainAnalysis>> {
        let key = Self::build_key(user);
        {
            let entries = self.entries.read().await;
            match entries.get(&key) {
                Some((stored_at, analysis)) if stored_at.elapsed() < self.ttl => {
                    debug!(user, domain = %analysis.domain, "Cache HIT");
                    return Ok(Some(analysis.clone()));
                }
                None => {
                    debug!(user, "Cache MISS");
                    return Ok(None);
                }
                Some(_) => {}
            }
        }

        self.entries.write().await.remove(&key);
        debug!(user, "Cache entry expired");
        Ok(None)
    }

    async fn store_latest(&self, user: &str, analysis: &DomainAnalysis) -> CacheResult<()> {
        self.entries
            .write()
            .await
            .insert(Self::build_key(user), (Instant::now(), analysis.clone()));
        debug!(user, domain = %analysis.domain, "Cache SET");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DomainName;
    use std::collections::BTreeMap;

    fn analysis(domain: &str, score: u8) -> DomainAnalysis {
        DomainAnalysis {
            domain: DomainName::parse(domain).unwrap(),
            overall_score: score,
            models: BTreeMap::new(),
            trends: Vec::new(),
            prompts: Vec::new(),
            competitors: Vec::new(),
            highlights: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_store_replaces_latest() {
        let cache = MemoryCache::new(Duration::from_secs(60));

        cache.store_latest("a@example.com", &analysis("stripe.com", 10)).await.unwrap();
        cache.store_latest("a@example.com", &analysis("notion.so", 20)).await.unwrap();

        let latest = cache.latest("a@example.com").await.unwrap().unwrap();
        assert_eq!(latest.domain.as_str(), "notion.so");
        assert!(cache.latest("b@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_key_ignores_case() {
        let cache = MemoryCache::new(Duration::from_secs(60));

        cache.store_latest("Admin@Example.com", &analysis("stripe.com", 10)).await.unwrap();

        let latest = cache.latest("admin@example.com").await.unwrap().unwrap();
        assert_eq!(latest.domain.as_str(), "stripe.com");
        assert!(cache.latest("ADMIN@EXAMPLE.COM").await.unwrap().is_some());
        assert_eq!(cache.entries.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_dropped() {
        let cache = MemoryCache::new(Duration::ZERO);

        cache.store_latest("a@example.com", &analysis("stripe.com", 10)).await.unwrap();

        assert!(cache.latest("a@example.com").await.unwrap().is_none());
        assert!(cache.entries.read().await.is_empty());
    }
}
