//! No-op cache implementation.

use super::service::{AnalysisCache, CacheResult};
use crate::domain::entities::DomainAnalysis;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// With this backend `GET /api/analysis/latest` always answers 404.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisCache for NullCache {
    async fn latest(&self, _user: &str) -> CacheResult<Option<DomainAnalysis>> {
        Ok(None)
    }

    async fn store_latest(&self, _user: &str, _analysis: &DomainAnalysis) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}
