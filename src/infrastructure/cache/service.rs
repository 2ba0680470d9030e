//! Analysis cache trait and error types.

use async_trait::async_trait;
use std::fmt;

use crate::domain::entities::DomainAnalysis;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
    SerializationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
            Self::SerializationError(e) => write!(f, "Cache serialization error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Holds the most recent analysis per signed-in user.
///
/// The analysis itself is never persisted by the pipeline; this cache is
/// how the dashboard re-reads it after a page load. Failures must not break
/// a search, so callers log and continue on errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - in-process map with TTL
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed, JSON encoded
/// - [`crate::infrastructure::cache::NullCache`] - stores nothing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisCache: Send + Sync {
    /// Returns the latest analysis stored for `user`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(analysis))` on hit
    /// - `Ok(None)` on miss or expiry
    async fn latest(&self, user: &str) -> CacheResult<Option<DomainAnalysis>>;

    /// Replaces the latest analysis for `user`.
    async fn store_latest(&self, user: &str, analysis: &DomainAnalysis) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
