//! Storage for each user's most recent analysis.
//!
//! Provides an [`AnalysisCache`] trait with three implementations:
//! - [`MemoryCache`] - Default in-process cache
//! - [`RedisCache`] - Shared Redis-backed cache
//! - [`NullCache`] - No-op implementation

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{AnalysisCache, CacheError, CacheResult};

#[cfg(test)]
pub use service::MockAnalysisCache;
