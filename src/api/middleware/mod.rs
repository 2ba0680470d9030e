//! Tower layers wrapped around the API routes.
//!
//! - [`auth`] - Verifies the session token and exposes the caller's session
//! - [`rate_limit`] - Per-client-IP token buckets via `tower_governor`
//! - [`tracing`] - Access log spans with latency

pub mod auth;
pub mod rate_limit;
pub mod tracing;
