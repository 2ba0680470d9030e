//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Keys requests by client IP.
///
/// Uses the socket peer address by default. Behind a trusted reverse proxy
/// it reads `X-Forwarded-For` / `X-Real-IP` / `Forwarded` first.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

type ClientIpGovernor =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for public endpoints (login, logout).
///
/// # Limits
///
/// - **Replenish**: one request every 2 seconds
/// - **Burst**: 20 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/auth/login", post(login_handler))
///     .layer(rate_limit::layer(false));
/// ```
pub fn layer(behind_proxy: bool) -> ClientIpGovernor {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(20)
            .key_extractor(ClientIpKeyExtractor { behind_proxy })
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a stricter rate limiter for analysis endpoints.
///
/// # Limits
///
/// - **Replenish**: one request every 6 seconds
/// - **Burst**: 10 requests
///
/// Each search fans out to several paid provider calls, so the replenish
/// period is long.
pub fn secure_layer(behind_proxy: bool) -> ClientIpGovernor {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(6)
            .burst_size(10)
            .key_extractor(ClientIpKeyExtractor { behind_proxy })
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
