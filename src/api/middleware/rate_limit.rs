//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests replenished per second, per client IP.
const PER_SECOND: u64 = 1;
/// Requests a client may make in a burst.
const BURST_SIZE: u32 = 20;

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 20 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = app_router(state).layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    GovernorLayer::new(Arc::new(config(PeerIpKeyExtractor)))
}

/// Creates a rate limiter keyed by the client IP reported by a reverse proxy.
///
/// Same limits as [`layer`], but the key is read from `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded` before falling back to the peer address. Use only
/// behind a trusted proxy; clients can set these headers themselves.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    GovernorLayer::new(Arc::new(config(SmartIpKeyExtractor)))
}

fn config<K: KeyExtractor>(key_extractor: K) -> GovernorConfig<K, NoOpMiddleware<QuantaInstant>> {
    GovernorConfigBuilder::default()
        .key_extractor(key_extractor)
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .expect("rate limit quota is non-zero")
}
