//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpRateLimit = GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for public pages (hub, health, static files).
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> IpRateLimit {
    build(2, 100)
}

/// Creates a stricter rate limiter for the login form.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
pub fn secure_layer() -> IpRateLimit {
    build(1, 10)
}

fn build(per_second: u64, burst_size: u32) -> IpRateLimit {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
