//! Rate limiting middleware for the public API.
//!
//! Listing endpoints run a regex scan per request, so each peer IP gets a
//! token bucket sized from the environment.

use actix_governor::{GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};

use crate::config::CONFIG;

/// Create the rate limiter configuration for `/api`.
///
/// One request is replenished every `RATE_LIMIT_SECONDS_PER_REQUEST` seconds,
/// with bursts of up to `RATE_LIMIT_BURST_SIZE` requests.
///
/// Usage:
/// ```ignore
/// let config = create_api_rate_limiter_config();
/// App::new().wrap(Governor::new(&config))
/// ```
pub fn create_api_rate_limiter_config() -> GovernorConfig<
    PeerIpKeyExtractor,
    actix_governor::governor::middleware::NoOpMiddleware<
        actix_governor::governor::clock::QuantaInstant,
    >,
> {
    GovernorConfigBuilder::default()
        .seconds_per_request(CONFIG.rate_limit_seconds_per_request)
        .burst_size(CONFIG.rate_limit_burst_size)
        .finish()
        .expect("rate limit period and burst size must be non-zero")
}
