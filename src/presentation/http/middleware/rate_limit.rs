// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Governor replenishes at millisecond granularity, so faster rates are not
/// representable. Configuration rejects anything above this.
pub const MAX_PER_SECOND: u64 = 1000;

/// Sustained requests per second per client, plus the burst allowed on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst: 20,
        }
    }
}

/// Per-client-IP limiter. Returns `None` when the settings describe an
/// empty quota, which governor cannot represent.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<RateLimitLayer> {
    if settings.per_second == 0 {
        return None;
    }
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(replenish_interval_ms(settings.per_second));
    builder.burst_size(settings.burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
    Some(GovernorLayer::new(config))
}

/// Milliseconds between replenished cells for a sustained per-second rate.
const fn replenish_interval_ms(per_second: u64) -> u64 {
    let interval = 1000 / per_second;
    if interval == 0 { 1 } else { interval }
}
