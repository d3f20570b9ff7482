//! Server limits

use std::time::Duration;

/// Concurrent connection limit
pub const MAX_CONCURRENCY: usize = 64;

/// Request body limit; only small urlencoded forms are accepted
pub const MAX_BODY_SIZE: usize = 16 * 1024; // 16KB

/// Per-request timeout. Config validation keeps the provider client timeout
/// below this, so a slow provider surfaces as a fetch error on the page.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
