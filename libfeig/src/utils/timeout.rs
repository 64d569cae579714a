//! Timeout helpers.
//!
//! Exchanges have no deadline unless one is configured; USB reads always
//! use a short poll timeout so the receive loop keeps cycling.

use std::future::Future;
use std::time::Duration;

use crate::{Error, Result};

/// Poll timeout for a single USB read in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default USB read poll timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Await `fut`, bounded by `limit` when one is given.
///
/// Elapsing maps to [`Error::Timeout`]; with `None` this waits forever.
pub async fn with_optional_timeout<F, T>(limit: Option<Duration>, fut: F) -> Result<T>
where
    F: Future<Output = T>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| Error::Timeout),
        None => Ok(fut.await),
    }
}
