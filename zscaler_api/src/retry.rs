//! Opt-in retry for callers that want it. Nothing in this crate retries on
//! its own; wrap a call in [`with_retry`] to get backoff on transient failures.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::Error;

/// Retry budget and backoff bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(2000),
            max_delay: Duration::from_millis(30000),
        }
    }
}

impl RetryConfig {
    /// Reads `ZSCALER_RETRY_MAX`, `ZSCALER_RETRY_BASE_MS` and
    /// `ZSCALER_RETRY_MAX_MS`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RetryConfig::from_env`], reading values through `lookup`.
    /// Missing or unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| {
            Duration::from_millis(parse_or(lookup(key), default.as_millis() as u64))
        };
        Self {
            max_retries: parse_or(lookup("ZSCALER_RETRY_MAX"), defaults.max_retries),
            base_delay: millis("ZSCALER_RETRY_BASE_MS", defaults.base_delay),
            max_delay: millis("ZSCALER_RETRY_MAX_MS", defaults.max_delay),
        }
    }

    /// Backoff before retry number `attempt` (1-based): doubling from the
    /// base delay, capped at the max, with 0.8-1.2 jitter.
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = (self.base_delay.as_millis() as u64)
            .saturating_mul(exp)
            .min(self.max_delay.as_millis() as u64);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// Runs `f`, retrying [`Error::is_retryable`] failures up to
/// `cfg.max_retries` times. Other errors are returned immediately.
pub async fn with_retry<T, F, Fut>(cfg: &RetryConfig, label: &str, mut f: F) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let mut attempt = 0usize;
    loop {
        match f().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if attempt > cfg.max_retries || !err.is_retryable() {
                    return Err(err);
                }
                let delay = cfg.delay_for_attempt(attempt);
                tracing::warn!(
                    "{} request failed (attempt {}/{}): {}, retrying in {:.1}s",
                    label,
                    attempt,
                    cfg.max_retries,
                    err,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

fn parse_or<T: std::str::FromStr>(val: Option<String>, default: T) -> T {
    val.and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}
