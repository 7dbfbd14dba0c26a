//! Configuration for dataset retrieval.

use rand::Rng;
use std::time::Duration;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent sent with HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("geoview-countries/", env!("CARGO_PKG_VERSION"));

/// Configuration for fetching datasets.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Timeout for a single HTTP request in seconds.
    pub timeout_secs: u64,

    /// User-Agent header value.
    pub user_agent: String,

    /// Retry behavior for transient HTTP failures.
    pub retry: RetryConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryConfig::default(),
        }
    }
}

impl SourceConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.retry.initial_backoff > self.retry.max_backoff {
            return Err("initial backoff must not exceed max backoff".to_string());
        }
        Ok(())
    }
}

/// Longest extra delay added on top of a backoff, as a fraction of it.
const JITTER_FRACTION: f64 = 0.25;

/// Retry policy for transient fetch failures.
///
/// Attempt `n` waits `initial_backoff * 2^n`, capped at `max_backoff`, plus
/// up to a quarter of that when jitter is on.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the first delay and the ceiling every later delay is clamped to.
    pub fn with_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn backoff_duration(&self, attempt: u32) -> Duration {
        let delay = 1u32
            .checked_shl(attempt)
            .and_then(|factor| self.initial_backoff.checked_mul(factor))
            .map_or(self.max_backoff, |d| d.min(self.max_backoff));

        if self.jitter && !delay.is_zero() {
            delay + delay.mul_f64(rand::rng().random_range(0.0..=JITTER_FRACTION))
        } else {
            delay
        }
    }
}
