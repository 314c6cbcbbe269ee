//! Client configuration: identification headers, base URLs and retry policy.

use std::env;
use std::fmt;
use std::time::Duration;

/// Official aggregation host.
pub const OFFICIAL_DIVEHARDER_URL: &str = "https://api.diveharder.com";
/// Official community API host.
pub const OFFICIAL_COMMUNITY_URL: &str = "https://api.helldivers2.dev";

const DIVEHARDER_URL_ENV: &str = "DIVEHARDER_API_URL";
const COMMUNITY_URL_ENV: &str = "DIVEHARDER_COMMUNITY_URL";

/// Upper bound for any single delay between retry attempts.
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Which configured base URL a request is issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiHost {
    Diveharder,
    Community,
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiHost::Diveharder => f.write_str("diveharder"),
            ApiHost::Community => f.write_str("community"),
        }
    }
}

/// Client identification required by the upstream usage policy.
///
/// Both values are attached to every request: `user_agent` as `User-Agent`
/// and `X-Super-Client`, `contact` as `X-Super-Contact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identification {
    pub user_agent: String,
    pub contact: String,
}

impl Identification {
    pub fn new<A: Into<String>, C: Into<String>>(user_agent: A, contact: C) -> Self {
        Self {
            user_agent: user_agent.into(),
            contact: contact.into(),
        }
    }
}

/// The two base URLs the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    pub diveharder: String,
    pub community: String,
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self {
            diveharder: OFFICIAL_DIVEHARDER_URL.to_string(),
            community: OFFICIAL_COMMUNITY_URL.to_string(),
        }
    }
}

impl ApiUrls {
    /// Defaults, overridden by `DIVEHARDER_API_URL` and
    /// `DIVEHARDER_COMMUNITY_URL` when set to a non-empty value.
    pub fn from_env() -> Self {
        let mut urls = Self::default();
        if let Some(url) = non_empty_env(DIVEHARDER_URL_ENV) {
            urls.diveharder = url;
        }
        if let Some(url) = non_empty_env(COMMUNITY_URL_ENV) {
            urls.community = url;
        }
        urls
    }

    /// Base URL for `host`.
    pub fn base(&self, host: ApiHost) -> &str {
        match host {
            ApiHost::Diveharder => &self.diveharder,
            ApiHost::Community => &self.community,
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Bounded retry policy applied to every GET request.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total attempts are `max_retries + 1`.
    pub max_retries: u32,
    /// Exponential backoff factor in seconds.
    pub backoff_factor: f64,
    /// Status codes retried in addition to 429.
    pub extra_status_codes: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_factor: 0.2,
            extra_status_codes: Vec::new(),
        }
    }
}

impl RetryPolicy {
    /// Whether a response with `status` should be retried.
    pub fn retries_status(&self, status: u16) -> bool {
        status == 429 || self.extra_status_codes.contains(&status)
    }

    /// Delay before the `retry`-th retry (1-based).
    ///
    /// The first retry is immediate; later ones wait
    /// `backoff_factor * 2^(retry - 1)` seconds, capped at two minutes.
    pub fn backoff(&self, retry: u32) -> Duration {
        if retry <= 1 || self.backoff_factor <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = (retry - 1).min(31) as i32;
        let seconds = self.backoff_factor * 2f64.powi(exponent);
        if !seconds.is_finite() {
            return MAX_BACKOFF;
        }
        Duration::from_secs_f64(seconds).min(MAX_BACKOFF)
    }

    /// Clamp a server-provided `Retry-After` delay.
    pub fn clamp(&self, delay: Duration) -> Duration {
        delay.min(MAX_BACKOFF)
    }
}

/// Everything needed to construct a [`crate::Context`] backed by HTTP.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub identification: Identification,
    pub urls: ApiUrls,
    pub retry: RetryPolicy,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration with default URLs (after environment overrides), retry
    /// policy and a 30 second timeout.
    pub fn new(identification: Identification) -> Self {
        Self {
            identification,
            urls: ApiUrls::from_env(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_urls(mut self, urls: ApiUrls) -> Self {
        self.urls = urls;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
