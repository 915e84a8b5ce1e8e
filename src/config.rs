//! Configuration for the Marvel API client.
//!
//! This module provides the [`Config`] struct for setting up API credentials,
//! the optional client-side rate limit, and transport options.

use std::time::Duration;

use crate::error::Error;

/// Public REST endpoint of the Marvel API
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com:443/v1/public";

/// Environment variable holding the public key
pub const PUBLIC_KEY_ENV: &str = "MARVEL_PUBLIC_KEY";

/// Environment variable holding the (optional) private key
pub const PRIVATE_KEY_ENV: &str = "MARVEL_PRIVATE_KEY";

/// Client-side throttle: at most `max_requests` requests per `per` window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum requests admitted within one window
    pub max_requests: u32,
    /// Window length
    pub per: Duration,
}

impl RateLimit {
    /// Create a rate limit of `max_requests` per `per`
    pub fn new(max_requests: u32, per: Duration) -> Self {
        Self { max_requests, per }
    }

    /// `max_requests` per window of `per_milliseconds`
    pub fn per_millis(max_requests: u32, per_milliseconds: u64) -> Self {
        Self::new(max_requests, Duration::from_millis(per_milliseconds))
    }

    /// Requests per second
    pub fn per_second(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(1))
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_requests == 0 {
            return Err(Error::Config(
                "rate limit max_requests must be greater than zero".into(),
            ));
        }
        if self.per.is_zero() {
            return Err(Error::Config("rate limit window must not be zero".into()));
        }
        Ok(())
    }
}

/// Configuration for the Marvel API client
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use marvel_api::Config;
/// use marvel_api::config::RateLimit;
///
/// // Public key only (browser-style referrer auth)
/// let config = Config::new("my-public-key");
///
/// // Signed server-side requests, throttled to 10 per second
/// let config = Config::new("my-public-key")
///     .with_private_key("my-private-key")
///     .with_rate_limit(RateLimit::per_second(10))
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Clone)]
pub struct Config {
    /// Public API key
    public_key: String,

    /// Private API key; enables signed mode
    private_key: Option<String>,

    /// Client-side throttle (None = passthrough)
    rate_limit: Option<RateLimit>,

    /// Base URL, without trailing slash
    base_url: String,

    /// HTTP request timeout (None = transport default, no timeout)
    timeout: Option<Duration>,

    /// User agent sent with every request
    user_agent: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("rate_limit", &self.rate_limit)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Config {
    /// Create a new configuration with a public key
    ///
    /// # Arguments
    ///
    /// * `public_key` - Your public key from the Marvel developer portal
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: None,
            rate_limit: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Load credentials from `MARVEL_PUBLIC_KEY` and `MARVEL_PRIVATE_KEY`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `MARVEL_PUBLIC_KEY` is not set.
    pub fn from_env() -> Result<Self, Error> {
        let public_key = std::env::var(PUBLIC_KEY_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", PUBLIC_KEY_ENV)))?;
        let config = Self::new(public_key);
        Ok(match std::env::var(PRIVATE_KEY_ENV) {
            Ok(private_key) => config.with_private_key(private_key),
            Err(_) => config,
        })
    }

    /// Set the private key, switching to signed mode
    ///
    /// An empty key leaves the client in public-only mode.
    #[must_use]
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        let private_key = private_key.into();
        self.private_key = (!private_key.is_empty()).then_some(private_key);
        self
    }

    /// Throttle outbound requests
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    /// Set the HTTP request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Point the client at another host (proxies, test servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Get the private key, if any
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    /// Get the rate limit, if any
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit
    }

    /// Get the REST API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the timeout duration, if one was set
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Get the user agent override
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Check the configuration before any request is made
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty public key, an unusable rate
    /// limit, or a base URL that does not parse.
    pub fn validate(&self) -> Result<(), Error> {
        if self.public_key.trim().is_empty() {
            return Err(Error::Config("public key must not be empty".into()));
        }
        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;
        Ok(())
    }
}
