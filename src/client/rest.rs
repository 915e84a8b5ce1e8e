//! HTTP REST client for the Marvel API.
//!
//! This module provides the [`RestClient`], which authenticates each request,
//! applies the optional client-side rate limit, and decodes JSON responses.
//!
//! # Example
//!
//! ```rust,no_run
//! use marvel_api::{Config, MarvelClient};
//! use marvel_api::types::{Character, DataWrapper};
//!
//! # async fn example() -> marvel_api::Result<()> {
//! let client = MarvelClient::new(Config::new("public-key").with_private_key("private-key"))?;
//!
//! // Raw access through the REST client
//! let wolverine: DataWrapper<Character> = client.rest().request("characters/1009718").await?;
//! # Ok(())
//! # }
//! ```

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::auth::Signer;
use crate::client::query::QueryParams;
use crate::client::rate_limit::RateLimiter;
use crate::config::Config;
use crate::error::{ApiError, Error};

/// HTTP client for the Marvel REST API
#[derive(Debug)]
pub struct RestClient {
    client: Client,
    base_url: String,
    signer: Signer,
    rate_limiter: Option<RateLimiter>,
}

impl RestClient {
    /// Create a new REST client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }

        Self::with_http_client(config, builder.build()?)
    }

    /// Create a REST client around a caller-configured [`reqwest::Client`].
    ///
    /// The config's timeout and user agent are ignored; set them on `client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn with_http_client(config: &Config, client: Client) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            signer: Signer::new(config.public_key(), config.private_key()),
            rate_limiter: config.rate_limit().map(RateLimiter::from),
        })
    }

    /// Make an unparameterized GET request
    ///
    /// Only the auth fragment is appended to `endpoint`.
    pub async fn request<T>(&self, endpoint: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.request_with_params(endpoint, QueryParams::new()).await
    }

    /// Make a GET request with caller parameters
    ///
    /// The auth fragment is merged after `params` and wins on collision.
    pub async fn request_with_params<T>(&self, endpoint: &str, mut params: QueryParams) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.acquire().await;
        }

        // Sign after admission; ts must reflect dispatch time
        self.signer.apply(&mut params);
        let url = self.build_url(endpoint, &params);

        debug!(
            endpoint = %endpoint,
            mode = ?self.signer.mode(),
            "Sending request"
        );

        let response = self.client.get(&url).send().await?;
        self.handle_response(endpoint, response).await
    }

    /// Full URL for `endpoint` with an already-authenticated parameter set
    pub fn build_url(&self, endpoint: &str, params: &QueryParams) -> String {
        format!(
            "{}/{}?{}",
            self.base_url,
            endpoint.trim_start_matches('/'),
            params.to_query_string()
        )
    }

    /// Handle the HTTP response, checking for errors
    async fn handle_response<T>(&self, endpoint: &str, response: reqwest::Response) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint = %endpoint, status = status.as_u16(), "Request failed");
            return Err(Error::Api(ApiError::from_body(status.as_u16(), body)));
        }

        // Deserialize successful response
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request signer
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Get the rate limiter, if one is configured
    pub fn rate_limiter(&self) -> Option<&RateLimiter> {
        self.rate_limiter.as_ref()
    }
}
