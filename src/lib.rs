//! # marvel-api
//!
//! A typed, rate-limited Rust client for the [Marvel Comics](https://developer.marvel.com)
//! public API.
//!
//! ## Features
//!
//! - **Both auth modes** - public key only, or signed `ts`/`hash` requests
//!   when a private key is configured
//! - **Client-side throttling** - optional FIFO rate limit per client
//! - **Typed responses** - one generic envelope over six entity kinds
//! - **Async/Await** - Built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marvel_api::{Config, MarvelClient};
//! use marvel_api::config::RateLimit;
//! use marvel_api::endpoint::Resource;
//! use marvel_api::types::{Character, CharacterParams, Comic, ComicParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), marvel_api::Error> {
//!     let config = Config::new("public-key")
//!         .with_private_key("private-key")
//!         .with_rate_limit(RateLimit::per_second(5));
//!     let client = MarvelClient::new(config)?;
//!
//!     // Search characters
//!     let params = CharacterParams {
//!         name_starts_with: Some("spider".into()),
//!         ..Default::default()
//!     };
//!     let characters = client.list::<Character>(&params).await?;
//!
//!     // Comics featuring the first match
//!     let id = characters.results()[0].id;
//!     let comics = client
//!         .related::<Comic>(Resource::Character, id, &ComicParams::default())
//!         .await?;
//!     println!("{} comics", comics.data.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`client`] - transport, request signing, query strings, throttling
//! - [`endpoint`] - the resource × relation endpoint table
//! - [`types`] - response envelope, entities and filter parameters
//! - [`config`] - credentials and client options
//! - [`error`] - Error types for the crate

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;

// Re-export main types at crate root for convenience
pub use config::Config;
pub use endpoint::{Endpoint, Resource};
pub use error::Error;

use client::query::QueryParams;
use serde::de::DeserializeOwned;
use types::{DataWrapper, Entity};

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The main Marvel API client
///
/// Every endpoint goes through [`fetch`](Self::fetch); [`list`](Self::list),
/// [`get`](Self::get) and [`related`](Self::related) pick the endpoint and
/// response type from the entity type.
///
/// # Example
///
/// ```rust,no_run
/// use marvel_api::{Config, MarvelClient, Resource};
/// use marvel_api::types::{Character, Story, StoryParams};
///
/// # async fn example() -> marvel_api::Result<()> {
/// let client = MarvelClient::new(Config::new("public-key"))?;
///
/// let spider_man = client.get::<Character>(1009610).await?;
/// let stories = client
///     .related::<Story>(Resource::Character, 1009610, &StoryParams::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MarvelClient {
    config: Config,
    rest_client: client::rest::RestClient,
}

impl MarvelClient {
    /// Create a new Marvel client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (e.g. empty public
    /// key) or the HTTP client cannot be initialized.
    pub fn new(config: Config) -> Result<Self> {
        let rest_client = client::rest::RestClient::new(&config)?;
        Ok(Self {
            config,
            rest_client,
        })
    }

    /// Create a client around a caller-configured [`reqwest::Client`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_http_client(config: Config, http_client: reqwest::Client) -> Result<Self> {
        let rest_client = client::rest::RestClient::with_http_client(&config, http_client)?;
        Ok(Self {
            config,
            rest_client,
        })
    }

    /// Get a reference to the REST client
    pub fn rest(&self) -> &client::rest::RestClient {
        &self.rest_client
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request any endpoint of the table.
    ///
    /// `params` is ignored for by-id endpoints, which take no filters.
    pub async fn fetch<T>(&self, endpoint: &Endpoint, params: Option<QueryParams>) -> Result<DataWrapper<T>>
    where
        T: DeserializeOwned,
    {
        let path = endpoint.path();
        match params {
            Some(params) if endpoint.accepts_params() => {
                self.rest_client.request_with_params(&path, params).await
            }
            _ => self.rest_client.request(&path).await,
        }
    }

    /// Request by (resource, id, relation), returning untyped results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] for combinations outside the table.
    pub async fn dispatch(
        &self,
        resource: Resource,
        id: Option<u32>,
        related: Option<Resource>,
        params: Option<QueryParams>,
    ) -> Result<DataWrapper<serde_json::Value>> {
        let endpoint = Endpoint::resolve(resource, id, related)?;
        self.fetch(&endpoint, params).await
    }

    /// List entities of kind `E`, e.g. `GET /comics`
    pub async fn list<E: Entity>(&self, params: &E::Params) -> Result<DataWrapper<E>> {
        let params = QueryParams::from_serializable(params)?;
        self.fetch(&Endpoint::List(E::RESOURCE), Some(params)).await
    }

    /// Fetch one entity of kind `E` by id, e.g. `GET /comics/{id}`
    pub async fn get<E: Entity>(&self, id: u32) -> Result<DataWrapper<E>> {
        self.fetch(&Endpoint::ById(E::RESOURCE, id), None).await
    }

    /// List entities of kind `E` related to `parent` `id`,
    /// e.g. `GET /characters/{id}/comics`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `parent` is `E`'s own kind.
    pub async fn related<E: Entity>(
        &self,
        parent: Resource,
        id: u32,
        params: &E::Params,
    ) -> Result<DataWrapper<E>> {
        let endpoint = Endpoint::related(parent, id, E::RESOURCE)?;
        let params = QueryParams::from_serializable(params)?;
        self.fetch(&endpoint, Some(params)).await
    }
}
