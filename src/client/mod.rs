//! API client internals.
//!
//! This module contains:
//!
//! - [`rest`] - HTTP transport with auth and throttling
//! - [`auth`] - public-key and signed (md5) authentication
//! - [`query`] - query string serialization
//! - [`rate_limit`] - FIFO sliding-window throttle

pub mod auth;
pub mod query;
pub mod rate_limit;
pub mod rest;

pub use auth::{AuthMode, Signer};
pub use query::{ParamValue, QueryParams};
pub use rate_limit::RateLimiter;
pub use rest::RestClient;
