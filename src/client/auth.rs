//! Request authentication for the Marvel API.
//!
//! Marvel supports two modes, selected by whether a private key is known:
//!
//! - **Public-only**: `apikey=<public key>` (client-side apps, checked
//!   against the registered referrers)
//! - **Signed**: `apikey`, `ts` and `hash`, where
//!   `hash = md5(ts + private_key + public_key)` as lowercase hex
//!
//! The timestamp is taken fresh for every request; a hash is never reused.
//!
//! # Example
//!
//! ```rust
//! use marvel_api::client::auth::Signer;
//!
//! let signer = Signer::new("1234", Some("abcd"));
//! assert_eq!(signer.hash("1"), "ffd275c5130566a2916217b101f26150");
//! ```

use md5::{Digest, Md5};

use crate::client::query::QueryParams;

/// Query parameter carrying the public key
pub const API_KEY_PARAM: &str = "apikey";
/// Query parameter carrying the request timestamp
pub const TIMESTAMP_PARAM: &str = "ts";
/// Query parameter carrying the request hash
pub const HASH_PARAM: &str = "hash";

/// Which authentication fragment the signer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `apikey` only
    PublicOnly,
    /// `apikey`, `ts` and `hash`
    Signed,
}

/// Computes the authentication fragment for each request
#[derive(Clone)]
pub struct Signer {
    public_key: String,
    private_key: Option<String>,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.public_key)
            .field("mode", &self.mode())
            .finish()
    }
}

impl Signer {
    /// Create a signer; an empty private key means public-only mode
    pub fn new(public_key: impl Into<String>, private_key: Option<&str>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        }
    }

    /// The active authentication mode
    pub fn mode(&self) -> AuthMode {
        if self.private_key.is_some() {
            AuthMode::Signed
        } else {
            AuthMode::PublicOnly
        }
    }

    /// The public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// `md5(ts + private_key + public_key)` as lowercase hex.
    ///
    /// In public-only mode the private key contributes an empty string.
    pub fn hash(&self, timestamp: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(timestamp.as_bytes());
        hasher.update(self.private_key.as_deref().unwrap_or_default().as_bytes());
        hasher.update(self.public_key.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Merge the auth fragment for the current time into `params`
    pub fn apply(&self, params: &mut QueryParams) {
        self.apply_at(params, Self::current_timestamp_ms());
    }

    /// Merge the auth fragment for a fixed timestamp into `params`.
    ///
    /// Auth fields are set after caller parameters, so they override any
    /// caller-supplied `apikey`, `ts` or `hash`.
    pub fn apply_at(&self, params: &mut QueryParams, timestamp_ms: u64) {
        params.set(API_KEY_PARAM, self.public_key.as_str());
        if self.private_key.is_some() {
            let ts = timestamp_ms.to_string();
            let hash = self.hash(&ts);
            params.set(TIMESTAMP_PARAM, ts);
            params.set(HASH_PARAM, hash);
        }
    }

    /// The auth fragment on its own, for a fixed timestamp
    pub fn auth_params_at(&self, timestamp_ms: u64) -> QueryParams {
        let mut params = QueryParams::new();
        self.apply_at(&mut params, timestamp_ms);
        params
    }

    /// Get the current timestamp in milliseconds
    pub fn current_timestamp_ms() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}
