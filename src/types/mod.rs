//! API types for Marvel responses and request filters.
//!
//! Every response is the same envelope, [`DataWrapper<T>`], around a page of
//! entities. Entity kinds:
//!
//! - [`character`] - Characters
//! - [`comic`] - Comics
//! - [`creator`] - Creators
//! - [`event`] - Events
//! - [`series`] - Series
//! - [`story`] - Stories
//!
//! [`params`] holds the filter struct for each kind.

pub mod character;
pub mod comic;
pub mod creator;
pub mod event;
pub mod params;
pub mod series;
pub mod story;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::endpoint::Resource;

pub use character::Character;
pub use comic::Comic;
pub use creator::Creator;
pub use event::Event;
pub use params::{CharacterParams, ComicParams, CreatorParams, EventParams, SeriesParams, StoryParams};
pub use series::Series;
pub use story::Story;

/// An entity returned by the API, bound to its resource kind and filter type
pub trait Entity: DeserializeOwned {
    /// Resource kind whose endpoints return this entity
    const RESOURCE: Resource;

    /// Filters accepted when listing this entity
    type Params: Serialize + Default;
}

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataWrapper<T> {
    /// HTTP status code echoed in the body
    pub code: i32,

    /// Status description ("Ok")
    pub status: String,

    /// Copyright notice
    #[serde(default)]
    pub copyright: Option<String>,

    /// Attribution text to display with the data
    #[serde(default)]
    pub attribution_text: Option<String>,

    /// Attribution as an HTML link
    #[serde(default, rename = "attributionHTML")]
    pub attribution_html: Option<String>,

    /// Digest of the result set, for conditional requests
    #[serde(default)]
    pub etag: Option<String>,

    /// Results page
    pub data: DataContainer<T>,
}

impl<T> DataWrapper<T> {
    /// Results of this page
    pub fn results(&self) -> &[T] {
        &self.data.results
    }

    /// Take the results, dropping the envelope
    pub fn into_results(self) -> Vec<T> {
        self.data.results
    }
}

/// A page of results
#[derive(Debug, Clone, Deserialize)]
pub struct DataContainer<T> {
    /// Offset of the first result
    pub offset: u32,
    /// Requested page size
    pub limit: u32,
    /// Total matching results
    pub total: u32,
    /// Results in this page
    pub count: u32,
    /// Entities
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A public web page for an entity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Url {
    /// Link kind ("detail", "wiki", "comiclink", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Full URL
    pub url: String,
}

/// Image reference, split into path and extension
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Image {
    /// Path without extension
    pub path: String,
    /// File extension
    pub extension: String,
}

impl Image {
    /// Full-size image URL
    pub fn full_url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }

    /// URL for a sized variant such as `portrait_xlarge` or `standard_medium`
    pub fn url(&self, variant: &str) -> String {
        format!("{}/{}.{}", self.path, variant, self.extension)
    }
}

/// Descriptive text attached to a comic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextObject {
    /// Text kind ("issue_solicit_text", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// IETF language tag
    #[serde(default)]
    pub language: String,
    /// Text body
    pub text: String,
}

/// Minimal reference to another entity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Summary {
    /// API path of the entity
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// Reference to a character or creator, with their role
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleSummary {
    /// API path of the entity
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Role ("writer", "penciller", ...)
    #[serde(default)]
    pub role: Option<String>,
}

/// Reference to a story, with its kind
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorySummary {
    /// API path of the story
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Story kind ("cover", "interiorStory", ...)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Embedded, truncated list of related entities
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList<S> {
    /// Total related entities
    #[serde(default)]
    pub available: u32,
    /// Entities included in `items`
    #[serde(default)]
    pub returned: u32,
    /// API path listing all of them
    #[serde(default, rename = "collectionURI")]
    pub collection_uri: String,
    /// Included references
    #[serde(default = "Vec::new")]
    pub items: Vec<S>,
}

impl<S> Default for ResourceList<S> {
    fn default() -> Self {
        Self {
            available: 0,
            returned: 0,
            collection_uri: String::new(),
            items: Vec::new(),
        }
    }
}
