//! Creator types.

use serde::Deserialize;

use super::{Entity, Image, ResourceList, StorySummary, Summary, Url};
use crate::endpoint::Resource;
use crate::types::params::CreatorParams;

/// A writer, artist or other contributor
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Unique creator ID
    pub id: u32,

    /// First name
    #[serde(default)]
    pub first_name: String,

    /// Middle name
    #[serde(default)]
    pub middle_name: String,

    /// Last name
    #[serde(default)]
    pub last_name: String,

    /// Suffix ("Jr.", ...)
    #[serde(default)]
    pub suffix: String,

    /// Full display name
    #[serde(default)]
    pub full_name: String,

    /// Last modification date (ISO 8601)
    #[serde(default)]
    pub modified: Option<String>,

    /// API path of this creator
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,

    /// Public web pages
    #[serde(default)]
    pub urls: Vec<Url>,

    /// Representative image
    #[serde(default)]
    pub thumbnail: Option<Image>,

    /// Series the creator worked on
    #[serde(default)]
    pub series: ResourceList<Summary>,

    /// Stories the creator worked on
    #[serde(default)]
    pub stories: ResourceList<StorySummary>,

    /// Comics the creator worked on
    #[serde(default)]
    pub comics: ResourceList<Summary>,

    /// Events the creator worked on
    #[serde(default)]
    pub events: ResourceList<Summary>,
}

impl Entity for Creator {
    const RESOURCE: Resource = Resource::Creator;
    type Params = CreatorParams;
}
