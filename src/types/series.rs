//! Series types.

use serde::Deserialize;

use super::{Entity, Image, ResourceList, RoleSummary, StorySummary, Summary, Url};
use crate::endpoint::Resource;
use crate::types::params::SeriesParams;

/// A comic series
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Unique series ID
    pub id: u32,

    /// Series title
    #[serde(default)]
    pub title: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// API path of this series
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,

    /// Public web pages
    #[serde(default)]
    pub urls: Vec<Url>,

    /// First year of publication
    #[serde(default)]
    pub start_year: Option<i32>,

    /// Last year of publication (2099 while ongoing)
    #[serde(default)]
    pub end_year: Option<i32>,

    /// Age rating
    #[serde(default)]
    pub rating: String,

    /// Series type ("collection", "ongoing", ...)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Last modification date (ISO 8601)
    #[serde(default)]
    pub modified: Option<String>,

    /// Representative image
    #[serde(default)]
    pub thumbnail: Option<Image>,

    /// Comics in the series
    #[serde(default)]
    pub comics: ResourceList<Summary>,

    /// Stories in the series
    #[serde(default)]
    pub stories: ResourceList<StorySummary>,

    /// Events the series is part of
    #[serde(default)]
    pub events: ResourceList<Summary>,

    /// Characters in the series
    #[serde(default)]
    pub characters: ResourceList<RoleSummary>,

    /// Creators of the series
    #[serde(default)]
    pub creators: ResourceList<RoleSummary>,

    /// Following series
    #[serde(default)]
    pub next: Option<Summary>,

    /// Preceding series
    #[serde(default)]
    pub previous: Option<Summary>,
}

impl Entity for Series {
    const RESOURCE: Resource = Resource::Series;
    type Params = SeriesParams;
}
