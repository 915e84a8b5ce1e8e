//! Event types.

use serde::Deserialize;

use super::{Entity, Image, ResourceList, RoleSummary, StorySummary, Summary, Url};
use crate::endpoint::Resource;
use crate::types::params::EventParams;

/// A crossover event spanning several titles
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event ID
    pub id: u32,

    /// Event title
    #[serde(default)]
    pub title: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// API path of this event
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,

    /// Public web pages
    #[serde(default)]
    pub urls: Vec<Url>,

    /// Last modification date (ISO 8601)
    #[serde(default)]
    pub modified: Option<String>,

    /// Publication start date
    #[serde(default)]
    pub start: Option<String>,

    /// Publication end date
    #[serde(default)]
    pub end: Option<String>,

    /// Representative image
    #[serde(default)]
    pub thumbnail: Option<Image>,

    /// Comics in the event
    #[serde(default)]
    pub comics: ResourceList<Summary>,

    /// Stories in the event
    #[serde(default)]
    pub stories: ResourceList<StorySummary>,

    /// Series in the event
    #[serde(default)]
    pub series: ResourceList<Summary>,

    /// Characters in the event
    #[serde(default)]
    pub characters: ResourceList<RoleSummary>,

    /// Creators of the event
    #[serde(default)]
    pub creators: ResourceList<RoleSummary>,

    /// Following event
    #[serde(default)]
    pub next: Option<Summary>,

    /// Preceding event
    #[serde(default)]
    pub previous: Option<Summary>,
}

impl Entity for Event {
    const RESOURCE: Resource = Resource::Event;
    type Params = EventParams;
}
