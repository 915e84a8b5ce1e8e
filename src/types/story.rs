//! Story types.

use serde::Deserialize;

use super::{Entity, Image, ResourceList, RoleSummary, Summary};
use crate::endpoint::Resource;
use crate::types::params::StoryParams;

/// An indivisible unit of a comic (cover, interior story, ...)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique story ID
    pub id: u32,

    /// Story title
    #[serde(default)]
    pub title: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// API path of this story
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,

    /// Story type ("cover", "interiorStory", ...)
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Last modification date (ISO 8601)
    #[serde(default)]
    pub modified: Option<String>,

    /// Representative image
    #[serde(default)]
    pub thumbnail: Option<Image>,

    /// Comics containing the story
    #[serde(default)]
    pub comics: ResourceList<Summary>,

    /// Series containing the story
    #[serde(default)]
    pub series: ResourceList<Summary>,

    /// Events containing the story
    #[serde(default)]
    pub events: ResourceList<Summary>,

    /// Characters in the story
    #[serde(default)]
    pub characters: ResourceList<RoleSummary>,

    /// Creators of the story
    #[serde(default)]
    pub creators: ResourceList<RoleSummary>,

    /// Issue the story first appeared in
    #[serde(default)]
    pub original_issue: Option<Summary>,
}

impl Entity for Story {
    const RESOURCE: Resource = Resource::Story;
    type Params = StoryParams;
}
