//! Character types.

use serde::Deserialize;

use super::{Entity, Image, ResourceList, StorySummary, Summary, Url};
use crate::endpoint::Resource;
use crate::types::params::CharacterParams;

/// A Marvel character
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique character ID
    pub id: u32,

    /// Character name
    #[serde(default)]
    pub name: String,

    /// Short bio (often empty)
    #[serde(default)]
    pub description: Option<String>,

    /// Last modification date (ISO 8601)
    #[serde(default)]
    pub modified: Option<String>,

    /// API path of this character
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,

    /// Public web pages
    #[serde(default)]
    pub urls: Vec<Url>,

    /// Representative image
    #[serde(default)]
    pub thumbnail: Option<Image>,

    /// Comics featuring the character
    #[serde(default)]
    pub comics: ResourceList<Summary>,

    /// Stories featuring the character
    #[serde(default)]
    pub stories: ResourceList<StorySummary>,

    /// Events featuring the character
    #[serde(default)]
    pub events: ResourceList<Summary>,

    /// Series featuring the character
    #[serde(default)]
    pub series: ResourceList<Summary>,
}

impl Entity for Character {
    const RESOURCE: Resource = Resource::Character;
    type Params = CharacterParams;
}
