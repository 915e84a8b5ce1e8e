//! Comic types.

use serde::Deserialize;

use super::{Entity, Image, ResourceList, RoleSummary, StorySummary, Summary, TextObject, Url};
use crate::endpoint::Resource;
use crate::types::params::ComicParams;

/// A key date for a comic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComicDate {
    /// Date kind ("onsaleDate", "focDate", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Date (ISO 8601)
    pub date: String,
}

/// A price for a comic
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComicPrice {
    /// Price kind ("printPrice", "digitalPurchasePrice")
    #[serde(rename = "type")]
    pub kind: String,
    /// Price in USD
    pub price: f64,
}

/// A single issue, collection or digital comic
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    /// Unique comic ID
    pub id: u32,

    /// Digital ID (0 when not available digitally)
    #[serde(default)]
    pub digital_id: u32,

    /// Canonical title
    #[serde(default)]
    pub title: String,

    /// Issue number within the series
    #[serde(default)]
    pub issue_number: f64,

    /// Variant description, if this is a variant
    #[serde(default)]
    pub variant_description: String,

    /// Preferred description
    #[serde(default)]
    pub description: Option<String>,

    /// Last modification date (ISO 8601)
    #[serde(default)]
    pub modified: Option<String>,

    /// ISBN
    #[serde(default)]
    pub isbn: String,

    /// UPC barcode
    #[serde(default)]
    pub upc: String,

    /// Diamond code
    #[serde(default)]
    pub diamond_code: String,

    /// EAN barcode
    #[serde(default)]
    pub ean: String,

    /// ISSN
    #[serde(default)]
    pub issn: String,

    /// Publication format ("Comic", "Trade Paperback", ...)
    #[serde(default)]
    pub format: String,

    /// Number of story pages
    #[serde(default)]
    pub page_count: u32,

    /// Descriptive texts
    #[serde(default)]
    pub text_objects: Vec<TextObject>,

    /// API path of this comic
    #[serde(default, rename = "resourceURI")]
    pub resource_uri: String,

    /// Public web pages
    #[serde(default)]
    pub urls: Vec<Url>,

    /// Parent series
    #[serde(default)]
    pub series: Option<Summary>,

    /// Variant issues
    #[serde(default)]
    pub variants: Vec<Summary>,

    /// Collections that include this issue
    #[serde(default)]
    pub collections: Vec<Summary>,

    /// Issues collected in this comic
    #[serde(default)]
    pub collected_issues: Vec<Summary>,

    /// Key dates
    #[serde(default)]
    pub dates: Vec<ComicDate>,

    /// Prices
    #[serde(default)]
    pub prices: Vec<ComicPrice>,

    /// Representative image
    #[serde(default)]
    pub thumbnail: Option<Image>,

    /// Promotional images
    #[serde(default)]
    pub images: Vec<Image>,

    /// Creators, with roles
    #[serde(default)]
    pub creators: ResourceList<RoleSummary>,

    /// Characters appearing
    #[serde(default)]
    pub characters: ResourceList<RoleSummary>,

    /// Stories inside
    #[serde(default)]
    pub stories: ResourceList<StorySummary>,

    /// Events the comic is part of
    #[serde(default)]
    pub events: ResourceList<Summary>,
}

impl Comic {
    /// Date of the given kind, e.g. `"onsaleDate"`
    pub fn date(&self, kind: &str) -> Option<&str> {
        self.dates
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.date.as_str())
    }

    /// Price of the given kind, e.g. `"printPrice"`
    pub fn price(&self, kind: &str) -> Option<f64> {
        self.prices.iter().find(|p| p.kind == kind).map(|p| p.price)
    }
}

impl Entity for Comic {
    const RESOURCE: Resource = Resource::Comic;
    type Params = ComicParams;
}
