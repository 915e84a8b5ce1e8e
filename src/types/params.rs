//! Filter parameters for list endpoints.
//!
//! One struct per entity kind, used both for top-level listings
//! (`comics`) and related listings (`characters/{id}/comics`). Fields
//! serialize in declaration order under their upstream camelCase names;
//! unset fields are omitted.
//!
//! ```rust
//! use marvel_api::client::query::QueryParams;
//! use marvel_api::types::CharacterParams;
//!
//! let params = CharacterParams {
//!     name_starts_with: Some("spider".into()),
//!     comics: Some(vec![1, 2, 3]),
//!     order_by: Some("name".into()),
//!     ..Default::default()
//! };
//! let query = QueryParams::from_serializable(&params).unwrap();
//! assert_eq!(query.to_query_string(), "nameStartsWith=spider&comics=1,2,3&orderBy=name");
//! ```

use serde::Serialize;

/// Character filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterParams {
    /// Exact name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_starts_with: Option<String>,
    /// Modified on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<String>,
    /// Appearing in these comics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comics: Option<Vec<u32>>,
    /// Appearing in these series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<u32>>,
    /// Appearing in these events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u32>>,
    /// Appearing in these stories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<u32>>,
    /// Sort order: `name`, `modified`, `-name`, `-modified`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Page size (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Comic filters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicParams {
    /// Publication format ("comic", "hardcover", "trade paperback", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// "comic" or "collection"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_type: Option<String>,
    /// Exclude variant covers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_variants: Option<bool>,
    /// "lastWeek", "thisWeek", "nextWeek" or "thisMonth"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_descriptor: Option<String>,
    /// Two dates bounding the on-sale date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<Vec<String>>,
    /// Exact title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_starts_with: Option<String>,
    /// Series start year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    /// Issue number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<f64>,
    /// Diamond code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diamond_code: Option<String>,
    /// Digital ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_id: Option<u32>,
    /// UPC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// ISBN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// EAN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    /// ISSN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    /// Only comics available digitally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_digital_issue: Option<bool>,
    /// Modified on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<String>,
    /// Featuring work by these creators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<u32>>,
    /// Featuring these characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<u32>>,
    /// Part of these series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<u32>>,
    /// Part of these events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u32>>,
    /// Containing these stories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<u32>>,
    /// Featuring all of these characters together
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_appearances: Option<Vec<u32>>,
    /// Featuring all of these creators together
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<Vec<u32>>,
    /// Sort order: `focDate`, `onsaleDate`, `title`, `issueNumber`, `modified` (prefix `-` to reverse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Page size (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Creator filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorParams {
    /// Exact first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Exact middle name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Exact last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Exact suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Full name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_starts_with: Option<String>,
    /// First name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_starts_with: Option<String>,
    /// Middle name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name_starts_with: Option<String>,
    /// Last name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_starts_with: Option<String>,
    /// Modified on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<String>,
    /// Worked on these comics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comics: Option<Vec<u32>>,
    /// Worked on these series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<u32>>,
    /// Worked on these events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u32>>,
    /// Worked on these stories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<u32>>,
    /// Sort order: `lastName`, `firstName`, `middleName`, `suffix`, `modified`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Page size (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Event filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParams {
    /// Exact name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_starts_with: Option<String>,
    /// Modified on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<String>,
    /// Featuring work by these creators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<u32>>,
    /// Featuring these characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<u32>>,
    /// Including these series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<u32>>,
    /// Including these comics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comics: Option<Vec<u32>>,
    /// Including these stories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<u32>>,
    /// Sort order: `name`, `startDate`, `modified` (prefix `-` to reverse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Page size (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Series filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesParams {
    /// Exact title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_starts_with: Option<String>,
    /// Start year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    /// Modified on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<String>,
    /// Containing these comics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comics: Option<Vec<u32>>,
    /// Containing these stories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<u32>>,
    /// Part of these events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u32>>,
    /// Featuring work by these creators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<u32>>,
    /// Featuring these characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<u32>>,
    /// "collection", "one shot", "limited" or "ongoing"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_type: Option<String>,
    /// Formats the series must contain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Vec<String>>,
    /// Sort order: `title`, `modified`, `startYear` (prefix `-` to reverse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Page size (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Story filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryParams {
    /// Modified on or after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<String>,
    /// Appearing in these comics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comics: Option<Vec<u32>>,
    /// Appearing in these series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<u32>>,
    /// Part of these events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u32>>,
    /// By these creators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<u32>>,
    /// Featuring these characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<u32>>,
    /// Sort order: `id`, `modified` (prefix `-` to reverse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Page size (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}
