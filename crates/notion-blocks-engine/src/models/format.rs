//! Typed format payloads, one struct per block type that has one.
//!
//! Every field is optional on the wire; a missing field takes its default.
//! A `null` field takes its default too. A field with the wrong JSON type
//! is a decode error.

use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatPage {
    #[serde(deserialize_with = "null_as_default")]
    pub page_full_width: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub page_small_text: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub page_cover_position: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_locked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_locked_by: String,
    /// Cover image as stored, often a path relative to the host.
    #[serde(deserialize_with = "null_as_default")]
    pub page_cover: String,
    #[serde(deserialize_with = "null_as_default")]
    pub page_icon: String,
    /// `page_cover` rewritten through the image proxy.
    #[serde(skip_deserializing)]
    pub page_cover_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatBookmark {
    #[serde(deserialize_with = "null_as_default")]
    pub block_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bookmark_icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bookmark_cover: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatImage {
    #[serde(deserialize_with = "null_as_default")]
    pub block_aspect_ratio: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_full_width: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_page_width: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_preserve_scale: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub display_source: String,
    /// `display_source` rewritten through the image proxy.
    #[serde(skip_deserializing)]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatColumn {
    #[serde(deserialize_with = "null_as_default")]
    pub column_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableProperty {
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub visible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub property: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatTable {
    #[serde(deserialize_with = "null_as_default")]
    pub table_wrap: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub table_properties: Vec<TableProperty>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatText {
    #[serde(deserialize_with = "null_as_default")]
    pub block_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatVideo {
    #[serde(deserialize_with = "null_as_default")]
    pub block_width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub display_source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub block_full_width: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_page_width: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_aspect_ratio: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_preserve_scale: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatEmbed {
    #[serde(deserialize_with = "null_as_default")]
    pub block_full_width: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_page_width: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub block_preserve_scale: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub display_source: String,
}

/// The decoded format of a block. At most one per block, chosen by its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockFormat {
    Page(FormatPage),
    Bookmark(FormatBookmark),
    Image(FormatImage),
    Column(FormatColumn),
    Table(FormatTable),
    Text(FormatText),
    Video(FormatVideo),
    Embed(FormatEmbed),
}

impl BlockFormat {
    pub fn as_page(&self) -> Option<&FormatPage> {
        match self {
            BlockFormat::Page(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&FormatImage> {
        match self {
            BlockFormat::Image(f) => Some(f),
            _ => None,
        }
    }
}
