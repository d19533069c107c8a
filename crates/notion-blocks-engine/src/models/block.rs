use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decoding::{inline::InlineToken, property::Properties};

use super::{
    block_type::BlockType,
    format::BlockFormat,
    lenient::{null_as_default, null_as_true},
};

/// A block as it comes from the document service, before decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
    #[serde(default)]
    pub format: Option<Value>,
    /// Some block types carry their source as a top-level field.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_table: String,
    #[serde(default = "default_alive", deserialize_with = "null_as_true")]
    pub alive: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_edited_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_ids: Vec<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
}

fn default_alive() -> bool {
    true
}

impl RawBlock {
    pub fn new(id: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: id.into(),
            block_type,
            properties: Properties::new(),
            format: None,
            source: None,
            content: Vec::new(),
            parent_id: String::new(),
            parent_table: String::new(),
            alive: true,
            version: 0,
            created_time: 0,
            last_edited_time: 0,
            created_by: String::new(),
            view_ids: Vec::new(),
            collection_id: None,
        }
    }

    /// The format payload as bytes; empty when there is none.
    pub fn format_bytes(&self) -> Vec<u8> {
        match &self.format {
            None | Some(Value::Null) => Vec::new(),
            Some(format) => format.to_string().into_bytes(),
        }
    }
}

/// A decoded block.
///
/// Raw inputs (`properties`, `format_raw`) are kept alongside the decoded
/// fields. Decoded fields are filled once by
/// [`BlockDecoder`](crate::decoding::BlockDecoder) and left alone after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub id: String,
    pub block_type: BlockType,
    #[serde(skip)]
    pub properties: Properties,
    #[serde(skip)]
    pub format_raw: Vec<u8>,

    pub parent_id: String,
    pub parent_table: String,
    pub alive: bool,
    pub version: u64,
    pub created_time: i64,
    pub last_edited_time: i64,
    pub created_by: String,
    /// Child block IDs in document order.
    pub content: Vec<String>,
    pub children: Vec<Block>,
    pub view_ids: Vec<String>,
    pub collection_id: Option<String>,

    /// Page title (page blocks only).
    pub title: String,
    /// Source text (code blocks only).
    pub code: String,
    pub code_language: String,
    pub description: String,
    pub link: String,
    pub source: String,
    /// `source` rewritten through the image proxy (image blocks only).
    pub image_url: String,
    pub file_size: String,
    pub is_checked: bool,
    pub inline_content: Vec<InlineToken>,
    pub format: Option<BlockFormat>,
}

impl Block {
    /// An undecoded block carrying the raw inputs and record metadata.
    pub fn from_raw(raw: &RawBlock) -> Self {
        Self {
            id: raw.id.clone(),
            block_type: raw.block_type.clone(),
            properties: raw.properties.clone(),
            format_raw: raw.format_bytes(),
            parent_id: raw.parent_id.clone(),
            parent_table: raw.parent_table.clone(),
            alive: raw.alive,
            version: raw.version,
            created_time: raw.created_time,
            last_edited_time: raw.last_edited_time,
            created_by: raw.created_by.clone(),
            content: raw.content.clone(),
            children: Vec::new(),
            view_ids: raw.view_ids.clone(),
            collection_id: raw.collection_id.clone(),
            title: String::new(),
            code: String::new(),
            code_language: String::new(),
            description: String::new(),
            link: String::new(),
            source: raw.source.clone().unwrap_or_default(),
            image_url: String::new(),
            file_size: String::new(),
            is_checked: false,
            inline_content: Vec::new(),
            format: None,
        }
    }

    pub fn is_image(&self) -> bool {
        self.block_type.is_image()
    }

    pub fn is_page(&self) -> bool {
        self.block_type == BlockType::Page
    }

    /// Depth-first walk over this block and its decoded descendants.
    pub fn walk(&self) -> Vec<&Block> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}
