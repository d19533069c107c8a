use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Type tag of a block.
///
/// Unknown tags are preserved in [`BlockType::Other`] so a newer document
/// still decodes; they simply get no typed format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    Page,
    Text,
    Bookmark,
    BulletedList,
    NumberedList,
    Toggle,
    #[strum(serialize = "to_do")]
    Todo,
    Divider,
    Image,
    Header,
    SubHeader,
    SubSubHeader,
    Quote,
    Comment,
    Code,
    ColumnList,
    Column,
    Table,
    CollectionView,
    CollectionViewPage,
    Video,
    File,
    Pdf,
    Gist,
    Tweet,
    Embed,
    Callout,
    Audio,
    Drive,
    Figma,
    Maps,
    Codepen,
    Equation,
    Breadcrumb,
    Factory,
    TableOfContents,
    #[strum(default)]
    Other(String),
}

impl BlockType {
    pub fn from_tag(tag: &str) -> Self {
        tag.parse()
            .unwrap_or_else(|_| BlockType::Other(tag.to_string()))
    }

    /// The wire tag, e.g. `to_do`.
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Other(tag) => tag,
            known => known.as_ref(),
        }
    }

    /// Blocks whose `source` is an image that should go through the proxy.
    pub fn is_image(&self) -> bool {
        matches!(self, BlockType::Image)
    }

    /// Blocks that hold a collection (table) rather than plain children.
    pub fn is_collection(&self) -> bool {
        matches!(self, BlockType::CollectionView | BlockType::CollectionViewPage)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        BlockType::from_tag(&tag)
    }
}

impl From<BlockType> for String {
    fn from(block_type: BlockType) -> Self {
        block_type.as_str().to_string()
    }
}
