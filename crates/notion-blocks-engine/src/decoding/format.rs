use serde::de::DeserializeOwned;

use crate::models::{
    block_type::BlockType,
    format::{
        BlockFormat, FormatBookmark, FormatColumn, FormatEmbed, FormatImage, FormatPage,
        FormatTable, FormatText, FormatVideo,
    },
};

use super::{
    error::{FormatError, bytes_snippet},
    image_url::ImageProxy,
};

/// Decodes a raw format payload into the variant selected by `block_type`.
///
/// - empty payload: `Ok(None)`, a new block has no format yet
/// - type without a format schema: `Ok(None)`
/// - payload not matching the schema: `Err`, with the type and a payload snippet
///
/// Page covers and image display sources are rewritten through `proxy`.
pub fn decode_format(
    block_type: &BlockType,
    raw: &[u8],
    proxy: &ImageProxy,
) -> Result<Option<BlockFormat>, FormatError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let decoded = match block_type {
        BlockType::Page => parse(raw).map(|mut f: FormatPage| {
            f.page_cover_url = proxy.make_image_url(&f.page_cover);
            BlockFormat::Page(f)
        }),
        BlockType::Image => parse(raw).map(|mut f: FormatImage| {
            f.image_url = proxy.make_image_url(&f.display_source);
            BlockFormat::Image(f)
        }),
        BlockType::Bookmark => parse::<FormatBookmark>(raw).map(BlockFormat::Bookmark),
        BlockType::Column => parse::<FormatColumn>(raw).map(BlockFormat::Column),
        BlockType::Table => parse::<FormatTable>(raw).map(BlockFormat::Table),
        BlockType::Text => parse::<FormatText>(raw).map(BlockFormat::Text),
        BlockType::Video => parse::<FormatVideo>(raw).map(BlockFormat::Video),
        BlockType::Embed => parse::<FormatEmbed>(raw).map(BlockFormat::Embed),
        _ => return Ok(None),
    };

    decoded.map(Some).map_err(|source| FormatError {
        block_type: block_type.to_string(),
        payload: bytes_snippet(raw),
        source,
    })
}

fn parse<T: DeserializeOwned>(raw: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(raw)
}
