use crate::models::{
    block::{Block, RawBlock},
    block_type::BlockType,
};

use super::{
    error::DecodeError,
    format::decode_format,
    image_url::ImageProxy,
    inline::{parse_first_text, parse_inline_runs},
    property::{
        CHECKED, DESCRIPTION, LANGUAGE, LINK, PropLookup, SIZE, SOURCE, TITLE, get_prop,
        lookup_prop, set_prop,
    },
};

/// Turns raw blocks into decoded [`Block`]s.
///
/// Decoding is pure: it reads only the block's own inputs and writes only
/// its own fields, so blocks can be decoded in any order or in parallel.
#[derive(Debug, Clone, Default)]
pub struct BlockDecoder {
    proxy: ImageProxy,
}

impl BlockDecoder {
    pub fn new(proxy: ImageProxy) -> Self {
        Self { proxy }
    }

    pub fn proxy(&self) -> &ImageProxy {
        &self.proxy
    }

    pub fn decode(&self, raw: &RawBlock) -> Result<Block, DecodeError> {
        let mut block = Block::from_raw(raw);
        self.resolve(&mut block)?;
        Ok(block)
    }

    /// Fills the decoded fields of `block` from its properties and format.
    ///
    /// Steps run in a fixed order. Title and format failures abort; every
    /// other property falls back to its default when missing or malformed.
    pub fn resolve(&self, block: &mut Block) -> Result<(), DecodeError> {
        resolve_title(block)?;
        resolve_checked(block);
        self.resolve_links(block);
        resolve_code_and_file(block);
        self.resolve_format(block)
    }

    fn resolve_links(&self, block: &mut Block) {
        set_prop(&block.properties, DESCRIPTION, &mut block.description);
        set_prop(&block.properties, LINK, &mut block.link);

        if let Some(source) = merge_source(&block.source, get_prop(&block.properties, SOURCE)) {
            block.source = source;
        }

        if !block.source.is_empty() && block.is_image() {
            block.image_url = self.proxy.make_image_url(&block.source);
        }
    }

    fn resolve_format(&self, block: &mut Block) -> Result<(), DecodeError> {
        let format = decode_format(&block.block_type, &block.format_raw, &self.proxy).map_err(
            |source| DecodeError::Format {
                block_id: block.id.clone(),
                source,
            },
        )?;
        block.format = format;
        Ok(())
    }
}

/// Decodes `raw` with the default image proxy.
pub fn decode_block(raw: &RawBlock) -> Result<Block, DecodeError> {
    BlockDecoder::default().decode(raw)
}

fn resolve_title(block: &mut Block) -> Result<(), DecodeError> {
    let Some(title) = block.properties.get(TITLE) else {
        return Ok(());
    };

    let result = match block.block_type {
        BlockType::Page => parse_first_text(title).map(|text| block.title = text),
        BlockType::Code => parse_first_text(title).map(|text| block.code = text),
        _ => parse_inline_runs(title).map(|tokens| block.inline_content = tokens),
    };

    result.map_err(|source| DecodeError::Property {
        block_id: block.id.clone(),
        block_type: block.block_type.to_string(),
        property: TITLE.to_string(),
        source,
    })
}

fn resolve_checked(block: &mut Block) {
    if block.block_type != BlockType::Todo {
        return;
    }
    block.is_checked = match lookup_prop(&block.properties, CHECKED) {
        PropLookup::Found(value) => value.eq_ignore_ascii_case("Yes"),
        PropLookup::Malformed(err) => {
            log::debug!("block {}: unreadable checked state: {err}", block.id);
            false
        }
        PropLookup::Missing => false,
    };
}

fn resolve_code_and_file(block: &mut Block) {
    set_prop(&block.properties, LANGUAGE, &mut block.code_language);
    if block.block_type == BlockType::File {
        set_prop(&block.properties, SIZE, &mut block.file_size);
    }
}

/// A `source` from the structured record beats the generic property;
/// the property only fills an empty one.
fn merge_source(structured: &str, generic: Option<String>) -> Option<String> {
    if structured.is_empty() { generic } else { None }
}
