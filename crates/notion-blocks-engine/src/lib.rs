//! Decoding of document block trees into typed Rust values.
//!
//! The entry points are [`BlockDecoder`] for single blocks and
//! [`RecordMap::decode_page`] for a whole page.

pub mod decoding;
pub mod ids;
pub mod models;
pub mod operations;
pub mod record_map;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use decoding::{
    BlockDecoder, DecodeError, FormatError, ImageProxy, InlineError, PropLookup, decode_block,
    decode_format, inline::{Annotation, InlineToken}, make_image_url,
};
pub use ids::{is_valid_id, normalize_id};
pub use models::*;
pub use operations::{
    FormatArgs, MutationError, Operation, PageFormatKey, TransactionSubmitter,
    build_set_format_op, build_set_title_op,
};
pub use record_map::{DecodedPage, RecordMap, TreeError};
