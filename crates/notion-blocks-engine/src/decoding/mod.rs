//! # Block Decoding
//!
//! Turns a raw block (type tag, property bag, format payload) into a typed
//! [`Block`](crate::models::block::Block).
//!
//! ## Modules
//!
//! - **`inline`**: rich-text runs to `InlineToken`s
//! - **`property`**: named property lookup reduced to a scalar string
//! - **`image_url`**: `ImageProxy` rewriting media sources into proxied URLs
//! - **`format`**: `decode_format()` dispatch from type tag to typed format
//! - **`resolve`**: `BlockDecoder` running the ordered decode steps
//! - **`error`**: `InlineError`, `FormatError`, `DecodeError`
//!
//! ## Failure Tiers
//!
//! - Missing property or format: not an error, field keeps its default
//! - Malformed non-critical property: ignored, field keeps its default
//! - Malformed title or format of a known type: `DecodeError` for that block only

pub mod error;
pub mod format;
pub mod image_url;
pub mod inline;
pub mod property;
pub mod resolve;

pub use error::{DecodeError, FormatError, InlineError};
pub use format::decode_format;
pub use image_url::{DEFAULT_ASSET_HOST, ImageProxy, make_image_url};
pub use property::{PropLookup, Properties, get_prop, lookup_prop};
pub use resolve::{BlockDecoder, decode_block};
