//! # Inline Runs
//!
//! Rich text arrives as an array of runs. Each run is a piece of text plus
//! an optional list of markers that apply to all of it:
//!
//! ```text
//! [["Read "], ["the docs", [["b"], ["a", "https://example.com"]]]]
//! ```
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken` and `Annotation`, plus the `first_text` reduction
//! - **`marker`**: tag constants and decoding of a single `[tag, arg?]` marker
//! - **`parser`**: `parse_inline_runs()` main entry point
//!
//! Scalar fields (titles, links, sources) only keep the first run's text.
//! Inline content keeps every run.

pub mod marker;
pub mod parser;
pub mod types;

pub use parser::{parse_first_text, parse_inline_runs};
pub use types::{Annotation, InlineToken, first_text, plain_text};
