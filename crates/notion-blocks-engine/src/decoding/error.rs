use thiserror::Error;

/// Longest snippet of an offending payload carried inside an error.
const SNIPPET_LEN: usize = 120;

/// A rich-text value that does not follow the `[[text, [[tag, arg?], ...]?], ...]` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    #[error("rich text must be an array of runs, got {0}")]
    NotAnArray(String),
    #[error("rich text run must be a non-empty array, got {0}")]
    MalformedRun(String),
    #[error("rich text run must start with a string, got {0}")]
    TextNotString(String),
    #[error("annotations must be an array of [tag, arg?] markers, got {0}")]
    MalformedAnnotations(String),
    #[error("annotation '{tag}' has an invalid argument: {value}")]
    InvalidAnnotationArg { tag: String, value: String },
}

/// A format payload that does not match the schema selected by its block type.
#[derive(Debug, Error)]
#[error("failed to decode '{block_type}' format: {source} (payload: {payload})")]
pub struct FormatError {
    pub block_type: String,
    pub payload: String,
    #[source]
    pub source: serde_json::Error,
}

/// Hard failure while decoding a single block. Sibling blocks are unaffected.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("block {block_id} ({block_type}): property '{property}' is malformed: {source}")]
    Property {
        block_id: String,
        block_type: String,
        property: String,
        #[source]
        source: InlineError,
    },
    #[error("block {block_id}: {source}")]
    Format {
        block_id: String,
        #[source]
        source: FormatError,
    },
}

impl DecodeError {
    pub fn block_id(&self) -> &str {
        match self {
            DecodeError::Property { block_id, .. } | DecodeError::Format { block_id, .. } => {
                block_id
            }
        }
    }
}

/// Compact JSON rendering of a value for error messages.
pub(crate) fn value_snippet(value: &serde_json::Value) -> String {
    truncate(value.to_string())
}

/// Lossy UTF-8 rendering of a raw payload for error messages.
pub(crate) fn bytes_snippet(raw: &[u8]) -> String {
    truncate(String::from_utf8_lossy(raw).into_owned())
}

fn truncate(mut s: String) -> String {
    if s.len() > SNIPPET_LEN {
        let mut end = SNIPPET_LEN;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
        s.push('…');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_snippets_are_kept_whole() {
        assert_eq!(value_snippet(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(bytes_snippet(b"{\"x\":1}"), "{\"x\":1}");
    }

    #[test]
    fn long_snippets_are_truncated_on_a_char_boundary() {
        let long = "é".repeat(200);
        let snip = bytes_snippet(long.as_bytes());
        assert!(snip.ends_with('…'));
        assert!(snip.len() <= SNIPPET_LEN + '…'.len_utf8());
    }

    #[test]
    fn decode_error_reports_block_id() {
        let err = DecodeError::Property {
            block_id: "abc".into(),
            block_type: "text".into(),
            property: "title".into(),
            source: InlineError::NotAnArray("1".into()),
        };
        assert_eq!(err.block_id(), "abc");
        assert!(err.to_string().contains("'title'"));
    }
}
