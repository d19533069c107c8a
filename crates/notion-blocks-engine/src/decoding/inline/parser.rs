use serde_json::Value;

use crate::decoding::error::{InlineError, value_snippet};

use super::{
    marker::parse_marker,
    types::{InlineToken, first_text},
};

/// Parses a rich-text value into a sequence of [`InlineToken`]s.
///
/// The encoding is an array of runs, each run being `[text]` or
/// `[text, [[tag, arg?], ...]]`. `null` and `[]` are "no content" and
/// yield an empty sequence. Anything else that does not follow the shape
/// is an [`InlineError`]; whether that is fatal is up to the caller.
pub fn parse_inline_runs(value: &Value) -> Result<Vec<InlineToken>, InlineError> {
    let runs = match value {
        Value::Null => return Ok(vec![]),
        Value::Array(runs) => runs,
        other => return Err(InlineError::NotAnArray(value_snippet(other))),
    };
    runs.iter().map(parse_run).collect()
}

/// Parses a rich-text value and keeps only the first run's text.
pub fn parse_first_text(value: &Value) -> Result<String, InlineError> {
    let tokens = parse_inline_runs(value)?;
    Ok(first_text(&tokens).to_string())
}

fn parse_run(run: &Value) -> Result<InlineToken, InlineError> {
    let parts = match run.as_array() {
        Some(parts) if !parts.is_empty() => parts,
        _ => return Err(InlineError::MalformedRun(value_snippet(run))),
    };
    let Some(text) = parts[0].as_str() else {
        return Err(InlineError::TextNotString(value_snippet(&parts[0])));
    };

    let annotations = match parts.get(1) {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(markers)) => markers
            .iter()
            .map(parse_marker)
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => return Err(InlineError::MalformedAnnotations(value_snippet(other))),
    };

    Ok(InlineToken {
        text: text.to_string(),
        annotations,
    })
}
