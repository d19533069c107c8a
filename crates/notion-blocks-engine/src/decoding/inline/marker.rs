use serde_json::Value;

use crate::decoding::error::{InlineError, value_snippet};

use super::types::Annotation;

pub const BOLD: &str = "b";
pub const ITALIC: &str = "i";
pub const STRIKE: &str = "s";
pub const CODE: &str = "c";
pub const UNDERLINE: &str = "_";
pub const LINK: &str = "a";
pub const USER: &str = "u";
pub const PAGE: &str = "p";
pub const DATE: &str = "d";
pub const HIGHLIGHT: &str = "h";
pub const COMMENT: &str = "m";
pub const EQUATION: &str = "e";

/// Decodes one `[tag, arg?]` marker.
pub fn parse_marker(marker: &Value) -> Result<Annotation, InlineError> {
    let parts = match marker.as_array() {
        Some(parts) if !parts.is_empty() => parts,
        _ => return Err(InlineError::MalformedAnnotations(value_snippet(marker))),
    };
    let Some(tag) = parts[0].as_str() else {
        return Err(InlineError::MalformedAnnotations(value_snippet(marker)));
    };
    let arg = parts.get(1);

    let annotation = match tag {
        BOLD => Annotation::Bold,
        ITALIC => Annotation::Italic,
        STRIKE => Annotation::Strikethrough,
        CODE => Annotation::Code,
        UNDERLINE => Annotation::Underline,
        LINK => Annotation::Link(string_arg(tag, arg)?),
        USER => Annotation::User(string_arg(tag, arg)?),
        PAGE => Annotation::Page(string_arg(tag, arg)?),
        HIGHLIGHT => Annotation::Highlight(string_arg(tag, arg)?),
        COMMENT => Annotation::Comment(string_arg(tag, arg)?),
        EQUATION => Annotation::Equation(string_arg(tag, arg)?),
        DATE => match arg {
            Some(date @ Value::Object(_)) => Annotation::Date(date.clone()),
            other => return Err(invalid_arg(tag, other)),
        },
        _ => Annotation::Other {
            tag: tag.to_string(),
            arg: arg.cloned(),
        },
    };
    Ok(annotation)
}

fn string_arg(tag: &str, arg: Option<&Value>) -> Result<String, InlineError> {
    match arg {
        Some(Value::String(s)) => Ok(s.clone()),
        other => Err(invalid_arg(tag, other)),
    }
}

fn invalid_arg(tag: &str, arg: Option<&Value>) -> InlineError {
    InlineError::InvalidAnnotationArg {
        tag: tag.to_string(),
        value: arg.map(value_snippet).unwrap_or_else(|| "<missing>".to_string()),
    }
}
