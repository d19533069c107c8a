use serde::Serialize;
use serde_json::Value;

/// A formatting or reference marker attached to an inline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Annotation {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Underline,
    /// Hyperlink target URL.
    Link(String),
    /// Mention of a user by ID.
    User(String),
    /// Mention of another page by ID.
    Page(String),
    /// Date mention. The object shape varies (date, datetime, ranges, reminders)
    /// so it is kept as-is.
    Date(Value),
    /// Text or background color name, e.g. `red` or `blue_background`.
    Highlight(String),
    /// Discussion ID of a comment anchored on this run.
    Comment(String),
    /// Inline equation source.
    Equation(String),
    /// A marker this decoder does not know about, kept verbatim.
    Other { tag: String, arg: Option<Value> },
}

/// One run of rich text: plain text plus the markers that apply to all of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineToken {
    pub text: String,
    pub annotations: Vec<Annotation>,
}

impl InlineToken {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    pub fn has(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }

    pub fn is_bold(&self) -> bool {
        self.has(&Annotation::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.has(&Annotation::Italic)
    }

    pub fn is_code(&self) -> bool {
        self.has(&Annotation::Code)
    }

    pub fn link(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::Link(url) => Some(url.as_str()),
            _ => None,
        })
    }

    pub fn user_mention(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::User(id) => Some(id.as_str()),
            _ => None,
        })
    }

    pub fn page_mention(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::Page(id) => Some(id.as_str()),
            _ => None,
        })
    }
}

/// Text of the first run, or `""` when there are no runs.
///
/// Scalar fields only keep this; trailing runs are dropped.
pub fn first_text(tokens: &[InlineToken]) -> &str {
    tokens.first().map(|t| t.text.as_str()).unwrap_or("")
}

/// All runs concatenated, formatting discarded.
pub fn plain_text(tokens: &[InlineToken]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
