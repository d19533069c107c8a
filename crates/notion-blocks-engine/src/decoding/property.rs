use std::collections::BTreeMap;

use serde_json::Value;

use super::{error::InlineError, inline::parse_first_text};

/// Property bag of a block: property name to its rich-text value.
pub type Properties = BTreeMap<String, Value>;

pub const TITLE: &str = "title";
pub const CHECKED: &str = "checked";
pub const DESCRIPTION: &str = "description";
pub const LINK: &str = "link";
pub const SOURCE: &str = "source";
pub const LANGUAGE: &str = "language";
pub const SIZE: &str = "size";

/// Outcome of looking up a scalar property.
///
/// `Missing` is the normal case for block types that do not carry the
/// property. `Malformed` means it was there but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropLookup {
    Missing,
    Malformed(InlineError),
    Found(String),
}

impl PropLookup {
    pub fn found(self) -> Option<String> {
        match self {
            PropLookup::Found(value) => Some(value),
            PropLookup::Missing | PropLookup::Malformed(_) => None,
        }
    }
}

/// Looks up `name` and reduces it to the first run's text.
pub fn lookup_prop(props: &Properties, name: &str) -> PropLookup {
    let Some(value) = props.get(name) else {
        return PropLookup::Missing;
    };
    match parse_first_text(value) {
        Ok(text) => PropLookup::Found(text),
        Err(err) => PropLookup::Malformed(err),
    }
}

/// Like [`lookup_prop`], treating a malformed property as absent.
pub fn get_prop(props: &Properties, name: &str) -> Option<String> {
    match lookup_prop(props, name) {
        PropLookup::Malformed(err) => {
            log::debug!("ignoring malformed '{name}' property: {err}");
            None
        }
        other => other.found(),
    }
}

/// Overwrites `target` only when the property is present and readable.
pub fn set_prop(props: &Properties, name: &str, target: &mut String) -> bool {
    match get_prop(props, name) {
        Some(value) => {
            *target = value;
            true
        }
        None => false,
    }
}
