//! Mutation requests for a page.
//!
//! Operations are built and validated here but executed by whatever
//! implements [`TransactionSubmitter`].

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Value, json};
use strum::{AsRefStr, EnumString};
use thiserror::Error;

const BLOCK_TABLE: &str = "block";
const CMD_SET: &str = "set";
const CMD_UPDATE: &str = "update";

/// A single write against a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub id: String,
    pub table: String,
    pub path: Vec<String>,
    pub command: String,
    pub args: Value,
}

/// Page format keys that may be changed through [`build_set_format_op`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PageFormatKey {
    PageFullWidth,
    PageSmallText,
}

/// Validated `key -> value` changes to a page's format.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatArgs(BTreeMap<String, Value>);

impl FormatArgs {
    /// Rejects an empty map, keys outside [`PageFormatKey`] and non-boolean values.
    pub fn new(args: BTreeMap<String, Value>) -> Result<Self, MutationError> {
        if args.is_empty() {
            return Err(MutationError::EmptyFormat);
        }
        for (key, value) in &args {
            if PageFormatKey::from_str(key).is_err() {
                return Err(MutationError::UnknownFormatKey(key.clone()));
            }
            if !value.is_boolean() {
                return Err(MutationError::InvalidFormatValue {
                    key: key.clone(),
                    value: value.to_string(),
                });
            }
        }
        Ok(Self(args))
    }

    pub fn set(key: PageFormatKey, value: bool) -> Self {
        Self(BTreeMap::from([(key.as_ref().to_string(), Value::Bool(value))]))
    }

    pub fn with(mut self, key: PageFormatKey, value: bool) -> Self {
        self.0.insert(key.as_ref().to_string(), Value::Bool(value));
        self
    }

    pub fn get(&self, key: PageFormatKey) -> Option<bool> {
        self.0.get(key.as_ref()).and_then(Value::as_bool)
    }
}

#[derive(Debug, Error)]
pub enum MutationError {
    #[error("format arguments can't be empty")]
    EmptyFormat,
    #[error("'{0}' is not a valid page format property")]
    UnknownFormatKey(String),
    #[error("page format property '{key}' expects a boolean, got {value}")]
    InvalidFormatValue { key: String, value: String },
    #[error("failed to submit transaction: {0}")]
    Submit(#[source] anyhow::Error),
}

/// Executes a list of operations as one transaction.
pub trait TransactionSubmitter {
    fn submit_transaction(&self, ops: &[Operation]) -> anyhow::Result<()>;
}

/// Sets a block's title to a single plain run.
pub fn build_set_title_op(id: &str, title: &str) -> Operation {
    Operation {
        id: id.to_string(),
        table: BLOCK_TABLE.to_string(),
        path: vec!["properties".to_string(), "title".to_string()],
        command: CMD_SET.to_string(),
        args: json!([[title]]),
    }
}

/// Merges `args` into a block's format.
pub fn build_set_format_op(id: &str, args: &FormatArgs) -> Operation {
    Operation {
        id: id.to_string(),
        table: BLOCK_TABLE.to_string(),
        path: vec!["format".to_string()],
        command: CMD_UPDATE.to_string(),
        args: Value::Object(args.0.clone().into_iter().collect()),
    }
}

pub(crate) fn submit(
    submitter: &dyn TransactionSubmitter,
    ops: &[Operation],
) -> Result<(), MutationError> {
    log::debug!("submitting {} operation(s)", ops.len());
    submitter
        .submit_transaction(ops)
        .map_err(MutationError::Submit)
}
