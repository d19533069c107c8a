use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    decoding::inline::parse_first_text,
    operations::{
        FormatArgs, MutationError, TransactionSubmitter, build_set_format_op, build_set_title_op,
        submit,
    },
};

use super::block::Block;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub profile_photo: String,
}

impl User {
    pub fn display_name(&self) -> String {
        match (self.given_name.is_empty(), self.family_name.is_empty()) {
            (false, false) => format!("{} {}", self.given_name, self.family_name),
            (false, true) => self.given_name.clone(),
            (true, false) => self.family_name.clone(),
            (true, true) => self.email.clone(),
        }
    }
}

/// Schema and row storage of a table. Kept mostly raw; decoding the schema
/// is not this crate's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub id: String,
    pub parent_id: String,
    /// Rich-text name.
    pub name: Value,
    pub icon: String,
    pub schema: BTreeMap<String, Value>,
}

impl Collection {
    /// First run of the name, or `None` if it is missing or malformed.
    pub fn name_text(&self) -> Option<String> {
        parse_first_text(&self.name)
            .ok()
            .filter(|name| !name.is_empty())
    }
}

/// Presentation of a collection: view type, grouping, sort and row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionView {
    pub id: String,
    #[serde(rename = "type")]
    pub view_type: String,
    pub name: String,
    pub parent_id: String,
    pub format: Value,
    pub query: Value,
    /// Row block IDs in display order.
    pub page_sort: Vec<String>,
}

/// A collection view paired with its collection and decoded rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub collection_view: CollectionView,
    pub collection: Collection,
    pub data: Vec<Block>,
}

/// A page: the root block and what it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: String,
    pub root: Block,
    pub users: Vec<User>,
    pub tables: Vec<Table>,
}

impl Page {
    pub fn new(root: Block) -> Self {
        Self {
            id: root.id.clone(),
            root,
            users: Vec::new(),
            tables: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.root.title
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_block(&self, id: &str) -> Option<&Block> {
        self.root.walk().into_iter().find(|b| b.id == id)
    }

    /// Submits a title change for the root block.
    pub fn set_title(
        &self,
        submitter: &dyn TransactionSubmitter,
        title: &str,
    ) -> Result<(), MutationError> {
        let op = build_set_title_op(&self.root.id, title);
        submit(submitter, &[op])
    }

    /// Submits format changes for the root block. Only `page_full_width`
    /// and `page_small_text` (booleans) are accepted; anything else is
    /// rejected before submission.
    pub fn set_format(
        &self,
        submitter: &dyn TransactionSubmitter,
        args: BTreeMap<String, Value>,
    ) -> Result<(), MutationError> {
        let args = FormatArgs::new(args)?;
        let op = build_set_format_op(&self.root.id, &args);
        submit(submitter, &[op])
    }
}
