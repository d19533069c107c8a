//! Page assembly from a record map.
//!
//! A record map is the flat `{ block, notion_user, collection,
//! collection_view }` structure returned when a page is loaded. Each table
//! maps an ID to `{ "value": ... }`.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{
    decoding::{BlockDecoder, DecodeError},
    ids::normalize_id,
    models::{
        Block, BlockType, Collection, CollectionView, Page, RawBlock, Table, User,
        lenient::{null_as_default, skip_unreadable},
    },
};

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Record<T> {
    #[serde(default)]
    pub role: Option<String>,
    /// Missing when the record is not accessible, or unreadable.
    #[serde(default, deserialize_with = "skip_unreadable")]
    pub value: Option<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordMap {
    #[serde(deserialize_with = "null_as_default")]
    pub block: BTreeMap<String, Record<RawBlock>>,
    #[serde(deserialize_with = "null_as_default")]
    pub notion_user: BTreeMap<String, Record<User>>,
    #[serde(deserialize_with = "null_as_default")]
    pub collection: BTreeMap<String, Record<Collection>>,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_view: BTreeMap<String, Record<CollectionView>>,
}

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("page {0} is not in the record map")]
    MissingRoot(String),
    #[error("record map has no top-level page")]
    NoPage,
    #[error("failed to decode root block: {0}")]
    Root(#[source] DecodeError),
    #[error("invalid record map: {0}")]
    Json(#[from] serde_json::Error),
}

/// A decoded page plus the blocks that failed and were left out of it.
#[derive(Debug)]
pub struct DecodedPage {
    pub page: Page,
    pub failures: Vec<DecodeError>,
}

impl RecordMap {
    pub fn from_json(bytes: &[u8]) -> Result<Self, TreeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn get_block(&self, id: &str) -> Option<&RawBlock> {
        lookup(&self.block, id)
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        lookup(&self.notion_user, id)
    }

    pub fn get_collection(&self, id: &str) -> Option<&Collection> {
        lookup(&self.collection, id)
    }

    pub fn get_collection_view(&self, id: &str) -> Option<&CollectionView> {
        lookup(&self.collection_view, id)
    }

    /// ID of the first page block that is not nested in another block.
    pub fn root_page_id(&self) -> Option<&str> {
        self.block
            .values()
            .filter_map(|r| r.value.as_ref())
            .find(|b| b.block_type == BlockType::Page && b.parent_table != "block")
            .map(|b| b.id.as_str())
    }

    pub fn decode_root_page(&self, decoder: &BlockDecoder) -> Result<DecodedPage, TreeError> {
        let id = self.root_page_id().ok_or(TreeError::NoPage)?;
        self.decode_page(id, decoder)
    }

    /// Decodes the page `page_id` and every block reachable from it.
    ///
    /// A block that fails to decode is dropped, together with its subtree,
    /// and its error lands in [`DecodedPage::failures`]. Only the root is
    /// fatal. Child pages are decoded but not descended into.
    pub fn decode_page(
        &self,
        page_id: &str,
        decoder: &BlockDecoder,
    ) -> Result<DecodedPage, TreeError> {
        let raw = self
            .get_block(page_id)
            .ok_or_else(|| TreeError::MissingRoot(page_id.to_string()))?;
        let mut root = decoder.decode(raw).map_err(TreeError::Root)?;

        let mut failures = Vec::new();
        let mut visited = HashSet::from([root.id.clone()]);
        self.attach_children(&mut root, decoder, &mut visited, &mut failures);

        let tables = self.tables_for(&root, decoder, &mut failures);
        let users = self
            .notion_user
            .values()
            .filter_map(|r| r.value.clone())
            .collect();

        Ok(DecodedPage {
            page: Page {
                id: root.id.clone(),
                root,
                users,
                tables,
            },
            failures,
        })
    }

    fn attach_children(
        &self,
        parent: &mut Block,
        decoder: &BlockDecoder,
        visited: &mut HashSet<String>,
        failures: &mut Vec<DecodeError>,
    ) {
        for child_id in parent.content.clone() {
            let Some(raw) = self.get_block(&child_id) else {
                log::debug!("block {}: child {child_id} not in record map", parent.id);
                continue;
            };
            if !visited.insert(raw.id.clone()) {
                log::debug!("block {}: child {child_id} already visited", parent.id);
                continue;
            }
            match decoder.decode(raw) {
                Ok(mut child) => {
                    if !child.is_page() {
                        self.attach_children(&mut child, decoder, visited, failures);
                    }
                    parent.children.push(child);
                }
                Err(err) => failures.push(err),
            }
        }
    }

    fn tables_for(
        &self,
        root: &Block,
        decoder: &BlockDecoder,
        failures: &mut Vec<DecodeError>,
    ) -> Vec<Table> {
        let mut tables = Vec::new();
        for block in root.walk() {
            if !block.block_type.is_collection() {
                continue;
            }
            let Some(collection) = block
                .collection_id
                .as_deref()
                .and_then(|id| self.get_collection(id))
            else {
                log::debug!("block {}: collection not in record map", block.id);
                continue;
            };
            for view_id in &block.view_ids {
                let Some(view) = self.get_collection_view(view_id) else {
                    log::debug!("block {}: view {view_id} not in record map", block.id);
                    continue;
                };
                let data = view
                    .page_sort
                    .iter()
                    .filter_map(|row_id| self.get_block(row_id))
                    .filter_map(|raw| match decoder.decode(raw) {
                        Ok(row) => Some(row),
                        Err(err) => {
                            failures.push(err);
                            None
                        }
                    })
                    .collect();
                tables.push(Table {
                    collection_view: view.clone(),
                    collection: collection.clone(),
                    data,
                });
            }
        }
        tables
    }
}

fn lookup<'a, T>(table: &'a BTreeMap<String, Record<T>>, id: &str) -> Option<&'a T> {
    let record = match table.get(id) {
        Some(record) => record,
        None => table.get(&normalize_id(id)?)?,
    };
    record.value.as_ref()
}
