//! Shared helpers for unit tests.

use serde_json::{Value, json};

use crate::models::block::RawBlock;

/// A raw block with the given type tag and property bag.
pub fn raw_block(id: &str, block_type: &str, properties: Value) -> RawBlock {
    serde_json::from_value(json!({
        "id": id,
        "type": block_type,
        "properties": properties,
    }))
    .expect("test block should deserialize")
}

/// A `{"value": ...}` record wrapper as found in record maps.
pub fn record(value: Value) -> Value {
    json!({ "role": "reader", "value": value })
}
