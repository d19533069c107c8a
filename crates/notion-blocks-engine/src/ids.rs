use uuid::Uuid;

/// Dashed lowercase form of a block/page ID, accepting dashed or undashed input.
///
/// `0367c2db381a4f8b9ce360f388a6b2e3` => `0367c2db-381a-4f8b-9ce3-60f388a6b2e3`
pub fn normalize_id(id: &str) -> Option<String> {
    Uuid::try_parse(id.trim())
        .ok()
        .map(|uuid| uuid.hyphenated().to_string())
}

pub fn is_valid_id(id: &str) -> bool {
    normalize_id(id).is_some()
}
