//! Wire shapes of the API's response envelopes.

use contentful_types::{DecodingError, ItemResult, SysData};
use serde::Deserialize;
use serde_json::Value;

/// `{total, skip, limit, items: [...]}`. Items stay raw so each one can fail
/// on its own.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    pub items: Vec<Value>,
}

/// Reads `id` and `version` out of an entry's `sys` block.
pub(crate) fn parse_sys(entry: &Value) -> ItemResult<SysData> {
    let sys = entry
        .get("sys")
        .ok_or_else(|| DecodingError::MalformedEntry("missing sys block".to_string()))?;
    SysData::deserialize(sys)
        .map_err(|e| DecodingError::MalformedEntry(format!("invalid sys block: {e}")))
}
