//! Single-entry decoding.

use crate::fields::unbox_entry;
use contentful_types::{
    DecodingError, FieldMapping, ItemResult, LocaleSet, Readable, UnboxedFields,
};
use serde_json::Value;

/// Decodes a single-entry envelope and builds `T` from its fields.
///
/// Every failure, including unreadable JSON, comes back as the error variant
/// so the caller can inspect it.
pub fn decode_item<T, F>(
    data: &[u8],
    locale: Option<&LocaleSet>,
    mapping: &FieldMapping,
    constructor: F,
) -> ItemResult<T>
where
    F: FnOnce(UnboxedFields) -> T,
{
    let entry: Value = serde_json::from_slice(data)
        .map_err(|e| DecodingError::MalformedEntry(format!("invalid JSON: {e}")))?;
    unbox_entry(&entry, mapping, locale).map(constructor)
}

/// [`decode_item`] using the schema and constructor of a [`Readable`] type.
pub fn decode_entry<T: Readable>(data: &[u8], locale: Option<&LocaleSet>) -> ItemResult<T> {
    decode_item(data, locale, &T::field_mapping(), T::from_fields)
}
