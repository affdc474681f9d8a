//! List envelope decoding.

use crate::envelope::ListEnvelope;
use crate::fields::unbox_entry;
use crate::{UnboxingError, UnboxingResult};
use contentful_types::{
    FailedItem, FieldMapping, LocaleSet, Page, PagedResult, Readable, UnboxedFields,
};
use tracing::{debug, warn};

/// Decodes a list envelope, building `T` for every row that decodes.
///
/// Only a broken envelope fails the call. Rows that fail are collected with
/// their index in the original `items` array, and the remaining rows keep
/// their relative order.
pub fn decode_page<T, F>(
    data: &[u8],
    locale: Option<&LocaleSet>,
    mapping: &FieldMapping,
    constructor: F,
) -> UnboxingResult<PagedResult<T>>
where
    F: Fn(UnboxedFields) -> T,
{
    let envelope: ListEnvelope = serde_json::from_slice(data)?;
    if envelope.limit == 0 {
        return Err(UnboxingError::InvalidPage {
            skip: envelope.skip,
            limit: envelope.limit,
        });
    }

    let mut items = Vec::with_capacity(envelope.items.len());
    let mut failures = Vec::new();

    for (index, entry) in envelope.items.iter().enumerate() {
        match unbox_entry(entry, mapping, locale) {
            Ok(fields) => items.push(constructor(fields)),
            Err(error) => {
                warn!("Failed to decode item {}: {}", index, error);
                failures.push(FailedItem { index, error });
            }
        }
    }

    let page = Page::new(
        envelope.limit,
        envelope.skip / envelope.limit,
        envelope.total,
    );
    debug!(
        "Decoded page {} ({} ok, {} failed, {} total)",
        page.current_page,
        items.len(),
        failures.len(),
        page.total_items_available
    );

    Ok(PagedResult {
        items,
        failures,
        page,
    })
}

/// [`decode_page`] using the schema and constructor of a [`Readable`] type.
pub fn decode_entries<T: Readable>(
    data: &[u8],
    locale: Option<&LocaleSet>,
) -> UnboxingResult<PagedResult<T>> {
    decode_page(data, locale, &T::field_mapping(), T::from_fields)
}
