//! Locale-aware field unboxing for Contentful entries.
//!
//! Turns the API's generic field model, where every field is a dictionary of
//! locale code → value, into [`UnboxedFields`] using a caller-supplied
//! [`FieldMapping`] and an optional [`LocaleSet`]:
//! - [`resolve`] — pick the value for the favoured locale or its fallback
//! - [`unbox_fields`] / [`unbox_entry`] — validate and decode one entry
//! - [`decode_item`] — decode a single-entry envelope into a caller type
//! - [`decode_page`] — decode a list envelope, isolating per-row failures
//!
//! Everything here is a pure function of its inputs. Schema, locale and
//! constructor are passed explicitly to every entry point.
//!
//! [`UnboxedFields`]: contentful_types::UnboxedFields
//! [`FieldMapping`]: contentful_types::FieldMapping
//! [`LocaleSet`]: contentful_types::LocaleSet

mod envelope;
mod fields;
mod item;
mod page;
mod resolve;

pub use fields::{unbox_entry, unbox_fields};
pub use item::{decode_entry, decode_item};
pub use page::{decode_entries, decode_page};
pub use resolve::resolve;

/// Result type for envelope-level operations.
pub type UnboxingResult<T> = std::result::Result<T, UnboxingError>;

/// Errors that fail a whole decode call.
///
/// Entry-level problems are reported as [`contentful_types::DecodingError`]
/// instead and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum UnboxingError {
    /// Outer JSON unreadable or missing `total`, `skip`, `limit` or `items`.
    #[error("malformed list envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    /// The server reported a page size of zero, so no page index exists.
    #[error("invalid page: limit {limit} with skip {skip}")]
    InvalidPage { skip: u64, limit: u64 },
}
