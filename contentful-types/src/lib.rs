//! Core value types for the Contentful field mapping layer.
//!
//! Defines the types shared by the unboxing engine and the request builders:
//! - [`FieldMapping`] — per content type schema (field name → type + required flag)
//! - [`LocaleSet`] — favoured/fallback locale preference
//! - [`FieldValue`] and [`UnboxedFields`] — the decoded, typed view of an entry
//! - [`Page`] and [`PagedResult`] — pagination accounting for list responses
//! - [`Readable`] / [`Writeable`] — hooks application types implement
//!
//! Every type here is an immutable value: nothing is shared or mutated once a
//! decode call returns.

mod entry;
mod error;
mod locale;
mod page;
mod schema;
mod value;

pub use entry::{Readable, SYS_ID_KEY, SYS_VERSION_KEY, SysData, Writeable};
pub use error::{DecodingError, ItemResult};
pub use locale::{LocaleCode, LocaleSet};
pub use page::{FailedItem, Page, PagedResult};
pub use schema::{FieldMapping, FieldSpec, FieldType};
pub use value::{FieldValue, Reference, UnboxedFields, UnboxedFieldsBuilder};
