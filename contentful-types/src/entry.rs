use crate::{FieldMapping, UnboxedFields};
use serde::{Deserialize, Serialize};

/// Attribute name application types use for the entry id.
///
/// Stripped from the payload when an object is encoded for writing.
pub const SYS_ID_KEY: &str = "contentful_id";

/// Attribute name application types use for the entry version.
pub const SYS_VERSION_KEY: &str = "contentful_version";

/// Identity and version of an entry, taken from its `sys` block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SysData {
    pub id: String,
    pub version: i64,
}

impl SysData {
    pub fn new(id: impl Into<String>, version: i64) -> Self {
        Self {
            id: id.into(),
            version,
        }
    }
}

/// An application type that can be built from a decoded entry.
///
/// Bundles the schema and the construction function for one content type so
/// they can be handed to the decoders together.
pub trait Readable: Sized {
    /// Content type id, sent with create requests and used in page queries.
    const CONTENT_TYPE: &'static str;

    /// Schema for this content type.
    fn field_mapping() -> FieldMapping;

    /// Builds the value from decoded fields.
    fn from_fields(fields: UnboxedFields) -> Self;
}

/// An application type that knows which stored entry it represents.
pub trait Writeable {
    fn sys(&self) -> SysData;
}
