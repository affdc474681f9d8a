//! Request descriptors for the Contentful APIs.
//!
//! Builds the method, path, query, headers and body of every request the
//! mapping layer issues. Sending them is left to the caller's HTTP transport.
//!
//! - [`page_request`] / [`entry_request`] — paginated and single-entry reads
//! - [`create_request`] / [`update_request`] — writes with a locale-nested body
//! - [`publish_request`] — publishing a stored version
//! - [`SpaceConfig`] — the same builders bound to one configured space

mod config;
mod descriptor;
mod read;
mod write;

pub use config::{DEFAULT_PAGE_SIZE, SpaceConfig};
pub use descriptor::{Method, RequestDescriptor};
pub use read::{entry_request, page_request};
pub use write::{
    CONTENT_TYPE_HEADER, MANAGEMENT_CONTENT_TYPE, VERSION_HEADER, create_request, encode_fields,
    publish_request, publish_request_for, update_request,
};

/// Result type for request building.
pub type RequestResult<T> = std::result::Result<T, RequestError>;

/// Errors that can occur while building a request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The entry did not serialize to a JSON object, so it has no fields.
    #[error("entry does not serialize to a JSON object")]
    NotAnObject,
}
