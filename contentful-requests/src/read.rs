use crate::{Method, RequestDescriptor};
use contentful_types::Page;
use tracing::debug;

/// Sys attributes and fields, which is all the unboxing engine reads.
const SELECT: &str = "sys.id,sys.version,fields";

/// `GET /spaces/{space}/entries` for one page of a content type.
pub fn page_request(content_type: &str, space_id: &str, page: &Page) -> RequestDescriptor {
    debug!(
        "Building page request for {} (page {}, {} per page)",
        content_type, page.current_page, page.items_per_page
    );
    RequestDescriptor::new(Method::Get, format!("/spaces/{space_id}/entries"))
        .with_query("content_type", content_type)
        .with_query("select", SELECT)
        .with_query("limit", page.items_per_page)
        .with_query("skip", page.skip())
}

/// `GET /spaces/{space}/entries/{entry}`.
pub fn entry_request(entry_id: &str, space_id: &str) -> RequestDescriptor {
    RequestDescriptor::new(Method::Get, format!("/spaces/{space_id}/entries/{entry_id}"))
}
