use crate::{Method, RequestDescriptor, RequestError, RequestResult};
use contentful_types::{LocaleCode, Readable, SYS_ID_KEY, SYS_VERSION_KEY, Writeable};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

pub const VERSION_HEADER: &str = "X-Contentful-Version";
pub const CONTENT_TYPE_HEADER: &str = "X-Contentful-Content-Type";
pub const MANAGEMENT_CONTENT_TYPE: &str = "application/vnd.contentful.management.v1+json";

/// Encodes an entry as `{"fields": {name: {locale: value}}}`.
///
/// The id and version attributes are dropped, as are `null` attributes.
pub fn encode_fields<T: Serialize>(entry: &T, locale: &LocaleCode) -> RequestResult<Vec<u8>> {
    let Value::Object(attributes) = serde_json::to_value(entry)? else {
        return Err(RequestError::NotAnObject);
    };

    let fields: Map<String, Value> = attributes
        .into_iter()
        .filter(|(name, value)| name != SYS_ID_KEY && name != SYS_VERSION_KEY && !value.is_null())
        .map(|(name, value)| {
            let mut localized = Map::new();
            localized.insert(locale.to_string(), value);
            (name, Value::Object(localized))
        })
        .collect();

    let mut body = Map::new();
    body.insert("fields".to_string(), Value::Object(fields));
    Ok(serde_json::to_vec(&body)?)
}

/// `POST /spaces/{space}/entries` creating an entry of `T`'s content type.
pub fn create_request<T: Readable + Serialize>(
    entry: &T,
    locale: &LocaleCode,
    space_id: &str,
) -> RequestResult<RequestDescriptor> {
    let body = encode_fields(entry, locale)?;
    debug!("Building create request for {} in {}", T::CONTENT_TYPE, space_id);
    Ok(
        RequestDescriptor::new(Method::Post, format!("/spaces/{space_id}/entries"))
            .with_header(CONTENT_TYPE_HEADER, T::CONTENT_TYPE)
            .with_body(body),
    )
}

/// `PUT /spaces/{space}/entries/{id}` replacing the stored fields.
pub fn update_request<T: Writeable + Serialize>(
    entry: &T,
    locale: &LocaleCode,
    space_id: &str,
) -> RequestResult<RequestDescriptor> {
    let sys = entry.sys();
    let body = encode_fields(entry, locale)?;
    debug!("Building update request for {} (version {})", sys.id, sys.version);
    Ok(RequestDescriptor::new(
        Method::Put,
        format!("/spaces/{space_id}/entries/{}", sys.id),
    )
    .with_header(VERSION_HEADER, sys.version)
    .with_header("Content-Type", MANAGEMENT_CONTENT_TYPE)
    .with_body(body))
}

/// `PUT /spaces/{space}/entries/{id}/published` for the entry's version.
pub fn publish_request<T: Writeable>(entry: &T, space_id: &str) -> RequestDescriptor {
    let sys = entry.sys();
    publish_request_for(&sys.id, sys.version, space_id)
}

/// [`publish_request`] for an entry known only by id and version.
pub fn publish_request_for(entry_id: &str, version: i64, space_id: &str) -> RequestDescriptor {
    RequestDescriptor::new(
        Method::Put,
        format!("/spaces/{space_id}/entries/{entry_id}/published"),
    )
    .with_header(VERSION_HEADER, version)
}
