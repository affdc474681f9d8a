use crate::{
    RequestDescriptor, RequestResult, create_request, entry_request, page_request,
    publish_request, update_request,
};
use contentful_types::{LocaleCode, LocaleSet, Page, Readable, Writeable};
use serde::{Deserialize, Serialize};

/// Default page size for list requests.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Settings for working against one space.
///
/// Missing keys take their defaults when deserialized, so a config file may
/// hold only `{"space_id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceConfig {
    pub space_id: String,
    /// Locale that write bodies are nested under.
    pub locale: LocaleCode,
    /// Preference for locale-aware decoding. `None` decodes the single
    /// locale present in each field.
    pub locales: Option<LocaleSet>,
    pub page_size: u64,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            space_id: String::new(),
            locale: LocaleCode::default(),
            locales: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SpaceConfig {
    pub fn new(space_id: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            ..Self::default()
        }
    }

    /// Parses a JSON config document.
    pub fn from_json(json: &str) -> RequestResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Locale preference to hand to the decoders.
    #[must_use]
    pub fn decode_locale(&self) -> Option<&LocaleSet> {
        self.locales.as_ref()
    }

    #[must_use]
    pub fn first_page(&self) -> Page {
        Page::first(self.page_size)
    }

    pub fn page_request(&self, content_type: &str, page: &Page) -> RequestDescriptor {
        page_request(content_type, &self.space_id, page)
    }

    /// Page request for a [`Readable`] type's content type.
    pub fn page_request_for<T: Readable>(&self, page: &Page) -> RequestDescriptor {
        self.page_request(T::CONTENT_TYPE, page)
    }

    pub fn entry_request(&self, entry_id: &str) -> RequestDescriptor {
        entry_request(entry_id, &self.space_id)
    }

    pub fn create_request<T: Readable + Serialize>(
        &self,
        entry: &T,
    ) -> RequestResult<RequestDescriptor> {
        create_request(entry, &self.locale, &self.space_id)
    }

    pub fn update_request<T: Writeable + Serialize>(
        &self,
        entry: &T,
    ) -> RequestResult<RequestDescriptor> {
        update_request(entry, &self.locale, &self.space_id)
    }

    pub fn publish_request<T: Writeable>(&self, entry: &T) -> RequestDescriptor {
        publish_request(entry, &self.space_id)
    }
}
