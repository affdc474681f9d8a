mod common;

use common::Product;
use contentful_requests::{DEFAULT_PAGE_SIZE, Method, SpaceConfig, VERSION_HEADER};
use contentful_types::{LocaleCode, LocaleSet, Page};
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let config = SpaceConfig::new("space-1");
    assert_eq!(config.space_id, "space-1");
    assert_eq!(config.locale, LocaleCode::from("en-US"));
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.decode_locale(), None);
    assert_eq!(config.first_page(), Page::first(DEFAULT_PAGE_SIZE));
}

#[test]
fn parses_partial_json() {
    let config = SpaceConfig::from_json(r#"{"space_id": "abc", "page_size": 10}"#).unwrap();
    assert_eq!(config.space_id, "abc");
    assert_eq!(config.page_size, 10);
    assert_eq!(config.locale, LocaleCode::default());
}

#[test]
fn parses_locale_preference() {
    let json = r#"{
        "space_id": "abc",
        "locale": "fr",
        "locales": {"favoured": "fr", "fallback": "en-US"}
    }"#;
    let config = SpaceConfig::from_json(json).unwrap();
    assert_eq!(config.decode_locale(), Some(&LocaleSet::new("fr", "en-US")));
    assert_eq!(config.locale.as_str(), "fr");
}

#[test]
fn rejects_invalid_json() {
    assert!(SpaceConfig::from_json("{space_id: abc}").is_err());
}

#[test]
fn builders_use_configured_space() {
    let config = SpaceConfig {
        locale: LocaleCode::from("de"),
        page_size: 5,
        ..SpaceConfig::new("space-9")
    };

    let page = config.page_request_for::<Product>(&config.first_page());
    assert_eq!(page.path, "/spaces/space-9/entries");
    assert_eq!(page.query_value("content_type"), Some("product"));
    assert_eq!(page.query_value("limit"), Some("5"));

    assert_eq!(
        config.entry_request("e1").path,
        "/spaces/space-9/entries/e1"
    );

    let create = config.create_request(&Product::sample()).unwrap();
    let body: serde_json::Value = serde_json::from_slice(create.body.as_ref().unwrap()).unwrap();
    assert_eq!(body["fields"]["name"]["de"], "Kettle");

    let update = config.update_request(&Product::sample()).unwrap();
    assert_eq!(update.method, Method::Put);
    assert_eq!(update.header(VERSION_HEADER), Some("5"));

    let publish = config.publish_request(&Product::sample());
    assert_eq!(publish.path, "/spaces/space-9/entries/prod-1/published");
}
