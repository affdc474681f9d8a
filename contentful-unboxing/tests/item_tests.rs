mod common;

use chrono::NaiveDate;
use common::{Article, article_mapping, entry, full_article_fields};
use contentful_types::{DecodingError, LocaleSet, Readable, Reference};
use contentful_unboxing::{decode_entry, decode_item};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn decodes_into_caller_type() {
    let data = serde_json::to_vec(&entry("article-1", 3, full_article_fields())).unwrap();
    let article =
        decode_item(&data, None, &article_mapping(), Article::from_fields).unwrap();
    assert_eq!(
        article,
        Article {
            id: "article-1".into(),
            version: 3,
            title: "Rust for Editors".into(),
            published: NaiveDate::from_ymd_opt(2020, 1, 15),
            author: Some(Reference::entry("person-1")),
        }
    );
}

#[test]
fn readable_types_decode_directly() {
    let data = serde_json::to_vec(&entry(
        "a",
        1,
        json!({"title": {"en-US": "Hi", "fr": "Salut"}}),
    ))
    .unwrap();
    let locale = LocaleSet::new("fr", "en-US");
    let article: Article = decode_entry(&data, Some(&locale)).unwrap();
    assert_eq!(article.title, "Salut");
    assert_eq!(article.published, None);
}

#[test]
fn decode_error_is_returned_not_raised() {
    let data = serde_json::to_vec(&entry("a", 1, json!({"views": {"en-US": 1}}))).unwrap();
    let result = decode_entry::<Article>(&data, None);
    assert_eq!(
        result,
        Err(DecodingError::MissingRequiredFields(vec!["title".into()]))
    );
}

#[test]
fn invalid_json_is_a_malformed_entry() {
    let result = decode_entry::<Article>(b"{not json", None);
    assert!(matches!(result, Err(DecodingError::MalformedEntry(_))));
}

#[test]
fn constructor_runs_only_on_success() {
    let data = serde_json::to_vec(&entry("a", 1, json!({"title": {"en-US": 5}}))).unwrap();
    let mut calls = 0;
    let result = decode_item(&data, None, &article_mapping(), |_| calls += 1);
    assert!(result.is_err());
    assert_eq!(calls, 0);
}
