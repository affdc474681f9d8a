//! Shared fixtures for unboxing tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contentful_types::{FieldMapping, FieldType, Readable, Reference, UnboxedFields};
use serde_json::{Value, json};

/// Wraps a fields object in an entry envelope.
pub fn entry(id: &str, version: i64, fields: Value) -> Value {
    json!({
        "sys": {"id": id, "version": version, "type": "Entry"},
        "fields": fields,
    })
}

/// Serializes a list envelope.
pub fn list(total: u64, skip: u64, limit: u64, items: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "total": total,
        "skip": skip,
        "limit": limit,
        "items": items,
    }))
    .unwrap()
}

pub fn link(id: &str, link_type: &str) -> Value {
    json!({"sys": {"type": "Link", "linkType": link_type, "id": id}})
}

pub fn article_mapping() -> FieldMapping {
    FieldMapping::new()
        .required("title", FieldType::String)
        .optional("views", FieldType::Int)
        .optional("featured", FieldType::Bool)
        .optional("rating", FieldType::Decimal)
        .optional("published", FieldType::Date)
        .optional("author", FieldType::OneToOneRef)
        .optional("related", FieldType::OneToManyRef)
}

/// A well-formed article with every mapped field set under `en-US`.
pub fn full_article_fields() -> Value {
    json!({
        "title": {"en-US": "Rust for Editors"},
        "views": {"en-US": 120},
        "featured": {"en-US": true},
        "rating": {"en-US": 4.5},
        "published": {"en-US": "2020-01-15"},
        "author": {"en-US": link("person-1", "Entry")},
        "related": {"en-US": [link("a", "Entry"), link("b", "Entry")]},
    })
}

pub fn article(id: &str, title: &str) -> Value {
    entry(id, 1, json!({"title": {"en-US": title}}))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: String,
    pub version: i64,
    pub title: String,
    pub published: Option<NaiveDate>,
    pub author: Option<Reference>,
}

impl Readable for Article {
    const CONTENT_TYPE: &'static str = "article";

    fn field_mapping() -> FieldMapping {
        article_mapping()
    }

    fn from_fields(fields: UnboxedFields) -> Self {
        Self {
            id: fields.id().to_string(),
            version: fields.version(),
            title: fields.get_str("title").unwrap_or_default().to_string(),
            published: fields.get_date("published"),
            author: fields.get_reference("author").cloned(),
        }
    }
}
