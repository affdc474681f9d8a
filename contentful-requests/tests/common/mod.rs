//! Shared fixtures for request tests.

#![allow(dead_code)]

use contentful_types::{
    FieldMapping, FieldType, Readable, Reference, SysData, UnboxedFields, Writeable,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub contentful_id: String,
    pub contentful_version: i64,
    pub name: String,
    pub price: Option<f64>,
    pub category: Reference,
}

impl Product {
    pub fn sample() -> Self {
        Self {
            contentful_id: "prod-1".into(),
            contentful_version: 5,
            name: "Kettle".into(),
            price: Some(24.5),
            category: Reference::entry("cat-9"),
        }
    }
}

impl Readable for Product {
    const CONTENT_TYPE: &'static str = "product";

    fn field_mapping() -> FieldMapping {
        FieldMapping::new()
            .required("name", FieldType::String)
            .optional("price", FieldType::Decimal)
            .required("category", FieldType::OneToOneRef)
    }

    fn from_fields(fields: UnboxedFields) -> Self {
        Self {
            contentful_id: fields.id().to_string(),
            contentful_version: fields.version(),
            name: fields.get_str("name").unwrap_or_default().to_string(),
            price: fields.get_decimal("price"),
            category: fields
                .get_reference("category")
                .cloned()
                .unwrap_or_else(|| Reference::entry("")),
        }
    }
}

impl Writeable for Product {
    fn sys(&self) -> SysData {
        SysData::new(&self.contentful_id, self.contentful_version)
    }
}
