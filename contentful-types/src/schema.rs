use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The declared type of a content type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Int,
    Bool,
    Decimal,
    /// ISO-8601 full date (`2020-01-15`), stored as a string.
    Date,
    /// A single link to another entry or asset.
    OneToOneRef,
    /// An ordered list of links.
    OneToManyRef,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::OneToOneRef => "one-to-one reference",
            Self::OneToManyRef => "one-to-many reference",
        };
        f.write_str(name)
    }
}

/// Type and required-ness of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(field_type: FieldType, required: bool) -> Self {
        Self {
            field_type,
            required,
        }
    }
}

/// Schema for one content type: field name → [`FieldSpec`].
///
/// Supplied by the caller and never modified during a decode. Serializes as
/// `{"title": {"type": "string", "required": true}, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    fields: BTreeMap<String, FieldSpec>,
}

impl FieldMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a field, builder style.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        self.insert(name, field_type, required);
        self
    }

    /// Shorthand for a required field.
    #[must_use]
    pub fn required(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.field(name, field_type, true)
    }

    /// Shorthand for an optional field.
    #[must_use]
    pub fn optional(self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.field(name, field_type, false)
    }

    pub fn insert(&mut self, name: impl Into<String>, field_type: FieldType, required: bool) {
        self.fields
            .insert(name.into(), FieldSpec::new(field_type, required));
    }

    /// Looks up a field's declared type and required flag.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<FieldSpec> {
        self.fields.get(name).copied()
    }

    /// Names of all required fields, in name order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), *spec))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldType, bool)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, FieldType, bool)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (name, field_type, required) in iter {
            mapping.insert(name, field_type, required);
        }
        mapping
    }
}
