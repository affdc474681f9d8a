use crate::SysData;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A link to another entry or asset, resolved later by the caller.
///
/// Serializes in the API's link shape:
/// `{"sys": {"type": "Link", "linkType": "Entry", "id": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub id: String,
    pub link_type: String,
}

impl Reference {
    pub fn new(id: impl Into<String>, link_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link_type: link_type.into(),
        }
    }

    /// A link to an entry.
    pub fn entry(id: impl Into<String>) -> Self {
        Self::new(id, "Entry")
    }

    /// A link to an asset.
    pub fn asset(id: impl Into<String>) -> Self {
        Self::new(id, "Asset")
    }
}

#[derive(Serialize, Deserialize)]
struct LinkSys {
    #[serde(rename = "type", default = "link_kind")]
    kind: String,
    #[serde(rename = "linkType")]
    link_type: String,
    id: String,
}

fn link_kind() -> String {
    "Link".to_string()
}

#[derive(Serialize, Deserialize)]
struct Link {
    sys: LinkSys,
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Link {
            sys: LinkSys {
                kind: link_kind(),
                link_type: self.link_type.clone(),
                id: self.id.clone(),
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let link = Link::deserialize(deserializer)?;
        Ok(Self {
            id: link.sys.id,
            link_type: link.sys.link_type,
        })
    }
}

/// One decoded field value. Exactly one variant per [`crate::FieldType`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Bool(bool),
    Decimal(f64),
    Date(NaiveDate),
    Reference(Reference),
    References(Vec<Reference>),
}

/// The decoded fields of one entry, keyed by field name.
///
/// Always carries `id` (string) and `version` (int) from the entry's system
/// metadata alongside the schema-covered fields that produced a value.
#[derive(Debug, Clone, PartialEq)]
pub struct UnboxedFields {
    values: BTreeMap<String, FieldValue>,
}

impl UnboxedFields {
    /// Names taken from the entry's `sys` block. Fields cannot use them.
    pub const SYS_KEYS: [&'static str; 2] = ["id", "version"];

    /// Only the entry's `id` and `version`.
    pub fn new(sys: SysData) -> Self {
        Self::builder(sys).build()
    }

    /// Starts a mapping seeded with the entry's `id` and `version`.
    pub fn builder(sys: SysData) -> UnboxedFieldsBuilder {
        let mut values = BTreeMap::new();
        values.insert("id".to_string(), FieldValue::String(sys.id));
        values.insert("version".to_string(), FieldValue::Int(sys.version));
        UnboxedFieldsBuilder { values }
    }

    /// Returns true for `id` and `version`.
    #[must_use]
    pub fn is_sys_key(name: &str) -> bool {
        Self::SYS_KEYS.iter().any(|key| *key == name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The entry id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.get_str("id").unwrap_or_default()
    }

    /// The entry version.
    #[must_use]
    pub fn version(&self) -> i64 {
        self.get_int("version").unwrap_or_default()
    }

    /// Identity and version, as needed for later writes.
    #[must_use]
    pub fn sys(&self) -> SysData {
        SysData::new(self.id(), self.version())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Decimal fields; integer values widen.
    pub fn get_decimal(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            FieldValue::Decimal(d) => Some(*d),
            FieldValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn get_date(&self, name: &str) -> Option<NaiveDate> {
        match self.get(name)? {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn get_reference(&self, name: &str) -> Option<&Reference> {
        match self.get(name)? {
            FieldValue::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn get_references(&self, name: &str) -> Option<&[Reference]> {
        match self.get(name)? {
            FieldValue::References(refs) => Some(refs.as_slice()),
            _ => None,
        }
    }

    /// Field names in name order, including `id` and `version`.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Accumulates decoded fields; the finished [`UnboxedFields`] is read-only.
#[derive(Debug, Clone)]
pub struct UnboxedFieldsBuilder {
    values: BTreeMap<String, FieldValue>,
}

impl UnboxedFieldsBuilder {
    /// Adds a field. Returns false, leaving the mapping unchanged, for the
    /// `id` and `version` keys seeded from `sys`.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> bool {
        let name = name.into();
        if UnboxedFields::is_sys_key(&name) {
            return false;
        }
        self.values.insert(name, value);
        true
    }

    /// Builder-style [`UnboxedFieldsBuilder::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    #[must_use]
    pub fn build(self) -> UnboxedFields {
        UnboxedFields {
            values: self.values,
        }
    }
}
