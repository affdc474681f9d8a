//! The field unboxing engine.

use crate::envelope::parse_sys;
use crate::resolve::resolve;
use chrono::NaiveDate;
use contentful_types::{
    DecodingError, FieldMapping, FieldType, FieldValue, ItemResult, LocaleSet, Reference, SysData,
    UnboxedFields,
};
use serde_json::{Map, Value};
use tracing::debug;

/// Full-date format accepted for date fields.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decodes one entry envelope (`{"sys": {...}, "fields": {...}}`).
///
/// A missing `fields` member is treated as an empty fields object.
pub fn unbox_entry(
    entry: &Value,
    mapping: &FieldMapping,
    locale: Option<&LocaleSet>,
) -> ItemResult<UnboxedFields> {
    if !entry.is_object() {
        return Err(DecodingError::MalformedEntry(
            "entry is not an object".to_string(),
        ));
    }
    let sys = parse_sys(entry)?;

    let empty = Map::new();
    let fields = match entry.get("fields") {
        None => &empty,
        Some(Value::Object(fields)) => fields,
        Some(_) => {
            return Err(DecodingError::MalformedEntry(
                "fields is not an object".to_string(),
            ));
        }
    };

    unbox_fields(fields, sys, mapping, locale)
}

/// Validates and decodes a raw fields object against `mapping`.
///
/// Fields not named by the mapping are ignored, as are fields named `id` or
/// `version`, which always come from `sys`. Any error aborts the whole
/// entry; nothing partially decoded is returned.
pub fn unbox_fields(
    fields: &Map<String, Value>,
    sys: SysData,
    mapping: &FieldMapping,
    locale: Option<&LocaleSet>,
) -> ItemResult<UnboxedFields> {
    let missing: Vec<String> = mapping
        .required_fields()
        .filter(|name| !fields.contains_key(*name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(DecodingError::MissingRequiredFields(missing));
    }

    let mut unboxed = UnboxedFields::builder(sys);

    for (name, raw) in fields {
        if UnboxedFields::is_sys_key(name) {
            debug!("Ignoring field {} shadowing sys metadata", name);
            continue;
        }
        let Some(spec) = mapping.lookup(name) else {
            debug!("Ignoring unmapped field {}", name);
            continue;
        };

        match unbox_value(name, raw, spec.field_type, locale)? {
            Some(value) => {
                unboxed.insert(name.as_str(), value);
            }
            None if spec.required => {
                return Err(DecodingError::RequiredKeyMissing(name.clone()));
            }
            None => {}
        }
    }

    Ok(unboxed.build())
}

/// Decodes one field. `Ok(None)` means the locale map produced no value.
fn unbox_value(
    name: &str,
    raw: &Value,
    field_type: FieldType,
    locale: Option<&LocaleSet>,
) -> ItemResult<Option<FieldValue>> {
    let mismatch = || DecodingError::type_mismatch(name, field_type);

    let values = raw.as_object().ok_or_else(mismatch)?;
    let value = match resolve(values, locale) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let decoded = match field_type {
        FieldType::String => {
            FieldValue::String(value.as_str().ok_or_else(mismatch)?.to_string())
        }
        FieldType::Int => FieldValue::Int(integral(value).ok_or_else(mismatch)?),
        FieldType::Bool => FieldValue::Bool(value.as_bool().ok_or_else(mismatch)?),
        FieldType::Decimal => FieldValue::Decimal(value.as_f64().ok_or_else(mismatch)?),
        FieldType::Date => {
            let text = value.as_str().ok_or_else(mismatch)?;
            let date =
                full_date(text).ok_or_else(|| DecodingError::FieldFormat(name.to_string()))?;
            FieldValue::Date(date)
        }
        FieldType::OneToOneRef => FieldValue::Reference(link(value).ok_or_else(mismatch)?),
        FieldType::OneToManyRef => {
            let links = value.as_array().ok_or_else(mismatch)?;
            let references = links
                .iter()
                .map(link)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(mismatch)?;
            FieldValue::References(references)
        }
    };

    Ok(Some(decoded))
}

/// Integers, plus floats with no fractional part (`3.0`).
fn integral(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    let float = value.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

/// Parses exactly `YYYY-MM-DD`. chrono alone also accepts unpadded parts,
/// leading whitespace and a sign.
fn full_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Reads `{"sys": {"id": ..., "linkType": ...}}`. Both must be non-null strings.
fn link(value: &Value) -> Option<Reference> {
    let sys = value.get("sys")?;
    let id = sys.get("id")?.as_str()?;
    let link_type = sys.get("linkType")?.as_str()?;
    Some(Reference::new(id, link_type))
}
