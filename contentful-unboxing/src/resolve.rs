//! Locale resolution for a single field's value map.

use contentful_types::LocaleSet;
use serde_json::{Map, Value};

/// Picks a field's value out of its locale-keyed map.
///
/// With a preference, the favoured locale is tried before the fallback and the
/// first key that exists wins, even when it holds `null`. Returns `None` when
/// neither key exists.
///
/// Without a preference the map is expected to hold a single locale. If it
/// holds several, which one is returned is unspecified.
#[must_use]
pub fn resolve<'a>(
    values: &'a Map<String, Value>,
    locale: Option<&LocaleSet>,
) -> Option<&'a Value> {
    match locale {
        Some(locale) => locale
            .candidates()
            .into_iter()
            .find_map(|code| values.get(code)),
        None => values.values().next(),
    }
}
