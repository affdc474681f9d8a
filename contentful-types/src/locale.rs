use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale code such as `en-US`, as used for keys of a field's value map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Creates a locale code from any string-like value.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Locale preference for locale-aware decoding.
///
/// The favoured locale is tried first, then the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleSet {
    pub favoured: LocaleCode,
    pub fallback: LocaleCode,
}

impl LocaleSet {
    pub fn new(favoured: impl Into<LocaleCode>, fallback: impl Into<LocaleCode>) -> Self {
        Self {
            favoured: favoured.into(),
            fallback: fallback.into(),
        }
    }

    /// Keys to try, in order.
    #[must_use]
    pub fn candidates(&self) -> [&str; 2] {
        [self.favoured.as_str(), self.fallback.as_str()]
    }
}
