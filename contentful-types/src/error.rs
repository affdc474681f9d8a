use crate::FieldType;
use thiserror::Error;

/// Outcome of decoding a single entry.
pub type ItemResult<T> = Result<T, DecodingError>;

/// Errors that abort decoding of one entry.
///
/// None of these are fatal for a page: the page decoder records them per row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// Required schema fields absent from the raw payload. Names are sorted.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    /// A required field was present but resolved to no value for the locale.
    #[error("required key missing: {0}")]
    RequiredKeyMissing(String),

    /// A value was present but could not be parsed as its declared type.
    #[error("field format error: {0}")]
    FieldFormat(String),

    /// A value did not have the shape its declared type requires.
    #[error("type mismatch in field {field}: expected {expected}")]
    TypeMismatch { field: String, expected: FieldType },

    /// The entry envelope itself was unusable (bad JSON, bad `sys` block).
    #[error("malformed entry: {0}")]
    MalformedEntry(String),
}

impl DecodingError {
    /// Shorthand for a [`DecodingError::TypeMismatch`].
    pub fn type_mismatch(field: impl Into<String>, expected: FieldType) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Returns the field this error names, if it is field-specific.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::RequiredKeyMissing(field) | Self::FieldFormat(field) => Some(field),
            Self::TypeMismatch { field, .. } => Some(field),
            Self::MissingRequiredFields(_) | Self::MalformedEntry(_) => None,
        }
    }
}
