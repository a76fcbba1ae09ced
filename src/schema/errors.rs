//! Validation error types
//!
//! Validation never stops at the first problem. Every violated field
//! produces one `FieldError`, and the collected list is returned in schema
//! field order as a single `ValidationErrors`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable reason attached to every field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// Field absent where the schema requires it
    Required,
    /// Value has the wrong JSON type (including null)
    InvalidType,
    /// Number below the minimum, or empty text/list
    TooSmall,
    /// Number above the maximum
    TooBig,
    /// Text is not a well-formed URL
    InvalidUrl,
    /// Text is not one of the enumerated values
    InvalidEnumValue,
}

impl FieldErrorCode {
    /// Returns the wire representation of the code
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorCode::Required => "required",
            FieldErrorCode::InvalidType => "invalid_type",
            FieldErrorCode::TooSmall => "too_small",
            FieldErrorCode::TooBig => "too_big",
            FieldErrorCode::InvalidUrl => "invalid_url",
            FieldErrorCode::InvalidEnumValue => "invalid_enum_value",
        }
    }
}

impl fmt::Display for FieldErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single field-level violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field path, e.g. `year` or `genre[2]`
    pub field: String,
    pub code: FieldErrorCode,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {} ({})", self.field, self.message, self.code)
    }
}

/// Ordered, non-empty list of field errors from one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wraps a collected list. Callers only build this when the list is non-empty.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// Shorthand for a single error
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first error reported for `field`, if any
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Field paths in report order
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, err) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationErrors>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_serialize_snake_case() {
        let err = FieldError::new("poster", FieldErrorCode::InvalidUrl, "Poster must be a valid URL");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "invalid_url");
        assert_eq!(json["field"], "poster");
    }

    #[test]
    fn test_errors_serialize_as_plain_array() {
        let errors = ValidationErrors::new(vec![
            FieldError::new("title", FieldErrorCode::Required, "Title is required"),
            FieldError::new("genre", FieldErrorCode::Required, "Genre is required"),
        ]);
        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.is_array());
        assert_eq!(json[1]["message"], "Genre is required");
    }

    #[test]
    fn test_display_lists_every_error() {
        let errors = ValidationErrors::new(vec![
            FieldError::new("year", FieldErrorCode::TooBig, "Year must be less than or equal to 2024"),
            FieldError::new("rate", FieldErrorCode::TooSmall, "Rate must be greater than or equal to 0"),
        ]);
        let display = errors.to_string();
        assert!(display.contains("year"));
        assert!(display.contains("rate"));
        assert!(display.contains("too_big"));
    }

    #[test]
    fn test_for_field_lookup() {
        let errors = ValidationErrors::single(FieldError::new(
            "duration",
            FieldErrorCode::TooSmall,
            "Duration must be greater than or equal to 1",
        ));
        assert!(errors.for_field("duration").is_some());
        assert!(errors.for_field("year").is_none());
    }
}
