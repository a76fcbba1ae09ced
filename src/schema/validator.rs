//! Schema validator for candidate movies
//!
//! Validation semantics:
//! - Input is any JSON value; anything other than an object is rejected
//! - Fields are checked in schema order and every violation is collected
//! - Keys the schema does not declare (including `id`) are dropped
//! - `null` is a type error, never an absence
//! - Full mode requires every field except those with a default
//! - Partial mode checks only the fields that are present
//!
//! The validator is pure: it never touches the store.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use url::Url;

use super::errors::{FieldError, FieldErrorCode, ValidationErrors, ValidationResult};
use super::types::{Constraint, FieldDef, FieldKind, Genre, Movie, MoviePatch, Presence, MOVIE_FIELDS};

/// Field path used for errors about the input as a whole
pub const ROOT_FIELD: &str = "$root";

/// Whether absent fields are errors or simply skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Full,
    Partial,
}

/// Walks a field table over untyped input.
pub struct SchemaValidator {
    fields: &'static [FieldDef],
}

impl SchemaValidator {
    pub fn new(fields: &'static [FieldDef]) -> Self {
        Self { fields }
    }

    /// Validator over the movie schema
    pub fn movies() -> Self {
        Self::new(MOVIE_FIELDS)
    }

    /// Validates `input` and returns the normalized object.
    ///
    /// On success the map holds exactly the declared fields that were
    /// present (plus defaults in full mode), each coerced to its schema
    /// kind. On failure every violation is returned in schema order.
    pub fn validate(&self, input: &Value, mode: Mode) -> ValidationResult<Map<String, Value>> {
        let obj = input.as_object().ok_or_else(|| {
            ValidationErrors::single(FieldError::new(
                ROOT_FIELD,
                FieldErrorCode::InvalidType,
                format!("Expected object, received {}", json_type_name(input)),
            ))
        })?;

        let mut errors = Vec::new();
        let mut normalized = Map::new();

        for def in self.fields {
            match obj.get(def.name) {
                Some(value) => {
                    if let Some(v) = check_value(def, value, &mut errors) {
                        normalized.insert(def.name.to_string(), v);
                    }
                }
                None => match (mode, def.presence) {
                    (Mode::Partial, _) => {}
                    (Mode::Full, Presence::DefaultNumber(default)) => {
                        normalized.insert(def.name.to_string(), number_value(default));
                    }
                    (Mode::Full, Presence::Required) => errors.push(FieldError::new(
                        def.name,
                        FieldErrorCode::Required,
                        format!("{} is required", def.label),
                    )),
                },
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationErrors::new(errors))
        }
    }
}

/// Validates a candidate for creation. `rate` defaults to 5.
pub fn validate_full(input: &Value) -> ValidationResult<Movie> {
    let normalized = SchemaValidator::movies().validate(input, Mode::Full)?;
    into_typed(normalized)
}

/// Validates a candidate for a partial update. Absent fields stay absent.
pub fn validate_partial(input: &Value) -> ValidationResult<MoviePatch> {
    let normalized = SchemaValidator::movies().validate(input, Mode::Partial)?;
    into_typed(normalized)
}

fn into_typed<T: DeserializeOwned>(normalized: Map<String, Value>) -> ValidationResult<T> {
    serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        ValidationErrors::single(FieldError::new(
            ROOT_FIELD,
            FieldErrorCode::InvalidType,
            e.to_string(),
        ))
    })
}

/// Checks one present value. Pushes errors and returns `None` on failure.
fn check_value(def: &FieldDef, value: &Value, errors: &mut Vec<FieldError>) -> Option<Value> {
    match def.kind {
        FieldKind::Text => {
            let Some(s) = value.as_str() else {
                errors.push(type_error(def));
                return None;
            };
            if matches!(def.constraint, Constraint::NonEmpty) && s.is_empty() {
                errors.push(FieldError::new(
                    def.name,
                    FieldErrorCode::TooSmall,
                    format!("{} must not be empty", def.label),
                ));
                return None;
            }
            Some(Value::String(s.to_owned()))
        }
        FieldKind::Integer => {
            let n = value.as_f64().filter(|n| n.fract() == 0.0);
            let Some(n) = n else {
                errors.push(type_error(def));
                return None;
            };
            check_range(def, n, errors)?;
            Some(Value::from(n as i64))
        }
        FieldKind::Number => {
            let Some(n) = value.as_f64() else {
                errors.push(type_error(def));
                return None;
            };
            check_range(def, n, errors)?;
            Some(number_value(n))
        }
        FieldKind::Url => {
            let Some(s) = value.as_str() else {
                errors.push(type_error(def));
                return None;
            };
            if Url::parse(s).is_err() {
                errors.push(FieldError::new(
                    def.name,
                    FieldErrorCode::InvalidUrl,
                    format!("{} must be a valid URL", def.label),
                ));
                return None;
            }
            Some(Value::String(s.to_owned()))
        }
        FieldKind::GenreList => check_genres(def, value, errors),
    }
}

fn check_genres(def: &FieldDef, value: &Value, errors: &mut Vec<FieldError>) -> Option<Value> {
    let Some(items) = value.as_array() else {
        errors.push(type_error(def));
        return None;
    };

    if matches!(def.constraint, Constraint::NonEmpty) && items.is_empty() {
        errors.push(FieldError::new(
            def.name,
            FieldErrorCode::TooSmall,
            format!(
                "{} must contain at least one {}",
                def.label,
                def.label.to_lowercase()
            ),
        ));
        return None;
    }

    let mut tags = Vec::with_capacity(items.len());
    let mut valid = true;

    for (i, item) in items.iter().enumerate() {
        let path = format!("{}[{}]", def.name, i);
        match item.as_str() {
            None => {
                errors.push(FieldError::new(
                    path,
                    FieldErrorCode::InvalidType,
                    type_message(def),
                ));
                valid = false;
            }
            Some(tag) => match tag.parse::<Genre>() {
                Ok(genre) => tags.push(Value::String(genre.as_str().to_string())),
                Err(_) => {
                    errors.push(FieldError::new(
                        path,
                        FieldErrorCode::InvalidEnumValue,
                        format!(
                            "Invalid enum value. Expected {}, received '{}'",
                            Genre::expected_list(),
                            tag
                        ),
                    ));
                    valid = false;
                }
            },
        }
    }

    valid.then_some(Value::Array(tags))
}

fn check_range(def: &FieldDef, n: f64, errors: &mut Vec<FieldError>) -> Option<()> {
    if let Constraint::Range { min, max } = def.constraint {
        if n < min {
            errors.push(FieldError::new(
                def.name,
                FieldErrorCode::TooSmall,
                format!("{} must be greater than or equal to {}", def.label, fmt_bound(min)),
            ));
            return None;
        }
        if n > max {
            errors.push(FieldError::new(
                def.name,
                FieldErrorCode::TooBig,
                format!("{} must be less than or equal to {}", def.label, fmt_bound(max)),
            ));
            return None;
        }
    }
    Some(())
}

fn type_error(def: &FieldDef) -> FieldError {
    FieldError::new(def.name, FieldErrorCode::InvalidType, type_message(def))
}

fn type_message(def: &FieldDef) -> String {
    match def.kind {
        FieldKind::Text | FieldKind::Url => format!("{} must be a string", def.label),
        FieldKind::Integer => format!("{} must be an integer", def.label),
        FieldKind::Number => format!("{} must be a number", def.label),
        FieldKind::GenreList => format!("{} must be an array of enum {}", def.label, def.label),
    }
}

fn number_value(n: f64) -> Value {
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}

/// `1900` rather than `1900.0` in messages
fn fmt_bound(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
