//! Movie schema and validator
//!
//! The only place in the crate where untyped JSON is accepted. A candidate
//! object either collapses into a typed `Movie`/`MoviePatch` or yields the
//! full, ordered list of field errors.
//!
//! # Design Principles
//!
//! - Schema is a static table of field descriptors
//! - Errors are collected, never short-circuited
//! - Undeclared keys are dropped, `null` is rejected
//! - Pure: validation never mutates anything

mod errors;
mod types;
mod validator;

pub use errors::{FieldError, FieldErrorCode, ValidationErrors, ValidationResult};
pub use types::{
    Constraint, FieldDef, FieldKind, Genre, Movie, MoviePatch, MovieRecord, Presence,
    DEFAULT_RATE, MOVIE_FIELDS,
};
pub use validator::{validate_full, validate_partial, Mode, SchemaValidator, ROOT_FIELD};
