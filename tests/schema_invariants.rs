//! Schema Invariant Tests
//!
//! - Validation is deterministic
//! - Every violation is reported, in schema field order
//! - Out-of-range, wrongly typed, and unknown-tag values are rejected
//! - Partial validation never defaults

use movie_catalog::schema::{
    validate_full, validate_partial, FieldErrorCode, Genre, DEFAULT_RATE,
};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn valid_movie() -> Value {
    json!({
        "title": "Inception",
        "year": 2010,
        "director": "Nolan",
        "duration": 148,
        "poster": "http://x.com/p.jpg",
        "genre": ["Sci-Fi"]
    })
}

fn with(field: &str, value: Value) -> Value {
    let mut doc = valid_movie();
    doc[field] = value;
    doc
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_validation_is_deterministic() {
    let bad = json!({"year": "x", "genre": ["Nope"]});
    let first = validate_full(&bad).unwrap_err();
    for _ in 0..50 {
        assert_eq!(validate_full(&bad).unwrap_err(), first);
        assert!(validate_full(&valid_movie()).is_ok());
    }
}

// =============================================================================
// Rejections
// =============================================================================

/// Each bad value yields an error naming its own field.
#[test]
fn test_out_of_range_and_malformed_values_rejected() {
    let cases = [
        ("year", json!(1899), "year"),
        ("year", json!(2025), "year"),
        ("duration", json!(0), "duration"),
        ("duration", json!(301), "duration"),
        ("rate", json!(-1), "rate"),
        ("rate", json!(11), "rate"),
        ("poster", json!("definitely not a url"), "poster"),
        ("genre", json!([]), "genre"),
        ("genre", json!(["Documentary"]), "genre[0]"),
    ];

    for (field, value, expected_path) in cases {
        let errors = validate_full(&with(field, value.clone()))
            .expect_err(&format!("{} = {} should be rejected", field, value));
        assert_eq!(errors.len(), 1, "{} = {}: {:?}", field, value, errors);
        assert_eq!(errors.errors()[0].field, expected_path);
    }
}

#[test]
fn test_documented_messages() {
    let errors = validate_full(&json!({})).unwrap_err();
    assert_eq!(errors.for_field("title").unwrap().message, "Title is required");
    assert_eq!(errors.for_field("genre").unwrap().message, "Genre is required");
    assert!(errors.for_field("rate").is_none());

    let errors = validate_full(&with("title", json!(true))).unwrap_err();
    assert_eq!(errors.errors()[0].message, "Title must be a string");

    let errors = validate_full(&with("poster", json!("x"))).unwrap_err();
    assert_eq!(errors.errors()[0].message, "Poster must be a valid URL");

    let errors = validate_full(&with("genre", json!({"0": "Drama"}))).unwrap_err();
    assert_eq!(errors.errors()[0].message, "Genre must be an array of enum Genre");
}

#[test]
fn test_all_errors_reported_in_schema_order() {
    let errors = validate_full(&json!({"rate": 50})).unwrap_err();
    assert_eq!(
        errors.fields(),
        vec!["title", "year", "director", "duration", "rate", "poster", "genre"]
    );
    assert_eq!(errors.for_field("rate").unwrap().code, FieldErrorCode::TooBig);
}

#[test]
fn test_any_input_shape_is_handled() {
    for input in [
        Value::Null,
        json!(true),
        json!(3.5),
        json!("movie"),
        json!([valid_movie()]),
        json!({"title": {"nested": []}}),
    ] {
        assert!(validate_full(&input).is_err());
        let _ = validate_partial(&input);
    }
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_missing_rate_defaults_to_five() {
    let movie = validate_full(&valid_movie()).unwrap();
    assert_eq!(movie.rate, DEFAULT_RATE);
    assert_eq!(movie.rate, 5.0);
}

#[test]
fn test_all_genre_tags_accepted() {
    let tags: Vec<&str> = Genre::ALL.iter().map(|g| g.as_str()).collect();
    let movie = validate_full(&with("genre", json!(tags))).unwrap();
    assert_eq!(movie.genre, Genre::ALL.to_vec());
}

#[test]
fn test_partial_never_defaults() {
    let patch = validate_partial(&json!({"title": "Renamed"})).unwrap();
    assert_eq!(patch.title.as_deref(), Some("Renamed"));
    assert!(patch.rate.is_none());
    assert!(patch.genre.is_none());
}

#[test]
fn test_partial_rejects_bad_present_fields_only() {
    let errors = validate_partial(&json!({"rate": 11, "poster": "nope"})).unwrap_err();
    assert_eq!(errors.fields(), vec!["rate", "poster"]);
}
