//! Collection Store Tests
//!
//! Identity and ordering behavior of the in-memory catalog, driven through
//! the same validation the HTTP layer uses.

use movie_catalog::schema::{validate_full, validate_partial, Movie, MoviePatch};
use movie_catalog::store::{MovieStore, StoreError};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn inception() -> Movie {
    validate_full(&json!({
        "title": "Inception",
        "year": 2010,
        "director": "Nolan",
        "duration": 148,
        "poster": "http://x.com/p.jpg",
        "genre": ["Sci-Fi"]
    }))
    .unwrap()
}

fn seeded() -> MovieStore {
    MovieStore::seeded().unwrap()
}

// =============================================================================
// Insert / Find
// =============================================================================

#[test]
fn test_insert_then_find_returns_same_movie() {
    let mut store = seeded();
    let input = inception();
    let created = store.insert(input.clone());

    let found = store.find_by_id(&created.id).unwrap();
    assert_eq!(found.movie, input);
    assert_eq!(found.id, created.id);
}

#[test]
fn test_inserted_movie_gets_default_rate_and_fresh_id() {
    let mut store = seeded();
    let existing: Vec<String> = store.list_all().iter().map(|r| r.id.clone()).collect();

    let created = store.insert(inception());
    assert_eq!(created.movie.rate, 5.0);
    assert!(!created.id.is_empty());
    assert!(!existing.contains(&created.id));
}

#[test]
fn test_insert_appends_last() {
    let mut store = seeded();
    let created = store.insert(inception());
    assert_eq!(store.list_all().last().unwrap().id, created.id);
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_then_find_is_not_found() {
    let mut store = seeded();
    let before = store.len();
    let id = store.list_all()[1].id.clone();

    store.delete_by_id(&id).unwrap();

    assert_eq!(store.len(), before - 1);
    assert_eq!(store.find_by_id(&id), Err(StoreError::NotFound(id.clone())));
    assert!(store.delete_by_id(&id).is_err());
    assert_eq!(store.len(), before - 1);
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_empty_update_is_identity() {
    let mut store = seeded();
    let id = store.list_all()[0].id.clone();
    let before = store.find_by_id(&id).unwrap().clone();

    let patch = validate_partial(&json!({})).unwrap();
    let after = store.update_by_id(&id, patch).unwrap();

    assert_eq!(after, before);
}

#[test]
fn test_update_cannot_change_id() {
    let mut store = seeded();
    let id = store.list_all()[0].id.clone();

    let patch = validate_partial(&json!({"id": "hijacked", "title": "Renamed"})).unwrap();
    let updated = store.update_by_id(&id, patch).unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.movie.title, "Renamed");
    assert!(store.find_by_id("hijacked").is_err());
}

#[test]
fn test_update_year_changes_only_year() {
    let mut store = seeded();
    let id = store.list_all()[2].id.clone();
    let before = store.find_by_id(&id).unwrap().clone();

    let patch = validate_partial(&json!({"year": 2020})).unwrap();
    let after = store.update_by_id(&id, patch).unwrap();

    let mut expected = before.clone();
    expected.movie.year = 2020;
    assert_eq!(after, expected);
}

#[test]
fn test_update_keeps_position() {
    let mut store = seeded();
    let order: Vec<String> = store.list_all().iter().map(|r| r.id.clone()).collect();

    let patch = MoviePatch {
        director: Some("Someone Else".into()),
        ..Default::default()
    };
    store.update_by_id(&order[3], patch).unwrap();

    let after: Vec<String> = store.list_all().iter().map(|r| r.id.clone()).collect();
    assert_eq!(order, after);
}

// =============================================================================
// Genre Filter
// =============================================================================

#[test]
fn test_genre_filter_is_case_insensitive() {
    let store = seeded();
    let lower: Vec<_> = store.list_by_genre("comedy").into_iter().cloned().collect();
    let upper: Vec<_> = store.list_by_genre("COMEDY").into_iter().cloned().collect();
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
}

#[test]
fn test_genre_filter_returns_matching_subsequence() {
    let store = seeded();
    let drama = store.list_by_genre("drama");
    assert!(drama
        .iter()
        .all(|r| r.movie.genre.iter().any(|g| g.as_str() == "Drama")));

    let expected: Vec<_> = store
        .list_all()
        .iter()
        .filter(|r| r.movie.has_genre_ignore_case("Drama"))
        .collect();
    assert_eq!(drama, expected);
}
