//! Startup seed data
//!
//! The catalog starts from `data/movies.json`, compiled into the binary.
//! Seed records go through the same full validation as created movies, so
//! the collection never holds a record the schema would reject.

use serde_json::Value;

use super::collection::MovieStore;
use super::errors::{StoreError, StoreResult};
use crate::schema::{validate_full, MovieRecord};

/// Seed catalog shipped with the binary
pub const SEED_JSON: &str = include_str!("../../data/movies.json");

/// Parses and validates a JSON array of movie records.
///
/// Each element must carry a string `id` and satisfy the movie schema.
pub fn parse_seed(json: &str) -> StoreResult<Vec<MovieRecord>> {
    let entries: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| StoreError::InvalidSeed(format!("expected a JSON array: {}", e)))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let id = entry
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| StoreError::InvalidSeed(format!("entry {} has no string id", i)))?;

            let movie = validate_full(entry)
                .map_err(|e| StoreError::InvalidSeed(format!("movie '{}': {}", id, e)))?;

            Ok(MovieRecord::new(id, movie))
        })
        .collect()
}

impl MovieStore {
    /// Builds a store from a JSON seed document
    pub fn from_seed_json(json: &str) -> StoreResult<Self> {
        Self::from_seed(parse_seed(json)?)
    }

    /// Builds a store from the bundled seed catalog
    pub fn seeded() -> StoreResult<Self> {
        Self::from_seed_json(SEED_JSON)
    }
}
