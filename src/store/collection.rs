//! Ordered in-memory movie collection
//!
//! Records are kept in insertion order: seed records first, then created
//! ones appended at the end. Every lookup is a linear scan with exact id
//! comparison. Mutations either complete or leave the collection untouched.

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use crate::schema::{Movie, MoviePatch, MovieRecord};

/// Single-owner movie collection.
///
/// Holds no lock of its own. Callers that share it across tasks wrap the
/// whole store in one mutex and hold it for each complete operation.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    records: Vec<MovieRecord>,
}

impl MovieStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if two records share an id.
    pub fn from_seed(records: Vec<MovieRecord>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            if store.position(&record.id).is_some() {
                return Err(StoreError::DuplicateId(record.id));
            }
            store.records.push(record);
        }
        Ok(store)
    }

    /// Every record, oldest first
    pub fn list_all(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Records with at least one genre equal to `tag`, ignoring case.
    ///
    /// Always filters on what it is given; an empty or unknown tag matches
    /// nothing.
    pub fn list_by_genre(&self, tag: &str) -> Vec<&MovieRecord> {
        self.records
            .iter()
            .filter(|r| r.movie.has_genre_ignore_case(tag))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> StoreResult<&MovieRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Appends a validated movie under a fresh random id and returns the stored record
    pub fn insert(&mut self, movie: Movie) -> MovieRecord {
        let id = self.fresh_id();
        let record = MovieRecord::new(id, movie);
        self.records.push(record.clone());
        record
    }

    /// Merges `patch` into the record with `id`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has `id`; nothing is modified.
    pub fn update_by_id(&mut self, id: &str, patch: MoviePatch) -> StoreResult<MovieRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let record = &mut self.records[index];
        patch.apply_to(&mut record.movie);
        Ok(record.clone())
    }

    /// Removes the record with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has `id`; nothing is modified.
    pub fn delete_by_id(&mut self, id: &str) -> StoreResult<MovieRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// UUID v4; regenerated in the practically impossible case of a clash
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
