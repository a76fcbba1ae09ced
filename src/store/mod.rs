//! In-memory movie collection
//!
//! Ordered, process-lifetime storage for validated movies. Nothing here is
//! persisted; the collection is rebuilt from the bundled seed on every start.

mod collection;
mod errors;
mod seed;

pub use collection::MovieStore;
pub use errors::{StoreError, StoreResult};
pub use seed::{parse_seed, SEED_JSON};
