//! Observability for the movie service
//!
//! Structured JSON logging, one line per event.
//!
//! # Usage
//!
//! ```ignore
//! use movie_catalog::observability::{Event, Logger};
//!
//! Logger::info(Event::MovieCreated, &[("id", &record.id)]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
