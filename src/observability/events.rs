//! Observable events
//!
//! Every log line names exactly one of these events.

use std::fmt;

/// Observable events in the movie service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved
    ConfigLoaded,
    /// Seed catalog validated and loaded
    SeedLoaded,
    /// Listener bound, ready for requests
    ServerStarted,
    /// Startup failed
    BootFailed,

    // Requests
    /// One HTTP request completed
    HttpRequest,
    /// Request ended in an internal error
    RequestFailed,

    // Writes
    /// Movie created
    MovieCreated,
    /// Movie partially updated
    MovieUpdated,
    /// Movie removed
    MovieDeleted,
    /// Write rejected by schema validation
    ValidationRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SeedLoaded => "SEED_LOADED",
            Event::ServerStarted => "SERVER_STARTED",
            Event::BootFailed => "BOOT_FAILED",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::RequestFailed => "REQUEST_FAILED",
            Event::MovieCreated => "MOVIE_CREATED",
            Event::MovieUpdated => "MOVIE_UPDATED",
            Event::MovieDeleted => "MOVIE_DELETED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
