//! Movie HTTP Routes
//!
//! CRUD endpoints over the in-memory catalog.
//!
//! - `GET    /movies[?genre=]` list, optionally filtered by genre
//! - `GET    /movies/:id`      single movie
//! - `POST   /movies`          create (201)
//! - `PATCH  /movies/:id`      partial update
//! - `DELETE /movies/:id`      remove

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

use super::errors::{not_found_handler, ApiError, ApiResult, MessageResponse};
use crate::observability::{Event, Logger};
use crate::schema::{validate_full, validate_partial, MovieRecord, ValidationErrors};
use crate::store::MovieStore;

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers.
///
/// Each handler takes the lock once and holds it for its whole store
/// operation, so requests are applied one complete operation at a time.
pub struct MoviesState {
    store: Mutex<MovieStore>,
}

impl MoviesState {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Number of movies currently held
    pub async fn movie_count(&self) -> usize {
        self.store.lock().await.len()
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct ListMoviesQuery {
    #[serde(default)]
    pub genre: Option<String>,
}

// ==================
// Movie Routes
// ==================

/// Create movie routes. Methods without a handler get the HTML 404.
pub fn movie_routes(state: Arc<MoviesState>) -> Router {
    Router::new()
        .route(
            "/movies",
            get(list_movies_handler)
                .post(create_movie_handler)
                .fallback(not_found_handler),
        )
        .route(
            "/movies/:id",
            get(get_movie_handler)
                .patch(update_movie_handler)
                .delete(delete_movie_handler)
                .fallback(not_found_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_movies_handler(
    State(state): State<Arc<MoviesState>>,
    query: Result<Query<ListMoviesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<MovieRecord>>> {
    let Query(query) = query?;
    let store = state.store.lock().await;

    // An empty genre means no filter
    let movies: Vec<MovieRecord> = match query.genre.as_deref().filter(|g| !g.is_empty()) {
        Some(genre) => store.list_by_genre(genre).into_iter().cloned().collect(),
        None => store.list_all().to_vec(),
    };

    Ok(Json(movies))
}

async fn get_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MovieRecord>> {
    let store = state.store.lock().await;
    let movie = store.find_by_id(&id)?;
    Ok(Json(movie.clone()))
}

async fn create_movie_handler(
    State(state): State<Arc<MoviesState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MovieRecord>)> {
    let Json(body) = payload?;
    let movie = validate_full(&body).map_err(|e| rejected("create", None, e))?;

    let record = state.store.lock().await.insert(movie);
    Logger::info(
        Event::MovieCreated,
        &[("id", &record.id), ("title", &record.movie.title)],
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// Validation runs before the id lookup, so a bad body on an unknown id is a 400.
async fn update_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<MovieRecord>> {
    let Json(body) = payload?;
    let patch = validate_partial(&body).map_err(|e| rejected("update", Some(id.as_str()), e))?;

    let record = state.store.lock().await.update_by_id(&id, patch)?;
    Logger::info(Event::MovieUpdated, &[("id", &record.id)]);

    Ok(Json(record))
}

async fn delete_movie_handler(
    State(state): State<Arc<MoviesState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = state.store.lock().await.delete_by_id(&id)?;
    Logger::info(
        Event::MovieDeleted,
        &[("id", &removed.id), ("title", &removed.movie.title)],
    );

    Ok(Json(MessageResponse::new("Movie deleted")))
}

// ==================
// Helper Functions
// ==================

fn rejected(operation: &str, id: Option<&str>, errors: ValidationErrors) -> ApiError {
    let fields = errors.fields().join(",");
    let mut log_fields = vec![("operation", operation), ("fields", fields.as_str())];
    if let Some(id) = id {
        log_fields.push(("id", id));
    }
    Logger::warn(Event::ValidationRejected, &log_fields);
    ApiError::Validation(errors)
}
