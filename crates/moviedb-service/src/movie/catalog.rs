//! Validated movie writes.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use moviedb_core::error::AppError;
use moviedb_core::traits::{RecordStore, RecordWriter};
use moviedb_core::types::id::MovieId;
use moviedb_entity::movie::{CreateMovie, Movie};

/// Creates, replaces and removes movies.
///
/// Every draft is validated before it reaches the store.
#[derive(Clone)]
pub struct MovieCatalogService {
    /// Read side of the store.
    store: Arc<dyn RecordStore<Movie>>,
    /// Write side of the store.
    writer: Arc<dyn RecordWriter<Movie>>,
}

impl MovieCatalogService {
    /// Creates a new catalog service.
    pub fn new(store: Arc<dyn RecordStore<Movie>>, writer: Arc<dyn RecordWriter<Movie>>) -> Self {
        Self { store, writer }
    }

    /// Creates a catalog service over a store that both reads and writes.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: RecordStore<Movie> + RecordWriter<Movie> + 'static,
    {
        Self {
            store: store.clone(),
            writer: store,
        }
    }

    /// Checks a draft without persisting it.
    pub fn validate(&self, draft: &CreateMovie) -> Result<(), AppError> {
        draft.validate()?;
        if draft.has_unnamed_series() {
            warn!(title = %draft.title, "Movie is flagged as part of a series but has no series name");
        }
        Ok(())
    }

    /// Validates and persists a new movie.
    pub async fn create(&self, draft: CreateMovie) -> Result<Movie, AppError> {
        self.validate(&draft)?;
        let movie = self.writer.insert(draft).await?;
        info!(movie_id = %movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Gets a movie by id.
    pub async fn get(&self, id: MovieId) -> Result<Movie, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Movie {id} not found")))
    }

    /// Lists every movie in natural order.
    pub async fn list(&self) -> Result<Vec<Movie>, AppError> {
        self.store.find_all().await
    }

    /// Number of stored movies.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count().await
    }

    /// Replaces a movie's content, keeping its id and creation time.
    pub async fn update(&self, id: MovieId, draft: CreateMovie) -> Result<Movie, AppError> {
        self.validate(&draft)?;
        let movie = self
            .writer
            .replace(id, draft)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Movie {id} not found")))?;
        info!(movie_id = %id, "Movie updated");
        Ok(movie)
    }

    /// Deletes a movie.
    pub async fn delete(&self, id: MovieId) -> Result<(), AppError> {
        if !self.writer.remove(id).await? {
            return Err(AppError::not_found(format!("Movie {id} not found")));
        }
        info!(movie_id = %id, "Movie deleted");
        Ok(())
    }

    /// Validates every draft, then persists them in order.
    ///
    /// Nothing is written if any draft is invalid.
    pub async fn import(&self, drafts: Vec<CreateMovie>) -> Result<Vec<Movie>, AppError> {
        for (index, draft) in drafts.iter().enumerate() {
            self.validate(draft).map_err(|e| {
                AppError::new(
                    e.kind,
                    format!("Movie #{index} ('{}'): {}", draft.title, e.message),
                )
            })?;
        }

        let mut movies = Vec::with_capacity(drafts.len());
        for draft in drafts {
            movies.push(self.writer.insert(draft).await?);
        }
        info!(count = movies.len(), "Movies imported");
        Ok(movies)
    }
}
