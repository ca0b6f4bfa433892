//! Shared test helpers for service integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use moviedb_core::config::query::QueryConfig;
use moviedb_entity::movie::{CreateMovie, Genre, Movie};
use moviedb_service::{MovieCatalogService, MovieQueryService, PageResolver};
use moviedb_store::MemoryStore;

/// Services wired over one shared in-memory store.
pub struct TestApp {
    /// Store backing both services.
    pub store: Arc<MemoryStore<Movie>>,
    /// Query service under test.
    pub queries: MovieQueryService,
    /// Catalog service under test.
    pub catalog: MovieCatalogService,
}

impl TestApp {
    /// Build an app whose store holds the given drafts.
    pub async fn with_movies(drafts: Vec<CreateMovie>) -> Self {
        Self::with_config(drafts, QueryConfig::default()).await
    }

    /// Build an app with custom query settings.
    pub async fn with_config(drafts: Vec<CreateMovie>, config: QueryConfig) -> Self {
        let store = Arc::new(MemoryStore::<Movie>::new());
        let catalog = MovieCatalogService::from_store(store.clone());
        catalog.import(drafts).await.expect("Failed to seed store");
        let queries = MovieQueryService::new(store.clone(), PageResolver::new(config));
        Self {
            store,
            queries,
            catalog,
        }
    }

    /// The three-movie scenario catalog.
    pub async fn scenario() -> Self {
        Self::with_movies(scenario_movies()).await
    }

    /// A larger catalog with distinct ratings and years.
    pub async fn library() -> Self {
        Self::with_movies(library_movies()).await
    }
}

/// Inception, Up and Her, in that insertion order.
pub fn scenario_movies() -> Vec<CreateMovie> {
    vec![
        CreateMovie::new("Inception", 2010, 8.8)
            .with_genres([Genre::ScienceFiction, Genre::Thriller]),
        CreateMovie::new("Up", 2009, 8.2).with_genres([Genre::Animation]),
        CreateMovie::new("Her", 2013, 8.0).with_genres([Genre::Drama, Genre::Romance]),
    ]
}

/// Seven movies, two of them in the same series.
pub fn library_movies() -> Vec<CreateMovie> {
    vec![
        CreateMovie::new("The Dark Knight", 2008, 9.0)
            .with_genres([Genre::Action, Genre::Crime, Genre::Drama])
            .in_series("The Dark Knight Trilogy"),
        CreateMovie::new("Inception", 2010, 8.8)
            .with_genres([Genre::ScienceFiction, Genre::Thriller]),
        CreateMovie::new("The Dark Knight Rises", 2012, 8.4)
            .with_genres([Genre::Action, Genre::Thriller])
            .in_series("The Dark Knight Trilogy"),
        CreateMovie::new("Up", 2009, 8.2).with_genres([Genre::Animation, Genre::Family]),
        CreateMovie::new("Her", 2013, 8.0).with_genres([Genre::Drama, Genre::Romance]),
        CreateMovie::new("Dark City", 1998, 7.6)
            .with_genres([Genre::Mystery, Genre::ScienceFiction]),
        CreateMovie::new("Paddington", 2014, 7.3).with_genres([Genre::Family, Genre::Comedy]),
    ]
}

/// Titles of the given movies, in order.
pub fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}
