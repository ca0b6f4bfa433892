//! Movie search and listing.

use std::sync::Arc;

use tracing::debug;

use moviedb_core::error::AppError;
use moviedb_core::traits::RecordStore;
use moviedb_core::types::id::{ActorId, AwardId, DirectorId};
use moviedb_core::types::pagination::PageResponse;
use moviedb_core::types::sorting::SortField;
use moviedb_entity::movie::{Genre, Movie, MovieField};

use super::criteria::MovieCriteria;
use super::paging::{PageParams, PageResolver};

/// Read-only movie queries over an injected record store.
///
/// Every operation is one read against the store. Unpaged results come
/// back in natural record order (id ascending); an empty result is a
/// success, never an error.
#[derive(Clone)]
pub struct MovieQueryService {
    /// Record store.
    store: Arc<dyn RecordStore<Movie>>,
    /// Paging defaults and validation.
    resolver: PageResolver,
}

impl MovieQueryService {
    /// Creates a new query service.
    pub fn new(store: Arc<dyn RecordStore<Movie>>, resolver: PageResolver) -> Self {
        Self { store, resolver }
    }

    /// Movies whose title contains `title`, ignoring case. A blank title matches all.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_title(title)).await
    }

    /// Movies released in `year`.
    pub async fn find_by_year(&self, year: i32) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_year(year)).await
    }

    /// Movies released between `start` and `end`, inclusive.
    ///
    /// An inverted range (`start > end`) is not swapped; it matches nothing.
    pub async fn find_by_year_range(&self, start: i32, end: i32) -> Result<Vec<Movie>, AppError> {
        if start > end {
            debug!(start, end, "Inverted year range, result will be empty");
        }
        self.find_unpaged(&MovieCriteria::by_year_range(start, end))
            .await
    }

    /// Movies rated at least `min_rating`.
    pub async fn find_by_min_rating(&self, min_rating: f64) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_min_rating(min_rating))
            .await
    }

    /// Movies flagged as part of a series.
    pub async fn find_series_movies(&self) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::series_only()).await
    }

    /// Movies of the series named exactly `name`.
    pub async fn find_by_series_name(&self, name: &str) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_series_name(name))
            .await
    }

    /// Movies tagged with `genre`.
    pub async fn find_by_genre(&self, genre: Genre) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_genre(genre)).await
    }

    /// Movies tagged with the genre named `token`. Unknown tokens are rejected.
    pub async fn find_by_genre_name(&self, token: &str) -> Result<Vec<Movie>, AppError> {
        let genre: Genre = token.parse()?;
        self.find_by_genre(genre).await
    }

    /// Movies crediting director `id`.
    pub async fn find_by_director(&self, id: DirectorId) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_director(id)).await
    }

    /// Movies crediting actor `id`.
    pub async fn find_by_actor(&self, id: ActorId) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_actor(id)).await
    }

    /// Movies that won award `id`.
    pub async fn find_by_award(&self, id: AwardId) -> Result<Vec<Movie>, AppError> {
        self.find_unpaged(&MovieCriteria::by_award(id)).await
    }

    /// One page of the movies matching `criteria`, ordered as `params` asks.
    pub async fn find_with_filters(
        &self,
        criteria: &MovieCriteria,
        params: &PageParams,
    ) -> Result<PageResponse<Movie>, AppError> {
        let request = self.resolver.resolve(params)?;
        let filter = criteria.to_filter();
        debug!(
            conditions = filter.conditions.len(),
            page = request.page,
            size = request.size,
            sort = %request.sort.field,
            direction = request.sort.direction.as_str(),
            "Running filtered movie query"
        );
        self.store.find_page(&filter, &request).await
    }

    /// Highest rated movies first.
    pub async fn find_top_rated(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<PageResponse<Movie>, AppError> {
        self.find_fixed_order(page, size, SortField::desc(MovieField::ImdbRating.as_str()))
            .await
    }

    /// Most recent release years first.
    pub async fn find_latest(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<PageResponse<Movie>, AppError> {
        self.find_fixed_order(page, size, SortField::desc(MovieField::Year.as_str()))
            .await
    }

    async fn find_fixed_order(
        &self,
        page: Option<i64>,
        size: Option<i64>,
        sort: SortField,
    ) -> Result<PageResponse<Movie>, AppError> {
        let request = self.resolver.resolve_fixed(page, size, sort);
        self.store
            .find_page(&MovieCriteria::default().to_filter(), &request)
            .await
    }

    async fn find_unpaged(&self, criteria: &MovieCriteria) -> Result<Vec<Movie>, AppError> {
        let movies = self
            .store
            .find_matching(&criteria.to_filter(), &SortField::natural())
            .await?;
        debug!(?criteria, matched = movies.len(), "Movie search");
        Ok(movies)
    }
}
