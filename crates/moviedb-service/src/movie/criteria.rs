//! Optional movie filter criteria and their translation into a store predicate.

use serde::{Deserialize, Serialize};

use moviedb_core::types::filter::{FilterField, FilterSpec};
use moviedb_core::types::id::{ActorId, AwardId, DirectorId};
use moviedb_entity::movie::{Genre, MovieField};

/// Inclusive release-year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included.
    pub start: i32,
    /// Last year included.
    pub end: i32,
}

impl YearRange {
    /// Whether `start` lies after `end`. Such a range matches nothing.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Optional constraints on a movie query.
///
/// Every field is independent; `None` (or `false` for `series_only`)
/// means "no constraint on this field". The resulting predicate is the
/// logical AND of the present constraints, so the default value matches
/// every movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCriteria {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Exact release year.
    pub year: Option<i32>,
    /// Inclusive release-year range.
    pub year_range: Option<YearRange>,
    /// Minimum IMDb rating, inclusive.
    pub min_rating: Option<f64>,
    /// Genre the movie must carry.
    pub genre: Option<Genre>,
    /// Exact, case-sensitive series name.
    pub series_name: Option<String>,
    /// Only movies flagged as part of a series.
    #[serde(default)]
    pub series_only: bool,
    /// Director the movie must credit.
    pub director_id: Option<DirectorId>,
    /// Actor the movie must credit.
    pub actor_id: Option<ActorId>,
    /// Award the movie must have won.
    pub award_id: Option<AwardId>,
}

impl MovieCriteria {
    /// The composite filter: any combination of title, year and minimum rating.
    pub fn composite(title: Option<String>, year: Option<i32>, min_rating: Option<f64>) -> Self {
        Self {
            title,
            year,
            min_rating,
            ..Self::default()
        }
    }

    /// Title substring only.
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Exact year only.
    pub fn by_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    /// Year range only.
    pub fn by_year_range(start: i32, end: i32) -> Self {
        Self {
            year_range: Some(YearRange { start, end }),
            ..Self::default()
        }
    }

    /// Minimum rating only.
    pub fn by_min_rating(min_rating: f64) -> Self {
        Self {
            min_rating: Some(min_rating),
            ..Self::default()
        }
    }

    /// Genre membership only.
    pub fn by_genre(genre: Genre) -> Self {
        Self {
            genre: Some(genre),
            ..Self::default()
        }
    }

    /// Series name only.
    pub fn by_series_name(name: impl Into<String>) -> Self {
        Self {
            series_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Series flag only.
    pub fn series_only() -> Self {
        Self {
            series_only: true,
            ..Self::default()
        }
    }

    /// Directed by `id` only.
    pub fn by_director(id: DirectorId) -> Self {
        Self {
            director_id: Some(id),
            ..Self::default()
        }
    }

    /// Starring `id` only.
    pub fn by_actor(id: ActorId) -> Self {
        Self {
            actor_id: Some(id),
            ..Self::default()
        }
    }

    /// Winner of award `id` only.
    pub fn by_award(id: AwardId) -> Self {
        Self {
            award_id: Some(id),
            ..Self::default()
        }
    }

    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.to_filter().is_unconstrained()
    }

    /// Build the store predicate.
    pub fn to_filter(&self) -> FilterSpec {
        FilterSpec::all()
            .and_maybe(
                self.title
                    .as_ref()
                    .map(|t| FilterField::contains_ignore_case(MovieField::Title.as_str(), t.as_str())),
            )
            .and_maybe(self.year.map(|y| FilterField::eq(MovieField::Year.as_str(), y)))
            .and_maybe(
                self.year_range
                    .map(|r| FilterField::gte(MovieField::Year.as_str(), r.start)),
            )
            .and_maybe(
                self.year_range
                    .map(|r| FilterField::lte(MovieField::Year.as_str(), r.end)),
            )
            .and_maybe(
                self.min_rating
                    .map(|r| FilterField::gte(MovieField::ImdbRating.as_str(), r)),
            )
            .and_maybe(
                self.genre
                    .map(|g| FilterField::includes(MovieField::Genres.as_str(), g.as_str())),
            )
            .and_maybe(
                self.series_name
                    .as_ref()
                    .map(|n| FilterField::eq(MovieField::SeriesName.as_str(), n.as_str())),
            )
            .and_maybe(
                self.series_only
                    .then(|| FilterField::eq(MovieField::PartOfSeries.as_str(), true)),
            )
            .and_maybe(
                self.director_id
                    .map(|id| FilterField::includes(MovieField::DirectorIds.as_str(), id.value())),
            )
            .and_maybe(
                self.actor_id
                    .map(|id| FilterField::includes(MovieField::ActorIds.as_str(), id.value())),
            )
            .and_maybe(
                self.award_id
                    .map(|id| FilterField::includes(MovieField::AwardIds.as_str(), id.value())),
            )
    }
}
