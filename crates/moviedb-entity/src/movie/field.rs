//! Queryable fields of a movie record.

use std::fmt;
use std::str::FromStr;

use moviedb_core::AppError;

/// A movie field that filters and sort keys may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieField {
    Id,
    Title,
    Year,
    Genres,
    ImdbRating,
    ImageUrl,
    Duration,
    PartOfSeries,
    SeriesName,
    Synopsis,
    Budget,
    BoxOffice,
    DirectorIds,
    ActorIds,
    AwardIds,
    CreatedAt,
    UpdatedAt,
}

impl MovieField {
    /// Every queryable field.
    pub const ALL: [MovieField; 17] = [
        Self::Id,
        Self::Title,
        Self::Year,
        Self::Genres,
        Self::ImdbRating,
        Self::ImageUrl,
        Self::Duration,
        Self::PartOfSeries,
        Self::SeriesName,
        Self::Synopsis,
        Self::Budget,
        Self::BoxOffice,
        Self::DirectorIds,
        Self::ActorIds,
        Self::AwardIds,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Wire name, as used in filters and sort keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Year => "year",
            Self::Genres => "genres",
            Self::ImdbRating => "imdbRating",
            Self::ImageUrl => "imageUrl",
            Self::Duration => "duration",
            Self::PartOfSeries => "partOfSeries",
            Self::SeriesName => "seriesName",
            Self::Synopsis => "synopsis",
            Self::Budget => "budget",
            Self::BoxOffice => "boxOffice",
            Self::DirectorIds => "directorIds",
            Self::ActorIds => "actorIds",
            Self::AwardIds => "awardIds",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    /// Rust-side field name.
    pub fn snake_name(&self) -> &'static str {
        match self {
            Self::ImdbRating => "imdb_rating",
            Self::ImageUrl => "image_url",
            Self::PartOfSeries => "part_of_series",
            Self::SeriesName => "series_name",
            Self::BoxOffice => "box_office",
            Self::DirectorIds => "director_ids",
            Self::ActorIds => "actor_ids",
            Self::AwardIds => "award_ids",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            other => other.as_str(),
        }
    }

    /// Look a field up by wire name or snake_case name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name || field.snake_name() == name)
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s.trim()).ok_or_else(|| {
            AppError::validation(format!("Unknown movie field: '{s}'"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_accepts_both_spellings() {
        assert_eq!(MovieField::lookup("imdbRating"), Some(MovieField::ImdbRating));
        assert_eq!(MovieField::lookup("imdb_rating"), Some(MovieField::ImdbRating));
        assert_eq!(MovieField::lookup("title"), Some(MovieField::Title));
        assert_eq!(MovieField::lookup("director"), None);
    }

    #[test]
    fn test_every_field_has_distinct_names() {
        for field in MovieField::ALL {
            assert_eq!(MovieField::lookup(field.as_str()), Some(field));
            assert_eq!(MovieField::lookup(field.snake_name()), Some(field));
        }
        assert_eq!(MovieField::lookup("directorIds"), Some(MovieField::DirectorIds));
        assert_eq!(MovieField::lookup("award_ids"), Some(MovieField::AwardIds));
    }

    #[test]
    fn test_from_str_error() {
        assert!("rating".parse::<MovieField>().unwrap_err().is_validation());
    }
}
