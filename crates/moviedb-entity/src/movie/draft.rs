//! Write-side movie input.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use moviedb_core::types::id::{ActorId, AwardId, DirectorId};

use super::genre::Genre;
use crate::validation::{validate_image_url, validate_not_blank};

/// Data required to create or replace a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    /// Movie title.
    #[validate(
        length(min = 1, max = 255),
        custom(function = "validate_not_blank")
    )]
    pub title: String,
    /// Release year.
    #[validate(range(min = 1888, max = 2030))]
    pub year: i32,
    /// Genre tags.
    #[serde(default)]
    pub genres: BTreeSet<Genre>,
    /// IMDb rating.
    #[validate(range(min = 0.0, max = 10.0))]
    pub imdb_rating: f64,
    /// Poster URL; empty or http(s).
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,
    /// Running time in minutes.
    #[validate(range(min = 1, max = 600))]
    pub duration: Option<i32>,
    /// Whether the movie belongs to a series.
    #[serde(default)]
    pub part_of_series: bool,
    /// Series the movie belongs to.
    pub series_name: Option<String>,
    /// Plot summary.
    #[validate(length(max = 1000))]
    pub synopsis: Option<String>,
    /// Production budget.
    pub budget: Option<f64>,
    /// Worldwide box office.
    pub box_office: Option<f64>,
    /// Directors.
    #[serde(default)]
    pub director_ids: BTreeSet<DirectorId>,
    /// Cast.
    #[serde(default)]
    pub actor_ids: BTreeSet<ActorId>,
    /// Awards won.
    #[serde(default)]
    pub award_ids: BTreeSet<AwardId>,
}

impl CreateMovie {
    /// Start a draft with the required fields set.
    pub fn new(title: impl Into<String>, year: i32, imdb_rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            imdb_rating,
            ..Self::default()
        }
    }

    /// Set the genre tags.
    pub fn with_genres(mut self, genres: impl IntoIterator<Item = Genre>) -> Self {
        self.genres = genres.into_iter().collect();
        self
    }

    /// Mark the movie as part of the named series.
    pub fn in_series(mut self, name: impl Into<String>) -> Self {
        self.part_of_series = true;
        self.series_name = Some(name.into());
        self
    }

    /// Set the running time.
    pub fn with_duration(mut self, minutes: i32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Set the poster URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Whether the series flag is set without a series name.
    pub fn has_unnamed_series(&self) -> bool {
        self.part_of_series
            && self
                .series_name
                .as_deref()
                .is_none_or(|name| name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> CreateMovie {
        CreateMovie::new("Inception", 2010, 8.8)
            .with_genres([Genre::ScienceFiction, Genre::Thriller])
            .with_duration(148)
            .with_image_url("https://example.com/inception.jpg")
    }

    #[test]
    fn test_valid_draft() {
        assert!(inception().validate().is_ok());
    }

    #[test]
    fn test_year_bounds() {
        assert!(CreateMovie::new("Roundhay", 1888, 5.0).validate().is_ok());
        assert!(CreateMovie::new("Too Early", 1887, 5.0).validate().is_err());
        assert!(CreateMovie::new("Too Late", 2031, 5.0).validate().is_err());
    }

    #[test]
    fn test_rating_and_duration_bounds() {
        assert!(CreateMovie::new("Perfect", 2000, 10.0).validate().is_ok());
        assert!(CreateMovie::new("Overrated", 2000, 10.1).validate().is_err());
        assert!(CreateMovie::new("Short", 2000, 5.0).with_duration(0).validate().is_err());
        assert!(CreateMovie::new("Long", 2000, 5.0).with_duration(601).validate().is_err());
    }

    #[test]
    fn test_title_must_not_be_blank_or_too_long() {
        assert!(CreateMovie::new("", 2000, 5.0).validate().is_err());
        assert!(CreateMovie::new("   ", 2000, 5.0).validate().is_err());
        assert!(CreateMovie::new("x".repeat(256), 2000, 5.0).validate().is_err());
        assert!(CreateMovie::new("x".repeat(255), 2000, 5.0).validate().is_ok());
    }

    #[test]
    fn test_image_url() {
        assert!(inception().with_image_url("").validate().is_ok());
        assert!(inception().with_image_url("ftp://example.com/a.jpg").validate().is_err());
        assert!(inception().with_image_url("not a url").validate().is_err());
    }

    #[test]
    fn test_synopsis_length() {
        let mut draft = inception();
        draft.synopsis = Some("a".repeat(1001));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_unnamed_series() {
        let mut draft = inception();
        draft.part_of_series = true;
        assert!(draft.has_unnamed_series());
        assert!(!inception().in_series("Dreams").has_unnamed_series());
    }

    #[test]
    fn test_deserialize_without_genres() {
        let draft: CreateMovie =
            serde_json::from_str(r#"{"title":"Up","year":2009,"imdbRating":8.2}"#).unwrap();
        assert!(draft.genres.is_empty());
        assert!(!draft.part_of_series);
    }
}
