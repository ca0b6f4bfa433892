//! Movie entity model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use moviedb_core::traits::{Queryable, Record};
use moviedb_core::types::filter::FilterValue;
use moviedb_core::types::id::{ActorId, AwardId, DirectorId, MovieId};

use super::draft::CreateMovie;
use super::field::MovieField;
use super::genre::Genre;

/// A movie in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Store-assigned identifier.
    pub id: MovieId,
    /// Movie title.
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Genre tags.
    #[serde(default)]
    pub genres: BTreeSet<Genre>,
    /// IMDb rating in `[0.0, 10.0]`.
    pub imdb_rating: f64,
    /// Poster URL.
    pub image_url: Option<String>,
    /// Running time in minutes.
    pub duration: Option<i32>,
    /// Whether the movie belongs to a series.
    #[serde(default)]
    pub part_of_series: bool,
    /// Series the movie belongs to.
    pub series_name: Option<String>,
    /// Plot summary.
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
    /// When the movie was first persisted.
    pub created_at: DateTime<Utc>,
    /// When the movie was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Return the value of a field.
    pub fn field(&self, field: MovieField) -> FilterValue {
        match field {
            MovieField::Id => self.id.value().into(),
            MovieField::Title => self.title.as_str().into(),
            MovieField::Year => self.year.into(),
            MovieField::Genres => FilterValue::StringList(self.genre_names()),
            MovieField::ImdbRating => self.imdb_rating.into(),
            MovieField::ImageUrl => self.image_url.clone().into(),
            MovieField::Duration => self.duration.into(),
            MovieField::PartOfSeries => self.part_of_series.into(),
            MovieField::SeriesName => self.series_name.clone().into(),
            MovieField::Synopsis => self.synopsis.clone().into(),
            MovieField::Budget => self.budget.into(),
            MovieField::BoxOffice => self.box_office.into(),
            MovieField::DirectorIds => id_list(&self.director_ids),
            MovieField::ActorIds => id_list(&self.actor_ids),
            MovieField::AwardIds => id_list(&self.award_ids),
            MovieField::CreatedAt => self.created_at.timestamp_millis().into(),
            MovieField::UpdatedAt => self.updated_at.timestamp_millis().into(),
        }
    }

    /// Canonical names of the movie's genres.
    pub fn genre_names(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.as_str().to_string()).collect()
    }
}

fn id_list<I: Copy + Into<i64>>(ids: &BTreeSet<I>) -> FilterValue {
    FilterValue::IntegerList(ids.iter().map(|id| (*id).into()).collect())
}

impl Queryable for Movie {
    fn field_value(&self, field: &str) -> Option<FilterValue> {
        MovieField::lookup(field).map(|f| self.field(f))
    }
}

impl Record for Movie {
    type Id = MovieId;
    type Draft = CreateMovie;

    const KIND: &'static str = "Movie";

    fn id(&self) -> MovieId {
        self.id
    }

    fn from_draft(id: MovieId, draft: CreateMovie, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            year: draft.year,
            genres: draft.genres,
            imdb_rating: draft.imdb_rating,
            image_url: draft.image_url,
            duration: draft.duration,
            part_of_series: draft.part_of_series,
            series_name: draft.series_name,
            synopsis: draft.synopsis,
            budget: draft.budget,
            box_office: draft.box_office,
            director_ids: draft.director_ids,
            actor_ids: draft.actor_ids,
            award_ids: draft.award_ids,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: CreateMovie, now: DateTime<Utc>) {
        let created_at = self.created_at;
        *self = Self::from_draft(self.id, draft, now);
        self.created_at = created_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        let draft = CreateMovie::new("Inception", 2010, 8.8)
            .with_genres([Genre::ScienceFiction, Genre::Thriller]);
        Movie::from_draft(MovieId(1), draft, Utc::now())
    }

    #[test]
    fn test_field_values() {
        let m = movie();
        assert_eq!(m.field_value("id"), Some(FilterValue::Integer(1)));
        assert_eq!(m.field_value("year"), Some(FilterValue::Integer(2010)));
        assert_eq!(m.field_value("imdb_rating"), Some(FilterValue::Float(8.8)));
        assert_eq!(m.field_value("seriesName"), Some(FilterValue::Null));
        assert_eq!(
            m.field_value("genres"),
            Some(FilterValue::StringList(vec![
                "SCIENCE_FICTION".to_string(),
                "THRILLER".to_string()
            ]))
        );
        assert_eq!(m.field_value("directorIds"), Some(FilterValue::IntegerList(Vec::new())));
        assert_eq!(m.field_value("director"), None);
    }

    #[test]
    fn test_apply_draft_keeps_identity() {
        let mut m = movie();
        let created_at = m.created_at;
        let later = created_at + chrono::Duration::seconds(5);
        m.apply_draft(CreateMovie::new("Inception (Director's Cut)", 2010, 8.9), later);
        assert_eq!(m.id, MovieId(1));
        assert_eq!(m.created_at, created_at);
        assert_eq!(m.updated_at, later);
        assert!(m.genres.is_empty());
    }
}
