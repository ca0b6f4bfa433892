//! Read-side movie projection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use moviedb_core::error::AppError;
use moviedb_core::types::id::MovieId;
use moviedb_entity::movie::{CreateMovie, Genre, Movie};

/// The shape a movie takes when it leaves the service layer.
///
/// Genres are carried as their canonical names. Relationship ids and
/// timestamps are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub genres: BTreeSet<String>,
    pub imdb_rating: f64,
    pub image_url: Option<String>,
    pub duration: Option<i32>,
    #[serde(default)]
    pub part_of_series: bool,
    pub series_name: Option<String>,
    pub synopsis: Option<String>,
    pub budget: Option<f64>,
    pub box_office: Option<f64>,
}

impl MovieView {
    /// Turn the view back into a write-side draft.
    ///
    /// Fails with a validation error if any genre name is unknown.
    pub fn into_draft(self) -> Result<CreateMovie, AppError> {
        let genres = self
            .genres
            .iter()
            .map(|name| name.parse::<Genre>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(CreateMovie {
            title: self.title,
            year: self.year,
            genres,
            imdb_rating: self.imdb_rating,
            image_url: self.image_url,
            duration: self.duration,
            part_of_series: self.part_of_series,
            series_name: self.series_name,
            synopsis: self.synopsis,
            budget: self.budget,
            box_office: self.box_office,
            ..CreateMovie::default()
        })
    }
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            year: movie.year,
            genres: movie.genre_names().into_iter().collect(),
            imdb_rating: movie.imdb_rating,
            image_url: movie.image_url.clone(),
            duration: movie.duration,
            part_of_series: movie.part_of_series,
            series_name: movie.series_name.clone(),
            synopsis: movie.synopsis.clone(),
            budget: movie.budget,
            box_office: movie.box_office,
        }
    }
}

impl From<Movie> for MovieView {
    fn from(movie: Movie) -> Self {
        Self::from(&movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use moviedb_core::traits::Record;

    #[test]
    fn test_projection_uses_canonical_genre_names() {
        let draft = CreateMovie::new("Inception", 2010, 8.8)
            .with_genres([Genre::Thriller, Genre::ScienceFiction]);
        let view = MovieView::from(Movie::from_draft(MovieId(7), draft, Utc::now()));
        assert_eq!(view.id, MovieId(7));
        let genres: Vec<&str> = view.genres.iter().map(String::as_str).collect();
        assert_eq!(genres, vec!["SCIENCE_FICTION", "THRILLER"]);
    }

    #[test]
    fn test_missing_genres_project_to_empty_set() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Up",
            "year": 2009,
            "imdbRating": 8.2,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let view = MovieView::from(&movie);
        assert!(view.genres.is_empty());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["genres"], serde_json::json!([]));
        assert_eq!(json["imdbRating"], serde_json::json!(8.2));
    }

    #[test]
    fn test_into_draft_round_trips_aliases() {
        let mut view = MovieView::from(Movie::from_draft(
            MovieId(1),
            CreateMovie::new("Her", 2013, 8.0),
            Utc::now(),
        ));
        view.genres.insert("sci-fi".to_string());
        let draft = view.clone().into_draft().unwrap();
        assert!(draft.genres.contains(&Genre::ScienceFiction));

        view.genres.insert("POLKA".to_string());
        assert!(view.into_draft().unwrap_err().is_validation());
    }
}
