//! Catalog service integration tests.

mod helpers;

use moviedb_core::error::ErrorKind;
use moviedb_core::types::id::MovieId;
use moviedb_entity::movie::{CreateMovie, Genre};
use moviedb_service::MovieView;

use helpers::{TestApp, titles};

#[tokio::test]
async fn test_created_movie_is_searchable() {
    let app = TestApp::scenario().await;
    let movie = app
        .catalog
        .create(CreateMovie::new("Interstellar", 2014, 8.7).with_genres([Genre::ScienceFiction]))
        .await
        .unwrap();
    assert_eq!(movie.id, MovieId(4));

    let found = app.queries.find_by_genre(Genre::ScienceFiction).await.unwrap();
    assert_eq!(titles(&found), vec!["Inception", "Interstellar"]);
    assert_eq!(app.catalog.get(movie.id).await.unwrap(), movie);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let app = TestApp::scenario().await;
    let err = app.catalog.get(MovieId(99)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_update_replaces_content_and_keeps_identity() {
    let app = TestApp::scenario().await;
    let before = app.catalog.get(MovieId(2)).await.unwrap();
    let after = app
        .catalog
        .update(
            MovieId(2),
            CreateMovie::new("Up", 2009, 8.3)
                .with_genres([Genre::Animation, Genre::Adventure])
                .with_duration(96),
        )
        .await
        .unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.duration, Some(96));

    let adventure = app.queries.find_by_genre(Genre::Adventure).await.unwrap();
    assert_eq!(titles(&adventure), vec!["Up"]);
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let app = TestApp::scenario().await;
    let err = app
        .catalog
        .update(MovieId(99), CreateMovie::new("", 2009, 8.3))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_delete_removes_from_queries() {
    let app = TestApp::scenario().await;
    app.catalog.delete(MovieId(3)).await.unwrap();
    assert!(app.queries.find_by_genre(Genre::Drama).await.unwrap().is_empty());
    assert_eq!(app.catalog.count().await.unwrap(), 2);
    assert_eq!(
        app.catalog.delete(MovieId(3)).await.unwrap_err().kind,
        ErrorKind::NotFound
    );
}

#[tokio::test]
async fn test_validation_lists_failing_fields() {
    let app = TestApp::scenario().await;
    let err = app
        .catalog
        .create(CreateMovie::new("Broken", 1700, 12.0))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.message.contains("year"));
    assert!(err.message.contains("imdb_rating"));
}

#[tokio::test]
async fn test_view_round_trip_preserves_genres() {
    let app = TestApp::scenario().await;
    let inception = app.catalog.get(MovieId(1)).await.unwrap();
    let draft = MovieView::from(&inception).into_draft().unwrap();
    assert_eq!(draft.genres, inception.genres);

    let copy = app.catalog.create(draft).await.unwrap();
    assert_eq!(copy.genres, inception.genres);
    assert_eq!(copy.title, inception.title);
}
