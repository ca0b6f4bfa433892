//! JSON seed files.
//!
//! A seed file is a JSON array of write-side drafts. Drafts are returned
//! unvalidated; callers push them through the catalog service so the
//! usual validation applies.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use moviedb_core::error::{AppError, ErrorKind};
use moviedb_core::result::AppResult;

/// Read and parse a seed file.
pub async fn load_drafts<D: DeserializeOwned>(path: impl AsRef<Path>) -> AppResult<Vec<D>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Store,
            format!("Failed to read seed file {}: {e}", path.display()),
            e,
        )
    })?;

    let drafts = parse_drafts(&raw).map_err(|e| {
        AppError::new(
            e.kind,
            format!("Seed file {}: {}", path.display(), e.message),
        )
    })?;

    info!(path = %path.display(), count = drafts.len(), "Loaded seed file");
    Ok(drafts)
}

/// Parse a JSON array of drafts.
pub fn parse_drafts<D: DeserializeOwned>(raw: &str) -> AppResult<Vec<D>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedb_entity::movie::{CreateMovie, Genre};

    #[test]
    fn test_parse_drafts() {
        let drafts: Vec<CreateMovie> = parse_drafts(
            r#"[
                {"title": "Inception", "year": 2010, "imdbRating": 8.8, "genres": ["SCI_FI", "THRILLER"]},
                {"title": "Up", "year": 2009, "imdbRating": 8.2}
            ]"#,
        )
        .unwrap();
        assert_eq!(drafts.len(), 2);
        assert!(drafts[0].genres.contains(&Genre::ScienceFiction));
        assert!(drafts[1].genres.is_empty());
    }

    #[test]
    fn test_unknown_genre_fails_parsing() {
        let err = parse_drafts::<CreateMovie>(
            r#"[{"title": "X", "year": 2000, "imdbRating": 5.0, "genres": ["POLKA"]}]"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn test_missing_file_is_store_error() {
        let err = load_drafts::<CreateMovie>("does/not/exist.json").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Store);
    }
}
