//! Data file validation command.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use moviedb_core::error::AppError;
use moviedb_entity::movie::{CreateMovie, Movie};
use moviedb_service::MovieCatalogService;
use moviedb_store::{MemoryStore, seed};

/// Validation failure row for table output
#[derive(Debug, Serialize, Tabled)]
struct InvalidRow {
    /// Position in the data file
    #[tabled(rename = "#")]
    index: usize,
    /// Title as written
    #[tabled(rename = "Title")]
    title: String,
    /// What is wrong
    #[tabled(rename = "Problem")]
    problem: String,
}

/// Validate every record in the data file without stopping at the first failure
pub async fn execute(path: &str, format: OutputFormat) -> Result<(), AppError> {
    let drafts: Vec<CreateMovie> = seed::load_drafts(path).await?;
    let catalog = MovieCatalogService::from_store(Arc::new(MemoryStore::<Movie>::new()));

    let mut invalid = Vec::new();
    for (index, draft) in drafts.iter().enumerate() {
        if let Err(e) = catalog.validate(draft) {
            invalid.push(InvalidRow {
                index,
                title: draft.title.clone(),
                problem: e.message,
            });
        }
        if draft.has_unnamed_series() && format == OutputFormat::Table {
            output::print_warning(&format!(
                "#{index} '{}' is part of a series without a series name",
                draft.title
            ));
        }
    }

    if invalid.is_empty() {
        output::print_success(&format!("{} records in '{path}' are valid", drafts.len()));
        return Ok(());
    }

    output::print_list(&invalid, format);
    Err(AppError::validation(format!(
        "{} of {} records in '{path}' are invalid",
        invalid.len(),
        drafts.len()
    )))
}
