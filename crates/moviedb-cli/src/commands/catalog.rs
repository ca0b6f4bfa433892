//! Lookup commands: show one movie, list all.

use clap::Args;

use super::App;
use crate::output::{self, OutputFormat};
use moviedb_core::error::AppError;
use moviedb_core::types::id::MovieId;
use moviedb_service::MovieView;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Movie ID
    pub id: MovieId,
}

/// Show one movie
pub async fn show(args: &ShowArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let movie = app.catalog.get(args.id).await?;
    output::print_movie(&MovieView::from(&movie), format);
    Ok(())
}

/// List every movie in id order
pub async fn list(app: &App, format: OutputFormat) -> Result<(), AppError> {
    let views: Vec<MovieView> = app.catalog.list().await?.iter().map(MovieView::from).collect();
    output::print_movies(&views, format);
    Ok(())
}
