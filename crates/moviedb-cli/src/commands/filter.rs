//! Combined filter command.

use clap::Args;

use super::App;
use crate::output::{self, OutputFormat};
use moviedb_core::error::AppError;
use moviedb_service::{MovieCriteria, MovieView, PageParams};

/// Arguments for the filter command. Every criterion is optional.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Title substring, case-insensitive
    #[arg(long)]
    pub title: Option<String>,
    /// Exact release year
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,
    /// Minimum IMDb rating
    #[arg(long)]
    pub min_rating: Option<f64>,
    /// Zero-based page number
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,
    /// Page size
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i64>,
    /// Field to sort by (e.g. title, year, imdbRating)
    #[arg(long)]
    pub sort_by: Option<String>,
    /// Sort direction: asc or desc
    #[arg(long)]
    pub sort_dir: Option<String>,
}

impl FilterArgs {
    fn criteria(&self) -> MovieCriteria {
        MovieCriteria::composite(self.title.clone(), self.year, self.min_rating)
    }

    fn params(&self) -> PageParams {
        PageParams {
            page: self.page,
            size: self.size,
            sort_by: self.sort_by.clone(),
            sort_dir: self.sort_dir.clone(),
        }
    }
}

/// Execute the filter command
pub async fn execute(args: &FilterArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let page = app
        .queries
        .find_with_filters(&args.criteria(), &args.params())
        .await?
        .map(MovieView::from);
    output::print_page(&page, format);
    Ok(())
}
