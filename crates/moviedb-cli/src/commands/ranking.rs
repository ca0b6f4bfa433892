//! Fixed-order listings: top rated and latest.

use clap::Args;

use super::App;
use crate::output::{self, OutputFormat};
use moviedb_core::error::AppError;
use moviedb_service::MovieView;

/// Paging arguments for ranked listings
#[derive(Debug, Args)]
pub struct RankingArgs {
    /// Zero-based page number
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,
    /// Page size
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i64>,
}

/// Highest rated movies first
pub async fn top_rated(args: &RankingArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let page = app
        .queries
        .find_top_rated(args.page, args.size)
        .await?
        .map(MovieView::from);
    output::print_page(&page, format);
    Ok(())
}

/// Most recent movies first
pub async fn latest(args: &RankingArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let page = app
        .queries
        .find_latest(args.page, args.size)
        .await?
        .map(MovieView::from);
    output::print_page(&page, format);
    Ok(())
}
