//! Single-criterion search commands.

use clap::{Args, Subcommand};

use super::App;
use crate::output::{self, OutputFormat};
use moviedb_core::error::AppError;
use moviedb_service::MovieView;

/// Arguments for search commands
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search subcommand
    #[command(subcommand)]
    pub command: SearchCommand,
}

/// Search subcommands
#[derive(Debug, Subcommand)]
pub enum SearchCommand {
    /// Titles containing TEXT, ignoring case
    Title {
        /// Text to look for
        text: String,
    },
    /// Movies released in YEAR
    Year {
        /// Release year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Movies released between START and END, inclusive
    Range {
        /// First year
        #[arg(allow_negative_numbers = true)]
        start: i32,
        /// Last year
        #[arg(allow_negative_numbers = true)]
        end: i32,
    },
    /// Movies rated at least MIN
    Rating {
        /// Minimum IMDb rating
        min: f64,
    },
    /// Movies tagged with GENRE (e.g. DRAMA, sci-fi)
    Genre {
        /// Genre name
        genre: String,
    },
    /// Series movies, optionally of one named series
    Series {
        /// Exact series name
        name: Option<String>,
    },
}

/// Execute search commands
pub async fn execute(args: &SearchArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    let queries = &app.queries;
    let movies = match &args.command {
        SearchCommand::Title { text } => queries.find_by_title(text).await?,
        SearchCommand::Year { year } => queries.find_by_year(*year).await?,
        SearchCommand::Range { start, end } => queries.find_by_year_range(*start, *end).await?,
        SearchCommand::Rating { min } => queries.find_by_min_rating(*min).await?,
        SearchCommand::Genre { genre } => queries.find_by_genre_name(genre).await?,
        SearchCommand::Series { name: Some(name) } => queries.find_by_series_name(name).await?,
        SearchCommand::Series { name: None } => queries.find_series_movies().await?,
    };

    let views: Vec<MovieView> = movies.iter().map(MovieView::from).collect();
    output::print_movies(&views, format);
    Ok(())
}
