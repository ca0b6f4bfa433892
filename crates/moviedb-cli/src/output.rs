//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use moviedb_core::types::pagination::PageResponse;
use moviedb_service::MovieView;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Movie display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct MovieRow {
    /// Movie ID
    #[tabled(rename = "ID")]
    id: i64,
    /// Title
    #[tabled(rename = "Title")]
    title: String,
    /// Release year
    #[tabled(rename = "Year")]
    year: i32,
    /// IMDb rating
    #[tabled(rename = "Rating")]
    rating: String,
    /// Genres, comma separated
    #[tabled(rename = "Genres")]
    genres: String,
    /// Series name, if any
    #[tabled(rename = "Series")]
    series: String,
}

impl From<&MovieView> for MovieRow {
    fn from(view: &MovieView) -> Self {
        Self {
            id: view.id.value(),
            title: view.title.clone(),
            year: view.year,
            rating: format!("{:.1}", view.imdb_rating),
            genres: view
                .genres
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            series: match (&view.series_name, view.part_of_series) {
                (Some(name), _) => name.clone(),
                (None, true) => "(unnamed)".to_string(),
                (None, false) => String::new(),
            },
        }
    }
}

/// Print a list of movies in the selected format
pub fn print_movies(movies: &[MovieView], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<MovieRow> = movies.iter().map(MovieRow::from).collect();
            print_list(&rows, format);
        }
        OutputFormat::Json => print_item(&movies, format),
    }
}

/// Print one page of movies, with its paging metadata
pub fn print_page(page: &PageResponse<MovieView>, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_movies(&page.content, format);
            println!(
                "Page {} of {} ({} total, size {})",
                page.page + 1,
                page.total_pages.max(1),
                page.total_elements,
                page.size
            );
        }
        OutputFormat::Json => print_item(page, format),
    }
}

/// Print a single movie in the selected format
pub fn print_movie(movie: &MovieView, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_kv("ID", &movie.id.to_string());
            print_kv("Title", &movie.title);
            print_kv("Year", &movie.year.to_string());
            print_kv("Rating", &format!("{:.1}", movie.imdb_rating));
            print_kv("Genres", &MovieRow::from(movie).genres);
            print_kv("Duration", &display_opt(movie.duration.map(|d| format!("{d} min"))));
            print_kv("Part of series", &movie.part_of_series.to_string());
            print_kv("Series", &display_opt(movie.series_name.clone()));
            print_kv("Image URL", &display_opt(movie.image_url.clone()));
            print_kv("Budget", &display_opt(movie.budget.map(|b| format!("{b:.0}"))));
            print_kv("Box office", &display_opt(movie.box_office.map(|b| format!("{b:.0}"))));
            print_kv("Synopsis", &display_opt(movie.synopsis.clone()));
        }
        OutputFormat::Json => print_item(movie, format),
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{item:#?}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

fn display_opt(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
