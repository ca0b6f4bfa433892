//! CLI command definitions and dispatch.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod ranking;
pub mod search;
pub mod validate;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::output::OutputFormat;
use moviedb_core::config::AppConfig;
use moviedb_core::error::AppError;
use moviedb_entity::movie::{CreateMovie, Movie};
use moviedb_service::{MovieCatalogService, MovieQueryService, PageResolver};
use moviedb_store::{MemoryStore, seed};

/// MovieDB: search and inspect a movie catalog
#[derive(Debug, Parser)]
#[command(name = "moviedb", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// JSON seed file; overrides `store.seed_path`
    #[arg(short, long)]
    pub data: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Single-criterion searches
    Search(search::SearchArgs),
    /// Combined filter with paging and sorting
    Filter(filter::FilterArgs),
    /// Highest rated movies first
    TopRated(ranking::RankingArgs),
    /// Most recent movies first
    Latest(ranking::RankingArgs),
    /// Show one movie
    Show(catalog::ShowArgs),
    /// List every movie
    List,
    /// Validate every record in the data file
    Validate,
    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Config => config::execute(&config, self.format),
            Commands::Validate => {
                let path = self.seed_path(&config)?;
                validate::execute(&path, self.format).await
            }
            command => {
                let app = self.build_app(&config).await?;
                match command {
                    Commands::Search(args) => search::execute(args, &app, self.format).await,
                    Commands::Filter(args) => filter::execute(args, &app, self.format).await,
                    Commands::TopRated(args) => {
                        ranking::top_rated(args, &app, self.format).await
                    }
                    Commands::Latest(args) => ranking::latest(args, &app, self.format).await,
                    Commands::Show(args) => catalog::show(args, &app, self.format).await,
                    Commands::List => catalog::list(&app, self.format).await,
                    Commands::Config | Commands::Validate => Ok(()),
                }
            }
        }
    }

    fn seed_path(&self, config: &AppConfig) -> Result<String, AppError> {
        self.data
            .clone()
            .or_else(|| config.store.seed_path.clone())
            .ok_or_else(|| {
                AppError::configuration("No data file: pass --data or set store.seed_path")
            })
    }

    /// Wire the store and services, seeding the store from the data file.
    async fn build_app(&self, config: &AppConfig) -> Result<App, AppError> {
        let store = Arc::new(MemoryStore::<Movie>::new());
        let catalog = MovieCatalogService::from_store(store.clone());

        match self.seed_path(config) {
            Ok(path) => {
                let drafts: Vec<CreateMovie> = seed::load_drafts(&path).await?;
                catalog.import(drafts).await?;
            }
            Err(_) => warn!("No data file configured, starting with an empty catalog"),
        }

        let queries = MovieQueryService::new(store, PageResolver::new(config.query.clone()));
        info!(movies = catalog.count().await?, "Catalog ready");

        Ok(App { queries, catalog })
    }
}

/// Services shared by the data commands.
pub struct App {
    /// Read-side queries.
    pub queries: MovieQueryService,
    /// Lookups by id and full listing.
    pub catalog: MovieCatalogService,
}
