//! # moviedb-service
//!
//! Service layer for MovieDB. The query service turns optional filter
//! criteria and raw paging input into record store queries; the catalog
//! services validate and persist movies, directors, actors and awards; the
//! projection module maps records to their transport form.
//!
//! Services follow constructor injection: the record store handle is
//! provided at construction time via `Arc`.

pub mod catalog;
pub mod movie;

pub use catalog::{ActorCatalogService, AwardCatalogService, DirectorCatalogService, RecordCatalog};
pub use movie::{
    MovieCatalogService, MovieCriteria, MovieQueryService, MovieView, PageParams, PageResolver,
};
