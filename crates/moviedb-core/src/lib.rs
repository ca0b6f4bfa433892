//! # moviedb-core
//!
//! Core crate for MovieDB. Contains the record store traits, configuration
//! schemas, typed identifiers, pagination/sorting/filter types with
//! predicate evaluation, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MovieDB crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
