//! Core traits defined in `moviedb-core` and implemented by other crates.

pub mod record;
pub mod repository;

pub use record::{Queryable, Record};
pub use repository::{RecordStore, RecordWriter};
