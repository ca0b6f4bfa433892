//! Core type definitions used across the MovieDB workspace.

pub mod filter;
pub mod id;
pub mod pagination;
pub mod sorting;

pub use filter::{FilterField, FilterOp, FilterSpec, FilterValue};
pub use id::*;
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField, TIE_BREAK_FIELD, sort_records};
