//! # moviedb-store
//!
//! Record store implementations for MovieDB. The in-memory store serves any
//! record type implementing `moviedb_core::traits::Record`; the seed module
//! loads write-side drafts from JSON files.

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
