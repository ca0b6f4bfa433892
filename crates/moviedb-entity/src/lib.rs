//! # moviedb-entity
//!
//! Domain entity models for MovieDB. Every struct in this crate is either a
//! stored record or a write-side draft. Records implement the core
//! `Record` and `Queryable` traits so any record store can filter and sort
//! them by field name.

pub mod award;
pub mod movie;
pub mod person;

mod validation;
