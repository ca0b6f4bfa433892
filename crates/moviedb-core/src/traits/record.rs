//! Traits describing what a record store needs to know about a record.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::filter::FilterValue;

/// Field-level read access used to evaluate filters and sort keys.
pub trait Queryable {
    /// Return the value of the named field, or `None` when the record has no
    /// such field. Absent optional values are reported as [`FilterValue::Null`].
    fn field_value(&self, field: &str) -> Option<FilterValue>;
}

/// A record that can be persisted in a record store.
///
/// Records are created from a `Draft` (the write-side input without an id);
/// the store assigns the id on first persist. Every record must expose its
/// id through [`Queryable`] under the field name `"id"`.
pub trait Record: Queryable + Clone + Send + Sync + 'static {
    /// Identifier type handed out by the store.
    type Id: Copy + Ord + fmt::Debug + fmt::Display + From<i64> + Send + Sync + 'static;
    /// Write-side input.
    type Draft: Send + Sync + 'static;

    /// Human-readable record kind used in log and error messages.
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Build a freshly persisted record.
    fn from_draft(id: Self::Id, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Overwrite the record's fields from a draft, keeping its id.
    fn apply_draft(&mut self, draft: Self::Draft, now: DateTime<Utc>);
}
