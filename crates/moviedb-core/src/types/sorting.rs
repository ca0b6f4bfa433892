//! Sorting types for list queries.

use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::traits::Queryable;

use super::filter::unknown_field;

/// Field name every store uses as the secondary, tie-breaking sort key.
pub const TIE_BREAK_FIELD: &str = "id";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Interpret a raw direction string.
    ///
    /// Only the literal `desc` (any case) selects descending order; anything
    /// else, including padded or unrecognised tokens, is ascending.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Return the lowercase keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sort specification consisting of a field name and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Natural record order: ascending by id.
    pub fn natural() -> Self {
        Self::asc(TIE_BREAK_FIELD)
    }
}

/// Order records by `sort`, then by id ascending.
///
/// The sort is stable, so records that tie on both keys keep their input
/// order. Fails when a record does not expose the sort field.
pub fn sort_records<R: Queryable>(records: Vec<R>, sort: &SortField) -> AppResult<Vec<R>> {
    let mut keyed = records
        .into_iter()
        .map(|record| {
            let primary = record
                .field_value(&sort.field)
                .ok_or_else(|| unknown_field(&sort.field))?;
            let tie = record
                .field_value(TIE_BREAK_FIELD)
                .ok_or_else(|| unknown_field(TIE_BREAK_FIELD))?;
            Ok((primary, tie, record))
        })
        .collect::<AppResult<Vec<_>>>()?;

    keyed.sort_by(|a, b| {
        sort.direction
            .apply(a.0.sort_cmp(&b.0))
            .then_with(|| a.1.sort_cmp(&b.1))
    });

    Ok(keyed.into_iter().map(|(_, _, record)| record).collect())
}
