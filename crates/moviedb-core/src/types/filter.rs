//! Filter types for predicate-based queries.
//!
//! A [`FilterSpec`] is a conjunction of [`FilterField`] conditions. Stores
//! evaluate it against any [`Queryable`] record; an empty spec matches
//! everything.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::Queryable;

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality (case-sensitive for strings).
    Eq,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
    /// Case-insensitive substring match.
    ContainsIgnoreCase,
    /// Set membership: the field's list contains the value.
    Includes,
}

/// A dynamic value, used both as a filter operand and as a record's field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// A set of string tags.
    StringList(Vec<String>),
    /// A set of integer identifiers.
    IntegerList(Vec<i64>),
    /// Absent value.
    Null,
}

impl FilterValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Ordering used by comparison operators. `None` when the two values
    /// are not comparable (different kinds, nulls, NaN).
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }

    /// Total ordering used for sorting. Nulls sort first.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        fn rank(value: &FilterValue) -> u8 {
            match value {
                FilterValue::Null => 0,
                FilterValue::Boolean(_) => 1,
                FilterValue::Integer(_) | FilterValue::Float(_) => 2,
                FilterValue::String(_) => 3,
                FilterValue::StringList(_) => 4,
                FilterValue::IntegerList(_) => 5,
            }
        }

        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::StringList(a), Self::StringList(b)) => a.cmp(b),
            (Self::IntegerList(a), Self::IntegerList(b)) => a.cmp(b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => rank(self).cmp(&rank(other)),
            },
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A single filter condition on a named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The field name to filter on.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<FilterValue>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Shorthand for an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    /// Shorthand for a lower inclusive bound.
    pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Gte, value)
    }

    /// Shorthand for an upper inclusive bound.
    pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Lte, value)
    }

    /// Shorthand for a case-insensitive substring filter.
    pub fn contains_ignore_case(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(field, FilterOp::ContainsIgnoreCase, FilterValue::String(needle.into()))
    }

    /// Shorthand for a set-membership filter.
    pub fn includes(field: impl Into<String>, member: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Includes, member)
    }

    /// Test this condition against a record's field value.
    ///
    /// A null field value never satisfies a condition.
    pub fn matches(&self, actual: &FilterValue) -> bool {
        match self.op {
            FilterOp::Eq => actual.compare(&self.value) == Some(Ordering::Equal),
            FilterOp::Gte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterOp::Lte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FilterOp::ContainsIgnoreCase => match (actual, &self.value) {
                (FilterValue::String(haystack), FilterValue::String(needle)) => haystack
                    .to_lowercase()
                    .contains(&needle.to_lowercase()),
                _ => false,
            },
            FilterOp::Includes => match (actual, &self.value) {
                (FilterValue::StringList(items), FilterValue::String(member)) => {
                    items.iter().any(|item| item == member)
                }
                (FilterValue::IntegerList(items), FilterValue::Integer(member)) => {
                    items.contains(member)
                }
                _ => false,
            },
        }
    }
}

/// A conjunction of filter conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Conditions that must all hold.
    pub conditions: Vec<FilterField>,
}

impl FilterSpec {
    /// A spec with no conditions; matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a condition.
    pub fn and(mut self, condition: FilterField) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add a condition only when `condition` is `Some`.
    pub fn and_maybe(self, condition: Option<FilterField>) -> Self {
        match condition {
            Some(condition) => self.and(condition),
            None => self,
        }
    }

    /// Whether the filter constrains nothing.
    pub fn is_unconstrained(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the filter against a record.
    ///
    /// Fails with a validation error when a condition names a field the
    /// record does not have.
    pub fn matches<R: Queryable>(&self, record: &R) -> AppResult<bool> {
        for condition in &self.conditions {
            let actual = record
                .field_value(&condition.field)
                .ok_or_else(|| unknown_field(&condition.field))?;
            if !condition.matches(&actual) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

pub(crate) fn unknown_field(field: &str) -> AppError {
    AppError::validation(format!("Unknown field '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        title: &'static str,
        year: i64,
        rating: f64,
        tags: Vec<&'static str>,
        cast: Vec<i64>,
        series: Option<&'static str>,
    }

    impl Queryable for Row {
        fn field_value(&self, field: &str) -> Option<FilterValue> {
            match field {
                "title" => Some(self.title.into()),
                "year" => Some(self.year.into()),
                "rating" => Some(self.rating.into()),
                "tags" => Some(FilterValue::StringList(
                    self.tags.iter().map(|t| t.to_string()).collect(),
                )),
                "cast" => Some(FilterValue::IntegerList(self.cast.clone())),
                "series" => Some(self.series.into()),
                _ => None,
            }
        }
    }

    fn row() -> Row {
        Row {
            title: "Inception",
            year: 2010,
            rating: 8.8,
            tags: vec!["SCIENCE_FICTION", "THRILLER"],
            cast: vec![3, 7],
            series: None,
        }
    }

    #[test]
    fn test_empty_spec_matches_everything() {
        assert!(FilterSpec::all().matches(&row()).unwrap());
    }

    #[test]
    fn test_contains_ignore_case() {
        let r = row();
        assert!(FilterSpec::all()
            .and(FilterField::contains_ignore_case("title", "INCEP"))
            .matches(&r)
            .unwrap());
        assert!(FilterSpec::all()
            .and(FilterField::contains_ignore_case("title", ""))
            .matches(&r)
            .unwrap());
        assert!(!FilterSpec::all()
            .and(FilterField::contains_ignore_case("title", "matrix"))
            .matches(&r)
            .unwrap());
    }

    #[test]
    fn test_numeric_bounds_are_inclusive_and_cross_type() {
        let r = row();
        assert!(FilterField::gte("rating", 8.8).matches(&r.field_value("rating").unwrap()));
        assert!(FilterField::gte("rating", 8).matches(&r.field_value("rating").unwrap()));
        assert!(!FilterField::gte("rating", 8.9).matches(&r.field_value("rating").unwrap()));
        assert!(FilterField::lte("year", 2010).matches(&r.field_value("year").unwrap()));
        assert!(FilterField::gte("year", 2010.0).matches(&r.field_value("year").unwrap()));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let spec = FilterSpec::all()
            .and(FilterField::gte("year", 2012))
            .and(FilterField::lte("year", 2009));
        assert!(!spec.matches(&row()).unwrap());
    }

    #[test]
    fn test_includes() {
        let r = row();
        assert!(FilterSpec::all()
            .and(FilterField::includes("tags", "THRILLER"))
            .matches(&r)
            .unwrap());
        assert!(!FilterSpec::all()
            .and(FilterField::includes("tags", "thriller"))
            .matches(&r)
            .unwrap());
    }

    #[test]
    fn test_includes_integer_ids() {
        let r = row();
        assert!(FilterSpec::all()
            .and(FilterField::includes("cast", 7))
            .matches(&r)
            .unwrap());
        assert!(!FilterSpec::all()
            .and(FilterField::includes("cast", 4))
            .matches(&r)
            .unwrap());
        assert!(!FilterSpec::all()
            .and(FilterField::includes("cast", "7"))
            .matches(&r)
            .unwrap());
    }

    #[test]
    fn test_null_never_matches() {
        let r = row();
        assert!(!FilterSpec::all()
            .and(FilterField::eq("series", "Inception"))
            .matches(&r)
            .unwrap());
    }

    #[test]
    fn test_unknown_field_is_validation_error() {
        let err = FilterSpec::all()
            .and(FilterField::eq("budget", 1))
            .matches(&row())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_sort_cmp_puts_nulls_first() {
        assert_eq!(FilterValue::Null.sort_cmp(&FilterValue::Float(0.0)), Ordering::Less);
        assert_eq!(
            FilterValue::Float(8.0).sort_cmp(&FilterValue::Integer(8)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_cmp_orders_lists_element_wise() {
        let animation = FilterValue::StringList(vec!["ANIMATION".into()]);
        let drama = FilterValue::StringList(vec!["DRAMA".into(), "ROMANCE".into()]);
        let empty = FilterValue::StringList(Vec::new());
        assert_eq!(animation.sort_cmp(&drama), Ordering::Less);
        assert_eq!(empty.sort_cmp(&animation), Ordering::Less);
        assert_eq!(
            FilterValue::IntegerList(vec![2]).sort_cmp(&FilterValue::IntegerList(vec![10])),
            Ordering::Less
        );
    }
}
