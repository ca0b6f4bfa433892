//! Resolution of raw paging and sorting input into a [`PageRequest`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use moviedb_core::config::query::QueryConfig;
use moviedb_core::error::AppError;
use moviedb_core::types::pagination::PageRequest;
use moviedb_core::types::sorting::{SortDirection, SortField};
use moviedb_entity::movie::MovieField;

/// Raw paging input as supplied by a caller. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Zero-based page number.
    pub page: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_dir: Option<String>,
}

impl PageParams {
    /// Page and size only; sorting left to defaults.
    pub fn page(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Self::default()
        }
    }

    /// Set the sort field and direction.
    pub fn sorted_by(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self.sort_dir = Some(direction.into());
        self
    }
}

/// Turns [`PageParams`] into a validated, deterministic [`PageRequest`].
///
/// A negative page is clamped to 0. A size below 1 is clamped to 1 and a
/// size above the configured maximum is clamped to that maximum. The sort
/// field may be any movie field, by wire or snake_case name.
#[derive(Debug, Clone)]
pub struct PageResolver {
    config: QueryConfig,
}

impl PageResolver {
    /// Create a resolver using the given defaults.
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    /// Resolve caller-controlled paging and sorting.
    pub fn resolve(&self, params: &PageParams) -> Result<PageRequest, AppError> {
        let field = match params.sort_by.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<MovieField>()?,
            _ => self.config.default_sort_field.parse::<MovieField>()?,
        };
        let direction = params
            .sort_dir
            .as_deref()
            .map(SortDirection::parse_lenient)
            .unwrap_or_default();

        Ok(self.window(
            params.page,
            params.size,
            SortField::new(field.as_str(), direction),
        ))
    }

    /// Resolve paging for a query whose order is fixed.
    pub fn resolve_fixed(
        &self,
        page: Option<i64>,
        size: Option<i64>,
        sort: SortField,
    ) -> PageRequest {
        self.window(page, size, sort)
    }

    fn window(&self, page: Option<i64>, size: Option<i64>, sort: SortField) -> PageRequest {
        let raw_page = page.unwrap_or(0);
        let raw_size = size.unwrap_or(self.config.default_page_size as i64);

        let page = u64::try_from(raw_page).unwrap_or(0);
        let size = u64::try_from(raw_size)
            .unwrap_or(0)
            .clamp(1, self.config.max_page_size.max(1));

        if page as i64 != raw_page || size as i64 != raw_size {
            debug!(raw_page, raw_size, page, size, "Clamped paging input");
        }

        PageRequest::new(page, size, sort)
    }
}

impl Default for PageResolver {
    fn default() -> Self {
        Self::new(QueryConfig::default())
    }
}
