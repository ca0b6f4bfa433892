//! Query, paging and sorting defaults.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Defaults applied when a caller leaves paging or sorting unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Page size used when the caller does not supply one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound a requested page size is clamped to.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    /// Sort field used when the caller does not supply one.
    #[serde(default = "default_sort_field")]
    pub default_sort_field: String,
}

impl QueryConfig {
    /// Reject settings the page resolver cannot honour.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_page_size == 0 {
            return Err(AppError::configuration("query.max_page_size must be at least 1"));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(AppError::configuration(format!(
                "query.default_page_size must be within 1..={}",
                self.max_page_size
            )));
        }
        if self.default_sort_field.trim().is_empty() {
            return Err(AppError::configuration("query.default_sort_field must not be empty"));
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            default_sort_field: default_sort_field(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

fn default_sort_field() -> String {
    "title".to_string()
}
