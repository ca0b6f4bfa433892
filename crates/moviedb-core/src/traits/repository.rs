//! Record store traits.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::record::Record;
use crate::types::filter::FilterSpec;
use crate::types::pagination::{PageRequest, PageResponse};
use crate::types::sorting::SortField;

/// Read side of a record store.
///
/// Every method is a single consistent read. Implementations order results
/// by the requested sort field first and by id ascending second.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync + 'static {
    /// Find a record by its id.
    async fn find_by_id(&self, id: R::Id) -> AppResult<Option<R>>;

    /// Return every record in natural (id ascending) order.
    async fn find_all(&self) -> AppResult<Vec<R>>;

    /// Count all records.
    async fn count(&self) -> AppResult<u64>;

    /// Return every record matching `filter`, ordered by `sort`.
    async fn find_matching(&self, filter: &FilterSpec, sort: &SortField) -> AppResult<Vec<R>>;

    /// Return one page of the records matching `filter`.
    async fn find_page(
        &self,
        filter: &FilterSpec,
        page: &PageRequest,
    ) -> AppResult<PageResponse<R>>;
}

/// Write side of a record store.
#[async_trait]
pub trait RecordWriter<R: Record>: Send + Sync + 'static {
    /// Persist a new record, assigning its id.
    async fn insert(&self, draft: R::Draft) -> AppResult<R>;

    /// Replace the fields of an existing record. Returns `None` when the id is unknown.
    async fn replace(&self, id: R::Id, draft: R::Draft) -> AppResult<Option<R>>;

    /// Delete a record. Returns `true` if it existed.
    async fn remove(&self, id: R::Id) -> AppResult<bool>;
}
