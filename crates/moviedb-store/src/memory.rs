//! In-memory record store.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use moviedb_core::result::AppResult;
use moviedb_core::traits::{Record, RecordStore, RecordWriter};
use moviedb_core::types::filter::FilterSpec;
use moviedb_core::types::pagination::{PageRequest, PageResponse};
use moviedb_core::types::sorting::{SortField, sort_records};

/// Thread-safe in-memory store for any [`Record`].
///
/// Records are kept in id order, so a full scan is already in natural
/// order. Ids come from a monotonic sequence starting at 1 and are never
/// reused, even after a delete.
pub struct MemoryStore<R: Record> {
    /// Records keyed by id.
    records: Arc<RwLock<BTreeMap<R::Id, R>>>,
    /// Last id handed out.
    sequence: Arc<AtomicI64>,
}

impl<R: Record> MemoryStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Create a store holding the given drafts, inserted in order.
    pub async fn with_drafts(drafts: impl IntoIterator<Item = R::Draft>) -> AppResult<Self> {
        let store = Self::new();
        for draft in drafts {
            store.insert(draft).await?;
        }
        Ok(store)
    }

    fn next_id(&self) -> R::Id {
        R::Id::from(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Collect the records matching `filter`, in natural order.
    fn matching(records: &BTreeMap<R::Id, R>, filter: &FilterSpec) -> AppResult<Vec<R>> {
        let mut matched = Vec::new();
        for record in records.values() {
            if filter.matches(record)? {
                matched.push(record.clone());
            }
        }
        Ok(matched)
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for MemoryStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            sequence: Arc::clone(&self.sequence),
        }
    }
}

impl<R: Record> fmt::Debug for MemoryStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("kind", &R::KIND)
            .field("sequence", &self.sequence.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn find_by_id(&self, id: R::Id) -> AppResult<Option<R>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<R>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn find_matching(&self, filter: &FilterSpec, sort: &SortField) -> AppResult<Vec<R>> {
        let records = self.records.read().await;
        let matched = Self::matching(&records, filter)?;
        drop(records);

        debug!(
            kind = R::KIND,
            conditions = filter.conditions.len(),
            matched = matched.len(),
            sort = %sort.field,
            "Evaluated filter"
        );
        sort_records(matched, sort)
    }

    async fn find_page(
        &self,
        filter: &FilterSpec,
        page: &PageRequest,
    ) -> AppResult<PageResponse<R>> {
        let records = self.records.read().await;
        let matched = Self::matching(&records, filter)?;
        drop(records);

        let total = matched.len() as u64;
        let sorted = sort_records(matched, &page.sort)?;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let content: Vec<R> = sorted.into_iter().skip(offset).take(limit).collect();

        debug!(
            kind = R::KIND,
            page = page.page,
            size = page.size,
            total,
            returned = content.len(),
            "Served page"
        );
        Ok(PageResponse::new(content, page.page, page.size, total))
    }
}

#[async_trait]
impl<R: Record> RecordWriter<R> for MemoryStore<R> {
    async fn insert(&self, draft: R::Draft) -> AppResult<R> {
        let mut records = self.records.write().await;
        let id = self.next_id();
        let record = R::from_draft(id, draft, Utc::now());
        records.insert(id, record.clone());
        debug!(kind = R::KIND, %id, "Inserted record");
        Ok(record)
    }

    async fn replace(&self, id: R::Id, draft: R::Draft) -> AppResult<Option<R>> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(&id) else {
            return Ok(None);
        };
        record.apply_draft(draft, Utc::now());
        debug!(kind = R::KIND, %id, "Replaced record");
        Ok(Some(record.clone()))
    }

    async fn remove(&self, id: R::Id) -> AppResult<bool> {
        let removed = self.records.write().await.remove(&id).is_some();
        debug!(kind = R::KIND, %id, removed, "Removed record");
        Ok(removed)
    }
}
