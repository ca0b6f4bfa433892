//! Validated writes for directors, actors and awards.

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use moviedb_core::error::AppError;
use moviedb_core::traits::{Record, RecordStore, RecordWriter};
use moviedb_core::types::filter::{FilterField, FilterSpec};
use moviedb_core::types::sorting::SortField;
use moviedb_entity::award::Award;
use moviedb_entity::person::{Actor, Director};

/// Directors catalog.
pub type DirectorCatalogService = RecordCatalog<Director>;
/// Actors catalog.
pub type ActorCatalogService = RecordCatalog<Actor>;
/// Awards catalog.
pub type AwardCatalogService = RecordCatalog<Award>;

/// Creates, reads, replaces and removes records of one kind.
///
/// Ids pointing at other records are stored as given; nothing checks that
/// they resolve, and deleting a record leaves references to it in place.
pub struct RecordCatalog<R: Record> {
    /// Read side of the store.
    store: Arc<dyn RecordStore<R>>,
    /// Write side of the store.
    writer: Arc<dyn RecordWriter<R>>,
}

impl<R: Record> Clone for RecordCatalog<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<R> RecordCatalog<R>
where
    R: Record,
    R::Draft: Validate,
{
    /// Creates a new catalog service.
    pub fn new(store: Arc<dyn RecordStore<R>>, writer: Arc<dyn RecordWriter<R>>) -> Self {
        Self { store, writer }
    }

    /// Creates a catalog service over a store that both reads and writes.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: RecordStore<R> + RecordWriter<R> + 'static,
    {
        Self {
            store: store.clone(),
            writer: store,
        }
    }

    /// Validates and persists a new record.
    pub async fn create(&self, draft: R::Draft) -> Result<R, AppError> {
        draft.validate()?;
        let record = self.writer.insert(draft).await?;
        info!(kind = R::KIND, id = %record.id(), "Record created");
        Ok(record)
    }

    /// Gets a record by id.
    pub async fn get(&self, id: R::Id) -> Result<R, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Lists every record in natural order.
    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        self.store.find_all().await
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count().await
    }

    /// Records whose name contains `name`, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<R>, AppError> {
        let filter = FilterSpec::all().and(FilterField::contains_ignore_case("name", name));
        let records = self
            .store
            .find_matching(&filter, &SortField::natural())
            .await?;
        debug!(kind = R::KIND, name, matched = records.len(), "Name search");
        Ok(records)
    }

    /// Replaces a record's content, keeping its id and creation time.
    pub async fn update(&self, id: R::Id, draft: R::Draft) -> Result<R, AppError> {
        draft.validate()?;
        let record = self
            .writer
            .replace(id, draft)
            .await?
            .ok_or_else(|| not_found::<R>(id))?;
        info!(kind = R::KIND, %id, "Record updated");
        Ok(record)
    }

    /// Deletes a record.
    pub async fn delete(&self, id: R::Id) -> Result<(), AppError> {
        if !self.writer.remove(id).await? {
            return Err(not_found::<R>(id));
        }
        info!(kind = R::KIND, %id, "Record deleted");
        Ok(())
    }
}

fn not_found<R: Record>(id: R::Id) -> AppError {
    AppError::not_found(format!("{} {id} not found", R::KIND))
}
