use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::modules::collection::domain::entities::{
    Collection, CollectionEntry, CollectionPreview,
};
use crate::modules::collection::domain::value_objects::CollectionFilter;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

/// Storage boundary of the collection engine. Every read filters out
/// soft-deleted rows; every multi-row write is one transaction.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Collection>>;

    /// Load one collection with visibility-scoped eager loading applied.
    async fn find_for_display(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> AppResult<Option<CollectionPreview>>;

    /// One page of collections matching the filter, newest first, with
    /// capped membership and viewer-scoped watch data attached.
    async fn list(
        &self,
        filter: CollectionFilter,
        viewer: Option<Uuid>,
        pagination: PaginationParams,
    ) -> AppResult<Vec<CollectionPreview>>;

    /// Live total for the same predicate as `list`; always a separate query,
    /// never derived from a page.
    async fn count(&self, filter: CollectionFilter) -> AppResult<u64>;

    /// Persist a new collection and its membership rows atomically.
    async fn create(
        &self,
        collection: Collection,
        content: Vec<CollectionEntry>,
    ) -> AppResult<Collection>;

    /// Persist the mutable fields of an existing collection.
    async fn update(&self, collection: Collection) -> AppResult<Collection>;

    /// Replace the full membership set: field changeset, delete of all
    /// existing rows and insert of the new set in a single transaction.
    async fn replace_content(
        &self,
        collection: Collection,
        content: Vec<CollectionEntry>,
    ) -> AppResult<Collection>;

    /// Current content identifiers in display order.
    async fn content_ids(&self, collection_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Soft-delete; the row and its audit trail are retained.
    async fn soft_delete(&self, id: Uuid) -> AppResult<()>;
}
