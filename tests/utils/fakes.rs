//! In-memory repository fakes backing the integration tests.
//!
//! Unlike the mockall mocks in the unit tests, these carry real state, so a
//! test can run a whole lifecycle (create, update, delete, read back) against
//! the service and assert on what was actually persisted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use tsudoi::modules::audit::domain::{AuditAction, AuditLog, AuditLogRepository};
use tsudoi::modules::collection::domain::services::assemble_previews;
use tsudoi::modules::collection::domain::{
    Collection, CollectionEntry, CollectionFilter, CollectionPreview, CollectionRepository,
};
use tsudoi::modules::content::domain::{ContentRepository, ContentSummary, ContentType};
use tsudoi::modules::watch::domain::{WatchEntry, WatchStatus};
use tsudoi::shared::application::PaginationParams;
use tsudoi::shared::errors::AppResult;

/// Slug registry standing in for the three content tables.
#[derive(Default)]
pub struct FakeContentRepository {
    slugs: Mutex<HashMap<(ContentType, String), Uuid>>,
    summaries: Mutex<HashMap<Uuid, ContentSummary>>,
}

impl FakeContentRepository {
    /// Register a content row and return its generated identifier.
    pub fn register(&self, content_type: ContentType, slug: &str, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.slugs
            .lock()
            .unwrap()
            .insert((content_type, slug.to_string()), id);
        self.summaries.lock().unwrap().insert(
            id,
            ContentSummary {
                id,
                slug: slug.to_string(),
                title: title.to_string(),
                image_url: None,
            },
        );
        id
    }

    fn summaries(&self) -> HashMap<Uuid, ContentSummary> {
        self.summaries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for FakeContentRepository {
    async fn resolve_slugs(
        &self,
        content_type: ContentType,
        slugs: Vec<String>,
    ) -> AppResult<HashMap<String, Uuid>> {
        let known = self.slugs.lock().unwrap();
        Ok(slugs
            .into_iter()
            .filter_map(|slug| {
                known
                    .get(&(content_type, slug.clone()))
                    .map(|id| (slug, *id))
            })
            .collect())
    }
}

/// Collection store keyed by id, holding the collection row together with its
/// membership rows. Soft-deleted rows stay in the map, mirroring the real
/// storage, and are filtered at read time.
pub struct FakeCollectionRepository {
    content: Arc<FakeContentRepository>,
    rows: Mutex<HashMap<Uuid, (Collection, Vec<CollectionEntry>)>>,
    watch: Mutex<HashMap<(Uuid, Uuid), WatchEntry>>,
}

impl FakeCollectionRepository {
    pub fn new(content: Arc<FakeContentRepository>) -> Self {
        Self {
            content,
            rows: Mutex::new(HashMap::new()),
            watch: Mutex::new(HashMap::new()),
        }
    }

    /// Seed one viewer's watch progress for one anime.
    pub fn add_watch(&self, user_id: Uuid, anime_id: Uuid, status: WatchStatus, episodes: i32) {
        self.watch.lock().unwrap().insert(
            (anime_id, user_id),
            WatchEntry {
                id: Uuid::new_v4(),
                user_id,
                anime_id,
                status,
                episodes,
                score: None,
            },
        );
    }

    /// Raw stored row, soft-deleted rows included. For retention assertions.
    pub fn stored_row(&self, id: Uuid) -> Option<(Collection, Vec<CollectionEntry>)> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn matches(collection: &Collection, filter: CollectionFilter) -> bool {
        if collection.deleted {
            return false;
        }
        match filter {
            CollectionFilter::Public => !collection.private,
            CollectionFilter::ByAuthor(author) => collection.author_id == author,
        }
    }

    fn assemble(
        &self,
        collections: Vec<Collection>,
        entries: Vec<CollectionEntry>,
        viewer: Option<Uuid>,
    ) -> Vec<CollectionPreview> {
        let summaries = self.content.summaries();
        let watch = self.watch.lock().unwrap().clone();
        assemble_previews(collections, entries, &summaries, &watch, viewer)
    }
}

#[async_trait]
impl CollectionRepository for FakeCollectionRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Collection>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&id)
            .map(|(collection, _)| collection.clone())
            .filter(|collection| !collection.deleted))
    }

    async fn find_for_display(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> AppResult<Option<CollectionPreview>> {
        let row = self.rows.lock().unwrap().get(&id).cloned();
        let Some((collection, entries)) = row else {
            return Ok(None);
        };
        if collection.deleted {
            return Ok(None);
        }
        Ok(self.assemble(vec![collection], entries, viewer).pop())
    }

    async fn list(
        &self,
        filter: CollectionFilter,
        viewer: Option<Uuid>,
        pagination: PaginationParams,
    ) -> AppResult<Vec<CollectionPreview>> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<&(Collection, Vec<CollectionEntry>)> = rows
            .values()
            .filter(|(collection, _)| Self::matches(collection, filter))
            .collect();
        matching.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));

        let page: Vec<&(Collection, Vec<CollectionEntry>)> = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        let collections: Vec<Collection> = page.iter().map(|(c, _)| c.clone()).collect();
        let entries: Vec<CollectionEntry> =
            page.iter().flat_map(|(_, e)| e.iter().cloned()).collect();
        drop(rows);

        Ok(self.assemble(collections, entries, viewer))
    }

    async fn count(&self, filter: CollectionFilter) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|(collection, _)| Self::matches(collection, filter))
            .count() as u64)
    }

    async fn create(
        &self,
        collection: Collection,
        content: Vec<CollectionEntry>,
    ) -> AppResult<Collection> {
        self.rows
            .lock()
            .unwrap()
            .insert(collection.id, (collection.clone(), content));
        Ok(collection)
    }

    async fn update(&self, collection: Collection) -> AppResult<Collection> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.get_mut(&collection.id) {
            row.0 = collection.clone();
        }
        Ok(collection)
    }

    async fn replace_content(
        &self,
        collection: Collection,
        content: Vec<CollectionEntry>,
    ) -> AppResult<Collection> {
        self.rows
            .lock()
            .unwrap()
            .insert(collection.id, (collection.clone(), content));
        Ok(collection)
    }

    async fn content_ids(&self, collection_id: Uuid) -> AppResult<Vec<Uuid>> {
        let rows = self.rows.lock().unwrap();
        let mut entries = rows
            .get(&collection_id)
            .map(|(_, entries)| entries.clone())
            .unwrap_or_default();
        entries.sort_by_key(|entry| entry.order);
        Ok(entries.into_iter().map(|entry| entry.content_id).collect())
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.get_mut(&id) {
            row.0.deleted = true;
            row.0.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// Audit sink collecting every record in order of emission.
#[derive(Default)]
pub struct FakeAuditLogRepository {
    records: Mutex<Vec<AuditLog>>,
}

impl FakeAuditLogRepository {
    pub fn records(&self) -> Vec<AuditLog> {
        self.records.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<AuditAction> {
        self.records.lock().unwrap().iter().map(|r| r.action).collect()
    }
}

#[async_trait]
impl AuditLogRepository for FakeAuditLogRepository {
    async fn create(
        &self,
        action: AuditAction,
        user_id: Uuid,
        target_id: Uuid,
        data: Option<Value>,
    ) -> AppResult<AuditLog> {
        let log = AuditLog {
            id: Uuid::new_v4(),
            action,
            user_id,
            target_id,
            data,
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(log.clone());
        Ok(log)
    }
}
