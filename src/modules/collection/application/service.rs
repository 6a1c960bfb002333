use std::sync::Arc;

use serde_json::{json, Value};
use uuid::Uuid;

use crate::modules::audit::domain::{AuditAction, AuditLogRepository};
use crate::modules::collection::domain::{
    Collection, CollectionArgs, CollectionEntry, CollectionFilter, CollectionPreview,
    CollectionRepository,
};
use crate::modules::content::domain::ContentRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_error, log_info};

/// Orchestrates the collection lifecycle: create, update and delete with
/// diff-based audit logging, plus the visibility-scoped read paths.
///
/// All slug resolution and validation happens before the transactional write
/// begins, so a failed operation never leaves partial state. Audit emission
/// is ordered strictly after a successful commit and is best-effort.
pub struct CollectionService {
    collection_repo: Arc<dyn CollectionRepository>,
    content_repo: Arc<dyn ContentRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
}

impl CollectionService {
    pub fn new(
        collection_repo: Arc<dyn CollectionRepository>,
        content_repo: Arc<dyn ContentRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
    ) -> Self {
        Self {
            collection_repo,
            content_repo,
            audit_repo,
        }
    }

    pub async fn create_collection(
        &self,
        args: CollectionArgs,
        author_id: Uuid,
    ) -> AppResult<Collection> {
        let collection = Collection::new(author_id, &args);

        // Any unresolved slug aborts here, before a single row is written.
        let content = self.build_collection_content(collection.id, &args).await?;
        let content_ids: Vec<Uuid> = content.iter().map(|entry| entry.content_id).collect();

        let saved = self.collection_repo.create(collection, content).await?;

        log_info!(
            "Created collection {} ({}, {} entries)",
            saved.id,
            saved.content_type,
            saved.entries
        );

        // Audit carries resolved identifiers, not slugs; content may be
        // renamed later and the trail must stay stable.
        let payload = json!({
            "content_type": saved.content_type,
            "labels_order": saved.labels_order,
            "description": saved.description,
            "entries": saved.entries,
            "private": saved.private,
            "spoiler": saved.spoiler,
            "title": saved.title,
            "nsfw": saved.nsfw,
            "tags": saved.tags,
            "content": content_ids,
        });

        self.emit_audit(AuditAction::CollectionCreate, author_id, saved.id, Some(payload))
            .await;

        Ok(saved)
    }

    pub async fn update_collection(
        &self,
        id: Uuid,
        args: CollectionArgs,
        user_id: Uuid,
    ) -> AppResult<Collection> {
        let mut collection = self
            .collection_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Collection {} not found", id)))?;

        if collection.content_type != args.content_type {
            return Err(AppError::ValidationError(
                "Collection content type cannot be changed".to_string(),
            ));
        }

        let mut diff = collection.apply_args(&args);

        // Display-order identifier comparison decides whether membership has
        // to be replaced at all. The stored side comes back sorted by the
        // `order` column, so the requested side is sorted the same way; the
        // caller's array order alone never counts as a change.
        let old_ids = self.collection_repo.content_ids(collection.id).await?;
        let content = self.build_collection_content(collection.id, &args).await?;
        let mut by_order: Vec<&CollectionEntry> = content.iter().collect();
        by_order.sort_by_key(|entry| entry.order);
        let new_ids: Vec<Uuid> = by_order.into_iter().map(|entry| entry.content_id).collect();

        let updated = if old_ids != new_ids {
            collection.entries = content.len() as i32;
            diff.record("content", &old_ids, &new_ids);

            // Delete-then-insert of the whole membership set, one transaction.
            self.collection_repo
                .replace_content(collection, content)
                .await?
        } else {
            self.collection_repo.update(collection).await?
        };

        if !diff.is_empty() {
            let payload = json!({
                "updated_collection": diff.after,
                "old_collection": diff.before,
            });

            self.emit_audit(AuditAction::CollectionUpdate, user_id, updated.id, Some(payload))
                .await;
        }

        Ok(updated)
    }

    pub async fn delete_collection(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let collection = self
            .collection_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Collection {} not found", id)))?;

        self.collection_repo.soft_delete(collection.id).await?;

        log_info!("Soft-deleted collection {}", collection.id);

        self.emit_audit(AuditAction::CollectionDelete, user_id, collection.id, None)
            .await;

        Ok(true)
    }

    pub async fn list_collections(
        &self,
        filter: CollectionFilter,
        viewer: Option<Uuid>,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<CollectionPreview>> {
        // The total runs over the same predicate as the page query but is
        // always its own live query, never derived from the page.
        let total_count = self.collection_repo.count(filter).await?;
        let items = self
            .collection_repo
            .list(filter, viewer, pagination.clone())
            .await?;

        Ok(PaginatedResult::new(items, total_count, &pagination))
    }

    pub async fn get_collection(&self, id: Uuid) -> AppResult<Option<Collection>> {
        self.collection_repo.find_by_id(id).await
    }

    pub async fn get_collection_for_display(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> AppResult<Option<CollectionPreview>> {
        self.collection_repo.find_for_display(id, viewer).await
    }

    /// Materialize membership rows for the requested entries: one batched
    /// slug lookup, then a row per entry stamped with the resolved identifier
    /// and the caller-supplied order/comment/label. No partial result: a slug
    /// missing from the content table fails the whole build.
    async fn build_collection_content(
        &self,
        collection_id: Uuid,
        args: &CollectionArgs,
    ) -> AppResult<Vec<CollectionEntry>> {
        let slugs: Vec<String> = args.content.iter().map(|c| c.slug.clone()).collect();
        let resolved = self
            .content_repo
            .resolve_slugs(args.content_type, slugs)
            .await?;

        args.content
            .iter()
            .map(|content| {
                let content_id = resolved.get(&content.slug).copied().ok_or_else(|| {
                    AppError::ContentNotFound(format!(
                        "{} '{}' does not exist",
                        args.content_type, content.slug
                    ))
                })?;

                Ok(CollectionEntry {
                    collection_id,
                    content_type: args.content_type,
                    content_id,
                    comment: content.comment.clone(),
                    label: content.label.clone(),
                    order: content.order,
                })
            })
            .collect()
    }

    /// Best-effort emission, strictly after commit. A failed audit write is
    /// logged and never fails the content change it describes.
    async fn emit_audit(
        &self,
        action: AuditAction,
        user_id: Uuid,
        target_id: Uuid,
        data: Option<Value>,
    ) {
        if let Err(err) = self
            .audit_repo
            .create(action, user_id, target_id, data)
            .await
        {
            log_error!(
                "Failed to record {} audit log for {}: {}",
                action,
                target_id,
                err
            );
        }
    }
}
