use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::Pg;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{
    CollectionChangeset, CollectionContentModel, CollectionModel, NewCollection,
    NewCollectionContent,
};
use crate::log_debug;
use crate::modules::collection::domain::{
    services::assemble_previews, Collection, CollectionEntry, CollectionFilter, CollectionPreview,
    CollectionRepository, DISPLAY_CONTENT_LIMIT,
};
use crate::modules::content::domain::{ContentSummary, ContentType};
use crate::modules::content::infrastructure::models::{AnimeModel, CharacterModel, PersonModel};
use crate::modules::watch::domain::WatchEntry;
use crate::modules::watch::infrastructure::models::WatchModel;
use crate::schema::{anime, anime_watch, characters, collection_content, collections, people};
use crate::shared::application::PaginationParams;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct CollectionRepositoryImpl {
    db: Arc<Database>,
}

/// The one "not soft-deleted" predicate. Every read path goes through this
/// helper so the filter cannot drift apart across call sites.
fn not_deleted() -> diesel::dsl::Eq<collections::deleted, bool> {
    collections::deleted.eq(false)
}

impl CollectionRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn base_query(filter: CollectionFilter) -> collections::BoxedQuery<'static, Pg> {
        let query = collections::table.filter(not_deleted()).into_boxed();

        match filter {
            CollectionFilter::Public => query.filter(collections::private.eq(false)),
            CollectionFilter::ByAuthor(author_id) => {
                query.filter(collections::author_id.eq(author_id))
            }
        }
    }

    /// Second step of the visibility-scoped read: load capped membership,
    /// content summaries and the viewer's own watch rows for an already
    /// loaded page of collections, then assemble in memory.
    fn load_previews(
        conn: &mut PgConnection,
        page: Vec<Collection>,
        viewer: Option<Uuid>,
    ) -> AppResult<Vec<CollectionPreview>> {
        if page.is_empty() {
            return Ok(Vec::new());
        }

        let collection_ids: Vec<Uuid> = page.iter().map(|c| c.id).collect();

        let rows: Vec<CollectionContentModel> = collection_content::table
            .filter(collection_content::collection_id.eq_any(&collection_ids))
            .filter(collection_content::order.le(DISPLAY_CONTENT_LIMIT))
            .order(collection_content::order.asc())
            .load(conn)?;

        let entries: Vec<CollectionEntry> = rows.into_iter().map(Into::into).collect();

        let mut anime_ids: Vec<Uuid> = Vec::new();
        let mut character_ids: Vec<Uuid> = Vec::new();
        let mut person_ids: Vec<Uuid> = Vec::new();
        for entry in &entries {
            match entry.content_type {
                ContentType::Anime => anime_ids.push(entry.content_id),
                ContentType::Character => character_ids.push(entry.content_id),
                ContentType::Person => person_ids.push(entry.content_id),
            }
        }

        let mut summaries: HashMap<Uuid, ContentSummary> = HashMap::new();
        if !anime_ids.is_empty() {
            for model in anime::table
                .filter(anime::id.eq_any(&anime_ids))
                .load::<AnimeModel>(conn)?
            {
                summaries.insert(model.id, model.into_summary());
            }
        }
        if !character_ids.is_empty() {
            for model in characters::table
                .filter(characters::id.eq_any(&character_ids))
                .load::<CharacterModel>(conn)?
            {
                summaries.insert(model.id, model.into_summary());
            }
        }
        if !person_ids.is_empty() {
            for model in people::table
                .filter(people::id.eq_any(&person_ids))
                .load::<PersonModel>(conn)?
            {
                summaries.insert(model.id, model.into_summary());
            }
        }

        // Watch rows are filtered to the requesting viewer at the query
        // level; without a viewer none are fetched at all.
        let mut watch: HashMap<(Uuid, Uuid), WatchEntry> = HashMap::new();
        if let Some(viewer_id) = viewer {
            if !anime_ids.is_empty() {
                for model in anime_watch::table
                    .filter(anime_watch::user_id.eq(viewer_id))
                    .filter(anime_watch::anime_id.eq_any(&anime_ids))
                    .load::<WatchModel>(conn)?
                {
                    watch.insert((model.anime_id, model.user_id), model.into());
                }
            }
        }

        Ok(assemble_previews(page, entries, &summaries, &watch, viewer))
    }
}

#[async_trait]
impl CollectionRepository for CollectionRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Collection>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<CollectionModel>> {
            let mut conn = db.get_connection()?;
            let model = collections::table
                .filter(not_deleted())
                .filter(collections::id.eq(id))
                .first::<CollectionModel>(&mut conn)
                .optional()?;
            Ok(model)
        })
        .await??;

        Ok(model.map(Into::into))
    }

    async fn find_for_display(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> AppResult<Option<CollectionPreview>> {
        let db = Arc::clone(&self.db);

        let previews = task::spawn_blocking(move || -> AppResult<Vec<CollectionPreview>> {
            let mut conn = db.get_connection()?;

            let model = collections::table
                .filter(not_deleted())
                .filter(collections::id.eq(id))
                .first::<CollectionModel>(&mut conn)
                .optional()?;

            match model {
                Some(model) => Self::load_previews(&mut conn, vec![model.into()], viewer),
                None => Ok(Vec::new()),
            }
        })
        .await??;

        Ok(previews.into_iter().next())
    }

    async fn list(
        &self,
        filter: CollectionFilter,
        viewer: Option<Uuid>,
        pagination: PaginationParams,
    ) -> AppResult<Vec<CollectionPreview>> {
        let db = Arc::clone(&self.db);

        let previews = task::spawn_blocking(move || -> AppResult<Vec<CollectionPreview>> {
            let mut conn = db.get_connection()?;

            let models: Vec<CollectionModel> = Self::base_query(filter)
                .order(collections::created_at.desc())
                .limit(pagination.limit())
                .offset(pagination.offset())
                .load(&mut conn)?;

            let page: Vec<Collection> = models.into_iter().map(Into::into).collect();
            Self::load_previews(&mut conn, page, viewer)
        })
        .await??;

        Ok(previews)
    }

    async fn count(&self, filter: CollectionFilter) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        let total = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let total = Self::base_query(filter).count().get_result(&mut conn)?;
            Ok(total)
        })
        .await??;

        Ok(total as u64)
    }

    async fn create(
        &self,
        collection: Collection,
        content: Vec<CollectionEntry>,
    ) -> AppResult<Collection> {
        let db = Arc::clone(&self.db);

        let saved = task::spawn_blocking(move || -> AppResult<CollectionModel> {
            let mut conn = db.get_connection()?;

            conn.transaction::<CollectionModel, AppError, _>(|conn| {
                let saved: CollectionModel = diesel::insert_into(collections::table)
                    .values(NewCollection::from_entity(&collection))
                    .get_result(conn)?;

                let rows = NewCollectionContent::from_entries(&content);
                if !rows.is_empty() {
                    diesel::insert_into(collection_content::table)
                        .values(&rows)
                        .execute(conn)?;
                }

                Ok(saved)
            })
        })
        .await??;

        Ok(saved.into())
    }

    async fn update(&self, collection: Collection) -> AppResult<Collection> {
        let db = Arc::clone(&self.db);

        let saved = task::spawn_blocking(move || -> AppResult<CollectionModel> {
            let mut conn = db.get_connection()?;

            let saved = diesel::update(collections::table.find(collection.id))
                .set(CollectionChangeset::from_entity(&collection))
                .get_result::<CollectionModel>(&mut conn)?;

            Ok(saved)
        })
        .await??;

        Ok(saved.into())
    }

    async fn replace_content(
        &self,
        collection: Collection,
        content: Vec<CollectionEntry>,
    ) -> AppResult<Collection> {
        let db = Arc::clone(&self.db);

        let saved = task::spawn_blocking(move || -> AppResult<CollectionModel> {
            let mut conn = db.get_connection()?;

            log_debug!(
                "Replacing content of collection {} with {} row(s)",
                collection.id,
                content.len()
            );

            // Wholesale delete-then-insert; readers only ever observe the
            // committed state, never the empty intermediate.
            conn.transaction::<CollectionModel, AppError, _>(|conn| {
                let saved = diesel::update(collections::table.find(collection.id))
                    .set(CollectionChangeset::from_entity(&collection))
                    .get_result::<CollectionModel>(conn)?;

                diesel::delete(
                    collection_content::table
                        .filter(collection_content::collection_id.eq(collection.id)),
                )
                .execute(conn)?;

                let rows = NewCollectionContent::from_entries(&content);
                if !rows.is_empty() {
                    diesel::insert_into(collection_content::table)
                        .values(&rows)
                        .execute(conn)?;
                }

                Ok(saved)
            })
        })
        .await??;

        Ok(saved.into())
    }

    async fn content_ids(&self, collection_id: Uuid) -> AppResult<Vec<Uuid>> {
        let db = Arc::clone(&self.db);

        let ids = task::spawn_blocking(move || -> AppResult<Vec<Uuid>> {
            let mut conn = db.get_connection()?;
            let ids = collection_content::table
                .filter(collection_content::collection_id.eq(collection_id))
                .order(collection_content::order.asc())
                .select(collection_content::content_id)
                .load(&mut conn)?;
            Ok(ids)
        })
        .await??;

        Ok(ids)
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            diesel::update(collections::table.find(id))
                .set((
                    collections::deleted.eq(true),
                    collections::updated_at.eq(Utc::now()),
                ))
                .execute(&mut conn)?;

            Ok(())
        })
        .await??;

        Ok(())
    }
}
