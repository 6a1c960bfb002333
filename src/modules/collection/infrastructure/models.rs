use crate::modules::collection::domain::{Collection, CollectionEntry};
use crate::modules::content::domain::ContentType;
use crate::schema::{collection_content, collections};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// ============= COLLECTION MODELS =============

// For reading from database - with associations support
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = collections)]
pub struct CollectionModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub description: Option<String>,
    pub private: bool,
    pub spoiler: bool,
    pub nsfw: bool,
    pub tags: Vec<String>,
    pub labels_order: Vec<String>,
    pub entries: i32,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new collections
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = collections)]
pub struct NewCollection {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub description: Option<String>,
    pub private: bool,
    pub spoiler: bool,
    pub nsfw: bool,
    pub tags: Vec<String>,
    pub labels_order: Vec<String>,
    pub entries: i32,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For updating existing collections (excludes id, author and created_at).
// None for description means "clear it", hence treat_none_as_null.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = collections)]
#[diesel(treat_none_as_null = true)]
pub struct CollectionChangeset {
    pub title: String,
    pub description: Option<String>,
    pub private: bool,
    pub spoiler: bool,
    pub nsfw: bool,
    pub tags: Vec<String>,
    pub labels_order: Vec<String>,
    pub entries: i32,
    pub updated_at: DateTime<Utc>,
}

// ============= COLLECTION CONTENT =============

// For reading with associations
#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(CollectionModel, foreign_key = collection_id))]
#[diesel(table_name = collection_content)]
pub struct CollectionContentModel {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub content_type: ContentType,
    pub content_id: Uuid,
    pub comment: Option<String>,
    pub label: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

// For inserting new membership rows
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = collection_content)]
pub struct NewCollectionContent {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub content_type: ContentType,
    pub content_id: Uuid,
    pub comment: Option<String>,
    pub label: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

// ============= CONVERSIONS =============

impl From<CollectionModel> for Collection {
    fn from(model: CollectionModel) -> Self {
        Collection {
            id: model.id,
            author_id: model.author_id,
            content_type: model.content_type,
            title: model.title,
            description: model.description,
            private: model.private,
            spoiler: model.spoiler,
            nsfw: model.nsfw,
            tags: model.tags,
            labels_order: model.labels_order,
            entries: model.entries,
            deleted: model.deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CollectionContentModel> for CollectionEntry {
    fn from(model: CollectionContentModel) -> Self {
        CollectionEntry {
            collection_id: model.collection_id,
            content_type: model.content_type,
            content_id: model.content_id,
            comment: model.comment,
            label: model.label,
            order: model.order,
        }
    }
}

impl NewCollection {
    pub fn from_entity(entity: &Collection) -> Self {
        NewCollection {
            id: entity.id,
            author_id: entity.author_id,
            content_type: entity.content_type,
            title: entity.title.clone(),
            description: entity.description.clone(),
            private: entity.private,
            spoiler: entity.spoiler,
            nsfw: entity.nsfw,
            tags: entity.tags.clone(),
            labels_order: entity.labels_order.clone(),
            entries: entity.entries,
            deleted: entity.deleted,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl CollectionChangeset {
    pub fn from_entity(entity: &Collection) -> Self {
        CollectionChangeset {
            title: entity.title.clone(),
            description: entity.description.clone(),
            private: entity.private,
            spoiler: entity.spoiler,
            nsfw: entity.nsfw,
            tags: entity.tags.clone(),
            labels_order: entity.labels_order.clone(),
            entries: entity.entries,
            updated_at: entity.updated_at,
        }
    }
}

impl NewCollectionContent {
    pub fn from_entries(entries: &[CollectionEntry]) -> Vec<Self> {
        let now = Utc::now();
        entries
            .iter()
            .map(|entry| NewCollectionContent {
                id: Uuid::new_v4(),
                collection_id: entry.collection_id,
                content_type: entry.content_type,
                content_id: entry.content_id,
                comment: entry.comment.clone(),
                label: entry.label.clone(),
                order: entry.order,
                created_at: now,
            })
            .collect()
    }
}
