use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::audit::domain::FieldDiff;
use crate::modules::collection::domain::value_objects::CollectionArgs;
use crate::modules::content::domain::ContentType;

/// A user-owned, named, ordered aggregate of content references.
///
/// `entries` is denormalized and must equal the count of live membership rows
/// after every successful write. `content_type` and `author_id` are fixed at
/// creation. Deletion is always soft; the row is retained for audit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
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

/// One membership row linking a collection to one content item. Exclusively
/// owned by its collection; replaced wholesale when content changes. The
/// content_type always equals the parent collection's, by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub collection_id: Uuid,
    pub content_type: ContentType,
    pub content_id: Uuid,
    pub comment: Option<String>,
    pub label: Option<String>,
    pub order: i32,
}

macro_rules! diff_field {
    ($diff:expr, $collection:expr, $args:expr, $field:ident) => {
        if $collection.$field != $args.$field {
            $diff.record(stringify!($field), &$collection.$field, &$args.$field);
            $collection.$field = $args.$field.clone();
        }
    };
}

impl Collection {
    pub fn new(author_id: Uuid, args: &CollectionArgs) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            content_type: args.content_type,
            title: args.title.clone(),
            description: args.description.clone(),
            private: args.private,
            spoiler: args.spoiler,
            nsfw: args.nsfw,
            tags: args.tags.clone(),
            labels_order: args.labels_order.clone(),
            entries: args.content.len() as i32,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the mutable fields from `args`, recording a before/after diff of
    /// every field whose value actually changed. The updated timestamp is
    /// touched unconditionally and never appears in the diff.
    pub fn apply_args(&mut self, args: &CollectionArgs) -> FieldDiff {
        let mut diff = FieldDiff::default();

        diff_field!(diff, self, args, labels_order);
        diff_field!(diff, self, args, description);
        diff_field!(diff, self, args, private);
        diff_field!(diff, self, args, spoiler);
        diff_field!(diff, self, args, nsfw);
        diff_field!(diff, self, args, title);
        diff_field!(diff, self, args, tags);

        self.updated_at = Utc::now();

        diff
    }
}
