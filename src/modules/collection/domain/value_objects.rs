use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::content::domain::ContentType;

/// Only membership rows with `order` up to this value are eager-loaded in
/// list and summary views, bounding response payload size.
pub const DISPLAY_CONTENT_LIMIT: i32 = 5;

/// One requested collection entry, as supplied by the caller. The slug is an
/// external-facing identifier and is resolved to an internal id at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentArgs {
    pub slug: String,
    pub comment: Option<String>,
    pub label: Option<String>,
    pub order: i32,
}

/// Accepted payload for collection create/update. Validation of shape and
/// size limits happens upstream; this subsystem only resolves and persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionArgs {
    pub content_type: ContentType,
    pub title: String,
    pub description: Option<String>,
    pub private: bool,
    pub spoiler: bool,
    pub nsfw: bool,
    pub tags: Vec<String>,
    pub labels_order: Vec<String>,
    pub content: Vec<ContentArgs>,
}

/// Base predicate for collection list reads. Both variants additionally
/// exclude soft-deleted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionFilter {
    /// Public, non-deleted collections.
    Public,
    /// All non-deleted collections of one author, including private ones.
    ByAuthor(Uuid),
}
