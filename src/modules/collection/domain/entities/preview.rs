use serde::{Deserialize, Serialize};

use super::collection::{Collection, CollectionEntry};
use crate::modules::content::domain::ContentSummary;
use crate::modules::watch::domain::WatchEntry;

/// A collection prepared for display: the collection row plus its capped,
/// ordered membership with resolved content summaries and, for anime entries
/// only, the requesting viewer's own watch progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionPreview {
    pub collection: Collection,
    pub content: Vec<CollectionEntryView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEntryView {
    pub entry: CollectionEntry,
    pub content: ContentSummary,
    /// Present only when the requesting viewer owns this watch row.
    pub watch: Option<WatchEntry>,
}
