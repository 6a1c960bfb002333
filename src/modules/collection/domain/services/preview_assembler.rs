use std::collections::HashMap;

use uuid::Uuid;

use crate::modules::collection::domain::entities::{
    Collection, CollectionEntry, CollectionEntryView, CollectionPreview,
};
use crate::modules::collection::domain::value_objects::DISPLAY_CONTENT_LIMIT;
use crate::modules::content::domain::{ContentSummary, ContentType};
use crate::modules::watch::domain::WatchEntry;

/// Attach membership rows, content summaries and viewer-scoped watch data to
/// a page of collections, in memory.
///
/// The storage layer already restricts what it loads (order cap, viewer's own
/// watch rows), but this function re-applies both rules so correctness never
/// depends on the query alone:
/// - membership rows above `DISPLAY_CONTENT_LIMIT` are dropped;
/// - watch data is attached only to anime entries and only when the row's
///   owner is the requesting viewer. With no viewer, nothing is attached.
///
/// A collection is always returned, even with no matching watch rows.
pub fn assemble_previews(
    collections: Vec<Collection>,
    entries: Vec<CollectionEntry>,
    summaries: &HashMap<Uuid, ContentSummary>,
    watch: &HashMap<(Uuid, Uuid), WatchEntry>,
    viewer: Option<Uuid>,
) -> Vec<CollectionPreview> {
    let mut by_collection: HashMap<Uuid, Vec<CollectionEntry>> = HashMap::new();
    for entry in entries {
        if entry.order <= DISPLAY_CONTENT_LIMIT {
            by_collection
                .entry(entry.collection_id)
                .or_default()
                .push(entry);
        }
    }

    collections
        .into_iter()
        .map(|collection| {
            let mut rows = by_collection.remove(&collection.id).unwrap_or_default();
            rows.sort_by_key(|entry| entry.order);

            let content = rows
                .into_iter()
                .filter_map(|entry| {
                    // Content rows are deleted out-of-band; skip dangling refs.
                    let summary = summaries.get(&entry.content_id)?.clone();

                    let watch_entry = match (entry.content_type, viewer) {
                        (ContentType::Anime, Some(viewer_id)) => {
                            watch.get(&(entry.content_id, viewer_id)).cloned()
                        }
                        _ => None,
                    };

                    Some(CollectionEntryView {
                        entry,
                        content: summary,
                        watch: watch_entry,
                    })
                })
                .collect();

            CollectionPreview {
                collection,
                content,
            }
        })
        .collect()
}
