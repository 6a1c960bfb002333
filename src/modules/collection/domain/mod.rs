pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::collection::{Collection, CollectionEntry};
pub use entities::preview::{CollectionEntryView, CollectionPreview};
pub use repositories::collection_repository::CollectionRepository;
pub use value_objects::{CollectionArgs, CollectionFilter, ContentArgs, DISPLAY_CONTENT_LIMIT};
