pub mod collection;
pub mod preview;

// Re-exports for easy access
pub use collection::{Collection, CollectionEntry};
pub use preview::{CollectionEntryView, CollectionPreview};
