pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CollectionService;
pub use domain::{
    Collection, CollectionArgs, CollectionEntry, CollectionFilter, CollectionPreview,
    CollectionRepository, ContentArgs,
};
pub use infrastructure::persistence::CollectionRepositoryImpl;
