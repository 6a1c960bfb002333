pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::ContentSummary;
pub use repositories::ContentRepository;
pub use value_objects::ContentType;
