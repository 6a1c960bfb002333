pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{AuditAction, AuditLog, AuditLogRepository, FieldDiff};
pub use infrastructure::persistence::AuditLogRepositoryImpl;
