//! Collection engine for a media-tracking community platform.
//!
//! Users assemble ordered, heterogeneous lists of content references (anime,
//! characters, people) into named collections. The engine owns the collection
//! lifecycle - create, transactional content replacement, soft delete - with
//! diff-based audit logging and visibility-scoped read paths that attach a
//! viewer's own watch progress and nothing else.
//!
//! HTTP routing, authentication and authorization live upstream; this crate
//! assumes the acting user is already allowed to touch the given collection.

pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::{
    audit::AuditLogRepositoryImpl, collection::CollectionRepositoryImpl,
    collection::CollectionService, content::ContentRepositoryImpl,
};
use shared::Database;

pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;

/// Wire a [`CollectionService`] against the Diesel-backed repositories.
pub fn collection_service(db: Arc<Database>) -> Arc<CollectionService> {
    let collection_repo = Arc::new(CollectionRepositoryImpl::new(Arc::clone(&db)));
    let content_repo = Arc::new(ContentRepositoryImpl::new(Arc::clone(&db)));
    let audit_repo = Arc::new(AuditLogRepositoryImpl::new(db));

    Arc::new(CollectionService::new(
        collection_repo,
        content_repo,
        audit_repo,
    ))
}
