#![allow(dead_code)]

pub mod fakes;

use std::sync::Arc;

use tsudoi::modules::collection::CollectionService;

use fakes::{FakeAuditLogRepository, FakeCollectionRepository, FakeContentRepository};

pub struct TestServices {
    pub service: CollectionService,
    pub content: Arc<FakeContentRepository>,
    pub collections: Arc<FakeCollectionRepository>,
    pub audit: Arc<FakeAuditLogRepository>,
}

/// Wire a [`CollectionService`] against fresh in-memory fakes.
pub fn build_services() -> TestServices {
    let content = Arc::new(FakeContentRepository::default());
    let collections = Arc::new(FakeCollectionRepository::new(Arc::clone(&content)));
    let audit = Arc::new(FakeAuditLogRepository::default());

    let service = CollectionService::new(
        collections.clone() as Arc<dyn tsudoi::modules::collection::CollectionRepository>,
        content.clone() as Arc<dyn tsudoi::modules::content::domain::ContentRepository>,
        audit.clone() as Arc<dyn tsudoi::modules::audit::domain::AuditLogRepository>,
    );

    TestServices {
        service,
        content,
        collections,
        audit,
    }
}
