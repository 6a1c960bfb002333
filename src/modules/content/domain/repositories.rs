use std::collections::HashMap;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use super::value_objects::ContentType;
use crate::shared::errors::AppResult;

/// Read-only access to the type-specific content tables.
///
/// The discriminator-to-table mapping is a static dispatch inside the
/// implementation; no query is issued per slug, resolution is always one
/// batched lookup.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Resolve external slugs to internal identifiers in a single query.
    /// Slugs missing from the content table are simply absent from the map.
    async fn resolve_slugs(
        &self,
        content_type: ContentType,
        slugs: Vec<String>,
    ) -> AppResult<HashMap<String, Uuid>>;
}
