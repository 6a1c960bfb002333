use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight projection of a content row, enough to render a collection
/// entry in list and detail views. The referenced content's lifecycle is
/// managed outside this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub image_url: Option<String>,
}
