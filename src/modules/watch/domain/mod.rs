use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Watch status enum matching the `watch_status` database type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::WatchStatus"]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Planned,
    Watching,
    Completed,
    OnHold,
    Dropped,
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchStatus::Planned => write!(f, "planned"),
            WatchStatus::Watching => write!(f, "watching"),
            WatchStatus::Completed => write!(f, "completed"),
            WatchStatus::OnHold => write!(f, "on_hold"),
            WatchStatus::Dropped => write!(f, "dropped"),
        }
    }
}

/// One viewer's progress on one anime. Owned by the watch-list subsystem;
/// the collection engine only reads these rows to decorate display views,
/// and only ever for the requesting viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub anime_id: Uuid,
    pub status: WatchStatus,
    pub episodes: i32,
    pub score: Option<i32>,
}
