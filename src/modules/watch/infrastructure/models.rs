use crate::modules::watch::domain::{WatchEntry, WatchStatus};
use crate::schema::anime_watch;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// Read model only; watch rows are written by the watch-list subsystem.
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = anime_watch)]
pub struct WatchModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub anime_id: Uuid,
    pub status: WatchStatus,
    pub episodes: i32,
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WatchModel> for WatchEntry {
    fn from(model: WatchModel) -> Self {
        WatchEntry {
            id: model.id,
            user_id: model.user_id,
            anime_id: model.anime_id,
            status: model.status,
            episodes: model.episodes,
            score: model.score,
        }
    }
}
