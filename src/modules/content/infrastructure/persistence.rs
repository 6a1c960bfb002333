use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::content::domain::{ContentRepository, ContentType};
use crate::schema::{anime, characters, people};
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct ContentRepositoryImpl {
    db: Arc<Database>,
}

impl ContentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryImpl {
    async fn resolve_slugs(
        &self,
        content_type: ContentType,
        slugs: Vec<String>,
    ) -> AppResult<HashMap<String, Uuid>> {
        if slugs.is_empty() {
            return Ok(HashMap::new());
        }

        log_debug!(
            "Resolving {} {} slug(s) in one batched lookup",
            slugs.len(),
            content_type
        );

        let db = Arc::clone(&self.db);

        let pairs = task::spawn_blocking(move || -> AppResult<Vec<(String, Uuid)>> {
            let mut conn = db.get_connection()?;

            // Static dispatch from discriminator to backing table. The set of
            // discriminators is closed, so this match is exhaustive.
            let pairs = match content_type {
                ContentType::Anime => anime::table
                    .filter(anime::slug.eq_any(&slugs))
                    .select((anime::slug, anime::id))
                    .load::<(String, Uuid)>(&mut conn)?,
                ContentType::Character => characters::table
                    .filter(characters::slug.eq_any(&slugs))
                    .select((characters::slug, characters::id))
                    .load::<(String, Uuid)>(&mut conn)?,
                ContentType::Person => people::table
                    .filter(people::slug.eq_any(&slugs))
                    .select((people::slug, people::id))
                    .load::<(String, Uuid)>(&mut conn)?,
            };

            Ok(pairs)
        })
        .await??;

        Ok(pairs.into_iter().collect())
    }
}
