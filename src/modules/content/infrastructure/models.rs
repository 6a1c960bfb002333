use crate::modules::content::domain::ContentSummary;
use crate::schema::{anime, characters, people};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// Read models for the content tables. This subsystem never writes to them;
// the rows are owned by the catalog import pipeline.

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = anime)]
pub struct AnimeModel {
    pub id: Uuid,
    pub slug: String,
    pub title_main: String,
    pub title_english: Option<String>,
    pub episodes: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = characters)]
pub struct CharacterModel {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub name_native: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = people)]
pub struct PersonModel {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub name_native: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AnimeModel {
    pub fn into_summary(self) -> ContentSummary {
        ContentSummary {
            id: self.id,
            slug: self.slug,
            title: self.title_main,
            image_url: self.image_url,
        }
    }
}

impl CharacterModel {
    pub fn into_summary(self) -> ContentSummary {
        ContentSummary {
            id: self.id,
            slug: self.slug,
            title: self.name,
            image_url: self.image_url,
        }
    }
}

impl PersonModel {
    pub fn into_summary(self) -> ContentSummary {
        ContentSummary {
            id: self.id,
            slug: self.slug,
            title: self.name,
            image_url: self.image_url,
        }
    }
}
