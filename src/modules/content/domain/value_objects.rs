use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// Content type discriminator for polymorphic collection entries.
///
/// The set is closed: every collection is pinned to exactly one of these for
/// its whole lifetime, and every membership row carries the same tag as its
/// parent collection. Matches the `content_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::ContentType"]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Anime,
    Character,
    Person,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Anime => "anime",
            ContentType::Character => "character",
            ContentType::Person => "person",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentType::Character).unwrap(),
            "\"character\""
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ContentType::Anime.to_string(), "anime");
        assert_eq!(ContentType::Person.to_string(), "person");
    }
}
