//! Topic repository (read-only)

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Topic record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// Topic repository
pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every topic.
    pub async fn list(&self) -> Result<Vec<Topic>, DbError> {
        let topics = sqlx::query_as::<_, Topic>(
            r#"
            SELECT slug, description
            FROM topics
            ORDER BY slug
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }

    /// Whether a topic with this slug exists.
    pub async fn exists(&self, slug: &str) -> Result<bool, DbError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM topics WHERE slug = $1)")
                .bind(slug)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }
}
