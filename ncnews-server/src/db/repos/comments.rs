//! Comment repository
//!
//! Comments are inserted and deleted, never updated.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::ArticleRepo;
use crate::db::DbError;
use crate::models::NewComment;

/// Comment record from database
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List an article's comments, newest first.
    ///
    /// An empty result is ambiguous, so it is followed by an explicit
    /// existence check: a known article with no comments yields `[]`, an
    /// unknown one yields `NotFound`.
    pub async fn list_for_article(&self, article_id: i32) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT comment_id, article_id, author, body, votes, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at DESC, comment_id DESC
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;

        if comments.is_empty() && !ArticleRepo::new(self.pool).exists(article_id).await? {
            return Err(DbError::not_found("article", article_id));
        }

        Ok(comments)
    }

    /// Insert a comment on an article.
    ///
    /// Unknown article or author surfaces as `DbError::ForeignKey`.
    pub async fn create(&self, article_id: i32, comment: &NewComment) -> Result<Comment, DbError> {
        let created = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (article_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(article_id)
        .bind(comment.username())
        .bind(comment.body())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(comment_id = created.comment_id, article_id, "comment created");
        Ok(created)
    }

    /// Delete a comment by id.
    pub async fn delete(&self, comment_id: i32) -> Result<(), DbError> {
        let deleted: Option<(i32,)> =
            sqlx::query_as("DELETE FROM comments WHERE comment_id = $1 RETURNING comment_id")
                .bind(comment_id)
                .fetch_optional(self.pool)
                .await?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(DbError::not_found("comment", comment_id)),
        }
    }
}
