//! Article repository
//!
//! - list: dynamic ORDER BY from whitelisted enums, topic as bound parameter
//! - get: single row with comment count
//! - update_votes: relative increment in one UPDATE (no read-modify-write)

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::TopicRepo;
use crate::db::DbError;
use crate::models::ArticleQuery;

/// Article record from database
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

/// Full article with its derived comment count
#[derive(Debug, Clone, FromRow)]
pub struct ArticleWithCount {
    #[sqlx(flatten)]
    pub article: Article,
    pub comment_count: i32,
}

/// Listing row: every article column except `body`, plus comment count
#[derive(Debug, Clone, FromRow)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i32,
}

const LIST_SELECT: &str = r#"
    SELECT
        a.article_id,
        a.title,
        a.topic,
        a.author,
        a.created_at,
        a.votes,
        a.article_img_url,
        COUNT(c.comment_id)::INT AS comment_count
    FROM articles a
    LEFT JOIN comments c ON c.article_id = a.article_id
"#;

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List articles with comment counts, sorted and optionally filtered.
    ///
    /// Only `SortColumn::order_expr` and `SortOrder::as_sql` are pushed as
    /// raw SQL; both return fixed strings.
    pub async fn list(&self, query: &ArticleQuery) -> Result<Vec<ArticleSummary>, DbError> {
        if let Some(topic) = &query.topic {
            if !TopicRepo::new(self.pool).exists(topic).await? {
                return Err(DbError::not_found("topic", topic));
            }
        }

        let mut builder = QueryBuilder::<Postgres>::new(LIST_SELECT);
        if let Some(topic) = &query.topic {
            builder.push(" WHERE a.topic = ");
            builder.push_bind(topic.as_str());
        }
        builder.push(" GROUP BY a.article_id ORDER BY ");
        builder.push(query.sort_by.order_expr());
        builder.push(" ");
        builder.push(query.order.as_sql());
        // stable output when the sort key ties
        builder.push(", a.article_id ");
        builder.push(query.order.as_sql());

        tracing::debug!(
            sort_by = query.sort_by.as_str(),
            order = query.order.as_sql(),
            topic = query.topic.as_deref(),
            "listing articles"
        );

        let articles = builder
            .build_query_as::<ArticleSummary>()
            .fetch_all(self.pool)
            .await?;

        Ok(articles)
    }

    /// Get a single article with its comment count.
    pub async fn get(&self, id: i32) -> Result<ArticleWithCount, DbError> {
        sqlx::query_as::<_, ArticleWithCount>(
            r#"
            SELECT
                a.article_id,
                a.title,
                a.topic,
                a.author,
                a.body,
                a.created_at,
                a.votes,
                a.article_img_url,
                COUNT(c.comment_id)::INT AS comment_count
            FROM articles a
            LEFT JOIN comments c ON c.article_id = a.article_id
            WHERE a.article_id = $1
            GROUP BY a.article_id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("article", id))
    }

    /// Add `inc_votes` to an article's votes and return the updated row.
    ///
    /// No floor is applied; votes may go negative.
    pub async fn update_votes(&self, id: i32, inc_votes: i32) -> Result<Article, DbError> {
        sqlx::query_as::<_, Article>(
            r#"
            UPDATE articles
            SET votes = votes + $1
            WHERE article_id = $2
            RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
            "#,
        )
        .bind(inc_votes)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("article", id))
    }

    /// Whether an article with this id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }
}
