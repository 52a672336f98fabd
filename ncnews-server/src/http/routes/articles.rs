//! Article endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Article, ArticleRepo, ArticleSummary, ArticleWithCount};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId};
use crate::http::server::AppState;
use crate::models::{ArticleListParams, ArticleQuery, ValidationError};

/// Vote update request
#[derive(Deserialize)]
pub struct VoteUpdateRequest {
    pub inc_votes: Option<i32>,
}

/// Article response
///
/// `body` is absent from listings; `comment_count` is absent from the
/// vote-update response.
#[derive(Serialize)]
pub struct ArticleResponse {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub created_at: String,
    pub votes: i32,
    pub article_img_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i32>,
}

impl From<Article> for ArticleResponse {
    fn from(a: Article) -> Self {
        Self {
            article_id: a.article_id,
            title: a.title,
            topic: a.topic,
            author: a.author,
            body: Some(a.body),
            created_at: a.created_at.to_rfc3339(),
            votes: a.votes,
            article_img_url: a.article_img_url,
            comment_count: None,
        }
    }
}

impl From<ArticleWithCount> for ArticleResponse {
    fn from(a: ArticleWithCount) -> Self {
        Self {
            comment_count: Some(a.comment_count),
            ..Self::from(a.article)
        }
    }
}

impl From<ArticleSummary> for ArticleResponse {
    fn from(a: ArticleSummary) -> Self {
        Self {
            article_id: a.article_id,
            title: a.title,
            topic: a.topic,
            author: a.author,
            body: None,
            created_at: a.created_at.to_rfc3339(),
            votes: a.votes,
            article_img_url: a.article_img_url,
            comment_count: Some(a.comment_count),
        }
    }
}

#[derive(Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleResponse>,
}

#[derive(Serialize)]
pub struct SingleArticleResponse {
    pub article: ArticleResponse,
}

/// GET /api/articles?sort_by&order&topic
async fn list_articles(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        ApiError::Validation(ValidationError::Malformed {
            reason: rejection.body_text(),
        })
    })?;
    // whitelist check happens before any query runs
    let query = ArticleQuery::try_from(params)?;

    let articles = ArticleRepo::new(&state.pool).list(&query).await?;
    Ok(Json(ArticlesResponse {
        articles: articles.into_iter().map(ArticleResponse::from).collect(),
    }))
}

/// GET /api/articles/{article_id}
async fn get_article(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<SingleArticleResponse>, ApiError> {
    let article = ArticleRepo::new(&state.pool).get(id).await?;
    Ok(Json(SingleArticleResponse {
        article: ArticleResponse::from(article),
    }))
}

/// PATCH /api/articles/{article_id}
async fn update_article_votes(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ApiJson(req): ApiJson<VoteUpdateRequest>,
) -> Result<Json<SingleArticleResponse>, ApiError> {
    let inc_votes = req
        .inc_votes
        .ok_or(ValidationError::Missing { field: "inc_votes" })?;

    let article = ArticleRepo::new(&state.pool)
        .update_votes(id, inc_votes)
        .await?;

    Ok(Json(SingleArticleResponse {
        article: ArticleResponse::from(article),
    }))
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route(
            "/api/articles/{article_id}",
            get(get_article).patch(update_article_votes),
        )
}
