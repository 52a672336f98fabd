//! Article listing query: sort column, direction and topic filter
//!
//! Sort column and direction end up as literal SQL text, so both are closed
//! enums whose SQL fragments are `&'static str`. Nothing a client sends is
//! ever copied into the statement; the topic is bound as a parameter.

use serde::Deserialize;

use super::ValidationError;

/// Column an article listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        Self::Author,
        Self::Title,
        Self::ArticleId,
        Self::Topic,
        Self::CreatedAt,
        Self::Votes,
        Self::CommentCount,
    ];

    /// Parse a `sort_by` query value. Matching is exact.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|col| col.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "sort_by",
                value: s.to_owned(),
            })
    }

    /// Name as it appears in query strings and JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Title => "title",
            Self::ArticleId => "article_id",
            Self::Topic => "topic",
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
            Self::CommentCount => "comment_count",
        }
    }

    /// ORDER BY expression.
    ///
    /// `comment_count` is an aggregate alias with no table-qualified name;
    /// every other column is qualified with the articles alias `a`.
    pub fn order_expr(&self) -> &'static str {
        match self {
            Self::Author => "a.author",
            Self::Title => "a.title",
            Self::ArticleId => "a.article_id",
            Self::Topic => "a.topic",
            Self::CreatedAt => "a.created_at",
            Self::Votes => "a.votes",
            Self::CommentCount => "comment_count",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse an `order` query value, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ValidationError::InvalidVariant {
                field: "order",
                value: s.to_owned(),
            })
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw query string for `GET /api/articles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

/// Validated article listing query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl TryFrom<ArticleListParams> for ArticleQuery {
    type Error = ValidationError;

    fn try_from(params: ArticleListParams) -> Result<Self, Self::Error> {
        let sort_by = match params.sort_by.as_deref() {
            Some(s) => SortColumn::parse(s)?,
            None => SortColumn::default(),
        };
        let order = match params.order.as_deref() {
            Some(s) => SortOrder::parse(s)?,
            None => SortOrder::default(),
        };
        // `?topic=` with no value means no filter
        let topic = params.topic.filter(|t| !t.is_empty());

        Ok(Self {
            sort_by,
            order,
            topic,
        })
    }
}
