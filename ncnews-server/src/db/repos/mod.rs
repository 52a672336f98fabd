//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps one resource:
//! - Values are always bound parameters
//! - Empty results are turned into `DbError::NotFound` here, not in handlers
//! - Reference checks are left to foreign keys, classified by `DbError`

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

pub use articles::{Article, ArticleRepo, ArticleSummary, ArticleWithCount};
pub use comments::{Comment, CommentRepo};
pub use topics::{Topic, TopicRepo};
pub use users::{User, UserRepo};
